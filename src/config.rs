//! Configuration Module
//!
//! Handles loading the demo and sweep settings from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{ConfigError, Result};

/// Runtime configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Background sweep interval in seconds, 0 disables the sweep
    pub cleanup_interval: u64,
    /// Divisor applied to the demo scenario's TTLs and sleeps
    pub demo_time_scale: u32,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CLEANUP_INTERVAL` - Sweep frequency in seconds, 0 = lazy expiry only (default: 0)
    /// - `DEMO_TIME_SCALE` - Speed-up factor for the demo, at least 1 (default: 1)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Builds a Config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let cleanup_interval =
            parse_var(&lookup, "CLEANUP_INTERVAL")?.unwrap_or(defaults.cleanup_interval);
        let demo_time_scale =
            parse_var(&lookup, "DEMO_TIME_SCALE")?.unwrap_or(defaults.demo_time_scale);

        if demo_time_scale == 0 {
            return Err(ConfigError::OutOfRange {
                var: "DEMO_TIME_SCALE",
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(Self {
            cleanup_interval,
            demo_time_scale,
        })
    }

    /// Returns the sweep interval, or None when the sweep is disabled.
    pub fn cleanup_interval(&self) -> Option<Duration> {
        (self.cleanup_interval > 0).then(|| Duration::from_secs(self.cleanup_interval))
    }

    /// Scales a demo duration down by `demo_time_scale`.
    ///
    /// A zero scale leaves the duration unchanged.
    pub fn demo_duration(&self, duration: Duration) -> Duration {
        duration
            .checked_div(self.demo_time_scale)
            .unwrap_or(duration)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cleanup_interval: 0,
            demo_time_scale: 1,
        }
    }
}

fn parse_var<F, T>(lookup: &F, var: &'static str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(var) {
        None => Ok(None),
        Some(value) => {
            let parsed = value.trim().parse();
            parsed
                .map(Some)
                .map_err(|_| ConfigError::InvalidValue { var, value })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var: &str| vars.get(var).cloned()
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.cleanup_interval, 0);
        assert_eq!(config.demo_time_scale, 1);
        assert!(config.cleanup_interval().is_none());
    }

    #[test]
    fn test_config_from_lookup_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_from_lookup_values() {
        let config = Config::from_lookup(lookup_from(&[
            ("CLEANUP_INTERVAL", "5"),
            ("DEMO_TIME_SCALE", " 10 "),
        ]))
        .unwrap();

        assert_eq!(config.cleanup_interval(), Some(Duration::from_secs(5)));
        assert_eq!(
            config.demo_duration(Duration::from_secs(3)),
            Duration::from_millis(300)
        );
    }

    #[test]
    fn test_config_invalid_value() {
        let err = Config::from_lookup(lookup_from(&[("CLEANUP_INTERVAL", "soon")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                var: "CLEANUP_INTERVAL",
                value: "soon".to_string(),
            }
        );
    }

    #[test]
    fn test_config_zero_time_scale_rejected() {
        let err = Config::from_lookup(lookup_from(&[("DEMO_TIME_SCALE", "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange { var: "DEMO_TIME_SCALE", .. }));
    }

    #[test]
    fn test_demo_duration_with_zero_scale_is_unscaled() {
        let config = Config {
            demo_time_scale: 0,
            ..Config::default()
        };

        assert_eq!(
            config.demo_duration(Duration::from_secs(2)),
            Duration::from_secs(2)
        );
    }
}
