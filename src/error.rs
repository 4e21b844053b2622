//! Error types for the cache crate
//!
//! Cache operations never fail; the only fallible surface is configuration
//! loading. Provides unified error handling using thiserror.

use thiserror::Error;

// == Config Error Enum ==
/// Errors raised while loading [`Config`](crate::config::Config).
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable held a value that could not be parsed
    #[error("Invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },

    /// A parsed value fell outside its allowed range
    #[error("{var} out of range: {reason}")]
    OutOfRange { var: &'static str, reason: String },
}

// == Result Type Alias ==
/// Convenience Result type for the cache crate.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ConfigError::InvalidValue {
            var: "CLEANUP_INTERVAL",
            value: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid value for CLEANUP_INTERVAL: \"abc\"");

        let err = ConfigError::OutOfRange {
            var: "DEMO_TIME_SCALE",
            reason: "must be at least 1".to_string(),
        };
        assert_eq!(err.to_string(), "DEMO_TIME_SCALE out of range: must be at least 1");
    }
}
