//! TTL Cache demo
//!
//! Walks a single cache through set, read, expiry, delete and clear, logging
//! what each read observes.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ttl_cache::{spawn_cleanup_task, Cache, Config};

/// Values of mixed kinds stored in one cache.
#[derive(Debug, Clone)]
enum DemoValue {
    Text(String),
    Number(i64),
}

impl fmt::Display for DemoValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DemoValue::Text(text) => write!(f, "{}", text),
            DemoValue::Number(number) => write!(f, "{}", number),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ttl_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    info!(
        "Configuration loaded: cleanup_interval={}s, demo_time_scale={}",
        config.cleanup_interval, config.demo_time_scale
    );

    let cache: Arc<Cache<DemoValue>> = Arc::new(Cache::new());
    let cleanup_handle = config
        .cleanup_interval()
        .map(|interval| spawn_cleanup_task(cache.clone(), interval));

    let secs = |n: u64| config.demo_duration(Duration::from_secs(n));

    cache.set("name", DemoValue::Text("mohit".to_string()), secs(2));
    cache.set("weight", DemoValue::Number(75), secs(5));

    if let Some(value) = cache.get("name") {
        info!("Value for name: {}", value);
    }

    tokio::time::sleep(secs(3)).await;

    if cache.get("name").is_none() {
        info!("Name key has expired");
    }

    if let Some(value) = cache.get("weight") {
        info!("Value for weight before expiry: {}", value);
    }

    tokio::time::sleep(secs(3)).await;

    if cache.get("weight").is_none() {
        info!("Weight key has expired");
    }

    cache.set("key", DemoValue::Text("val".to_string()), secs(2));
    cache.delete("key");
    if cache.get("key").is_none() {
        info!("Deleted key is gone");
    }

    cache.clear();
    info!("Cache cleared, {} entries remain", cache.len());

    info!("Final stats: {}", serde_json::to_string(&cache.stats())?);

    if let Some(handle) = cleanup_handle {
        handle.abort();
    }

    Ok(())
}
