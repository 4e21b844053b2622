//! TTL Cache - A thread-safe in-process key-value cache
//!
//! Entries carry an absolute expiry instant and are discarded lazily when a
//! read finds them expired. An optional background task can sweep them early.

pub mod cache;
pub mod config;
pub mod error;
pub mod tasks;

pub use cache::{Cache, CacheStats};
pub use config::Config;
pub use tasks::spawn_cleanup_task;
