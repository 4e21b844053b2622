//! Cache Store Module
//!
//! Main cache engine: a locked HashMap of entries with lazy TTL expiration.

use std::collections::HashMap;
use std::fmt;
use std::time::{Duration, Instant};

use parking_lot::RwLock;
use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, StatsCounters};

// == Cache ==
/// Thread-safe key-value cache with per-entry TTL.
///
/// Expiry is enforced lazily: an expired entry is dropped the next time `get`
/// finds it. Entries that are never read again stay in memory until `delete`,
/// `clear` or `purge_expired` removes them, so write-heavy workloads with short
/// TTLs should run [`spawn_cleanup_task`](crate::tasks::spawn_cleanup_task).
pub struct Cache<T> {
    /// Key-value storage
    entries: RwLock<HashMap<String, CacheEntry<T>>>,
    /// Performance counters
    stats: StatsCounters,
}

impl<T> Cache<T> {
    // == Constructor ==
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            stats: StatsCounters::new(),
        }
    }

    // == Set ==
    /// Stores a value that expires `ttl` from now.
    ///
    /// An existing entry for `key` is replaced outright, value and expiry both.
    pub fn set(&self, key: impl Into<String>, value: T, ttl: Duration) {
        let entry = CacheEntry::new(value, ttl);
        self.entries.write().insert(key.into(), entry);
    }

    // == Delete ==
    /// Removes the entry for `key`, if any.
    pub fn delete(&self, key: &str) {
        self.entries.write().remove(key);
    }

    // == Clear ==
    /// Discards every entry.
    pub fn clear(&self) {
        let previous = std::mem::take(&mut *self.entries.write());
        debug!("Cache cleared, dropped {} entries", previous.len());
    }

    // == Purge Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let removed = {
            let mut entries = self.entries.write();
            let before = entries.len();
            entries.retain(|_, entry| !entry.is_expired_at(now));
            before - entries.len()
        };

        self.stats.record_expirations(removed as u64);
        removed
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot(self.len())
    }

    // == Length ==
    /// Returns the number of stored entries, including expired ones not yet removed.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl<T: Clone> Cache<T> {
    // == Get ==
    /// Retrieves a clone of the value stored under `key`.
    ///
    /// Returns `None` when the key was never set or has expired; the two cases
    /// are indistinguishable. An expired entry is removed as a side effect.
    /// Reading does not extend the entry's TTL.
    pub fn get(&self, key: &str) -> Option<T> {
        let now = Instant::now();

        {
            let entries = self.entries.read();
            match entries.get(key) {
                None => {
                    self.stats.record_miss();
                    return None;
                }
                Some(entry) if !entry.is_expired_at(now) => {
                    self.stats.record_hit();
                    return Some(entry.value.clone());
                }
                Some(_) => {}
            }
        }

        self.remove_if_expired(key, now);
        self.stats.record_miss();
        None
    }
}

impl<T> Cache<T> {
    // == Remove If Expired ==
    /// Removes `key` if its entry is still expired as of `now`.
    ///
    /// Called after a read-locked lookup saw the entry expired. A concurrent
    /// `set` may have replaced it since, so the check is repeated under the
    /// write lock. Returns true if an entry was removed.
    fn remove_if_expired(&self, key: &str, now: Instant) -> bool {
        let mut entries = self.entries.write();
        if !entries.get(key).is_some_and(|entry| entry.is_expired_at(now)) {
            return false;
        }

        entries.remove(key);
        self.stats.record_expirations(1);
        debug!("Removed expired key: {}", key);
        true
    }
}

impl<T> Default for Cache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Cache<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cache")
            .field("entries", &self.len())
            .finish()
    }
}
