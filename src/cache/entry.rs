//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A stored value together with the instant it stops being valid.
#[derive(Debug, Clone)]
pub(crate) struct CacheEntry<T> {
    /// The stored value
    pub(crate) value: T,
    /// Expiration instant, None when `now + ttl` is past the clock's range
    pub(crate) expires_at: Option<Instant>,
}

impl<T> CacheEntry<T> {
    // == Constructor ==
    /// Creates a new entry that expires `ttl` from now.
    ///
    /// A zero TTL is accepted; the entry is expired as soon as the clock moves.
    pub(crate) fn new(value: T, ttl: Duration) -> Self {
        Self {
            value,
            expires_at: Instant::now().checked_add(ttl),
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired relative to `now`.
    ///
    /// Boundary condition: an entry is expired only when its expiration instant
    /// is strictly before `now`. At the exact instant it is still valid.
    pub(crate) fn is_expired_at(&self, now: Instant) -> bool {
        match self.expires_at {
            Some(expires) => expires < now,
            None => false,
        }
    }
}
