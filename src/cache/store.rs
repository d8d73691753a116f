//! TTL Cache Module
//!
//! Generic in-memory key/value store with lazy, read-time expiry.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crate::cache::{CacheEntry, CacheStats, Clock, SystemClock};

// == TTL Cache ==
/// In-memory cache where every entry expires a fixed `ttl` after it was written.
///
/// Expired entries are never returned. They are removed the next time they are
/// read; there is no background sweep and no size bound.
#[derive(Debug)]
pub struct TtlCache<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Lifetime applied to every write
    ttl: Duration,
    /// Time source
    clock: Arc<dyn Clock>,
    /// Performance statistics
    stats: CacheStats,
}

impl<V: Clone> TtlCache<V> {
    // == Constructor ==
    /// Creates an empty cache driven by the system clock.
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, Arc::new(SystemClock))
    }

    /// Creates an empty cache driven by the given clock.
    pub fn with_clock(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
            clock,
            stats: CacheStats::new(),
        }
    }

    // == Get ==
    /// Returns the value stored under `key`, if present and not expired.
    ///
    /// An expired entry is removed and reported as absent.
    pub fn get(&mut self, key: &str) -> Option<V> {
        let now = self.clock.now_ms();

        let expired = match self.entries.get(key) {
            None => {
                self.stats.record_miss();
                return None;
            }
            Some(entry) => entry.is_expired_at(now),
        };

        if expired {
            self.entries.remove(key);
            self.stats.record_expiration();
            self.stats.set_total_entries(self.entries.len());
            return None;
        }

        self.stats.record_hit();
        self.entries.get(key).map(|entry| entry.value.clone())
    }

    // == Set ==
    /// Stores `value` under `key`, replacing any previous entry and resetting its expiry.
    pub fn set(&mut self, key: impl Into<String>, value: V) {
        let entry = CacheEntry::new(value, self.clock.now_ms(), self.ttl);
        self.entries.insert(key.into(), entry);
        self.stats.set_total_entries(self.entries.len());
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    /// Returns the configured time to live.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Length ==
    /// Returns the number of stored entries, including expired ones not yet read.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
