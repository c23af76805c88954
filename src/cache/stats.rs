//! Cache Statistics Module
//!
//! Counters for lookups, capacity evictions and lazy TTL purges.

use serde::Serialize;

// == Cache Stats ==
/// Snapshot of store activity since construction.
///
/// `get` and `observe` count as lookups; `contains` only shows up here when it
/// purges an expired entry.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Lookups that found a fresh entry
    pub hits: u64,
    /// Lookups that found nothing, including entries that had just expired
    pub misses: u64,
    /// Least recently used entries dropped to admit a new key
    pub evictions: u64,
    /// Entries purged on access once older than the TTL
    pub expirations: u64,
    /// Entries held when the snapshot was taken
    pub total_entries: usize,
}

impl CacheStats {
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Fraction of lookups that hit, in `0.0..=1.0`; `0.0` before any lookup.
    pub fn hit_rate(&self) -> f64 {
        match self.hits + self.misses {
            0 => 0.0,
            lookups => self.hits as f64 / lookups as f64,
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub fn record_expiration(&mut self) {
        self.expirations += 1;
    }

    /// Stamps the current entry count onto a snapshot.
    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}
