//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with LRU tracking and TTL expiration.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;
use std::rc::{Rc, Weak};
use std::time::Duration;

use tracing::{debug, trace};

use crate::cache::lru::NodeIndex;
use crate::cache::{CacheEntry, CacheStats, LruTracker, Observers};
use crate::clock::{Clock, SystemClock};
use crate::config::CacheConfig;

// == Cache Store ==
/// Bounded key-value cache with LRU eviction, lazy TTL expiry and update observers.
///
/// Every key in the index owns exactly one node in the recency list and every
/// node belongs to exactly one indexed key. Expired entries are only removed
/// when `get`, `observe` or `contains` next looks at them.
///
/// The store is single-threaded by construction; wrap it in a lock to share it.
///
/// # Example
/// ```
/// use lru_ttl_cache::{CacheConfig, CacheStore};
///
/// let mut cache: CacheStore<String, u32> = CacheStore::new(CacheConfig::with(60, 2));
/// cache.put("a".to_string(), 1);
/// assert_eq!(cache.get("a"), Some(&1));
/// ```
#[derive(Debug)]
pub struct CacheStore<K, V, C = SystemClock>
where
    C: Clock,
{
    /// Key-value storage
    entries: HashMap<K, CacheEntry<V>>,
    /// Recency order, most recent first
    lru: LruTracker<K>,
    /// Subscribers notified on every put
    observers: Observers<K, V>,
    /// Performance statistics
    stats: CacheStats,
    /// Bound once at construction
    config: CacheConfig,
    clock: C,
}

impl<K, V> CacheStore<K, V, SystemClock>
where
    K: Eq + Hash + Clone,
{
    // == Constructor ==
    /// Creates a new CacheStore reading time from the system monotonic clock.
    pub fn new(config: CacheConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<K, V, C> CacheStore<K, V, C>
where
    K: Eq + Hash + Clone,
    C: Clock,
{
    /// Creates a new CacheStore with a custom clock (useful for testing).
    pub fn with_clock(config: CacheConfig, clock: C) -> Self {
        debug!(ttl = ?config.ttl, max_size = config.max_size, "creating cache store");
        Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            observers: Observers::new(),
            stats: CacheStats::new(),
            config,
            clock,
        }
    }

    // == Put ==
    /// Stores a key-value pair, then notifies every subscriber.
    ///
    /// An existing key gets the new value, a fresh TTL and the front of the
    /// recency list; the size is unchanged so nothing is evicted. A new key
    /// at capacity first evicts the least recently used entry.
    ///
    /// With `max_size == 0` nothing is retained, but subscribers still fire.
    pub fn put(&mut self, key: K, value: V) {
        let now = self.clock.now();

        if let Some(entry) = self.entries.get_mut(&key) {
            entry.refresh(value, now);
            self.lru.move_to_front(entry.position);
            trace!("updated existing entry");
            self.observers.notify(&key, &entry.value);
            return;
        }

        if self.config.max_size == 0 {
            trace!("zero capacity, value not retained");
            self.observers.notify(&key, &value);
            return;
        }

        if self.entries.len() >= self.config.max_size {
            self.evict_oldest();
        }

        let position = self.lru.push_front(key.clone());
        let entry = CacheEntry::new(value, now, position);
        let stored = Rc::clone(&entry.value);
        self.entries.insert(key.clone(), entry);
        trace!(entries = self.entries.len(), "inserted new entry");

        self.observers.notify(&key, &stored);
    }

    // == Get ==
    /// Retrieves a value by key and marks it most recently used.
    ///
    /// Returns `None` on a miss, or when the entry has outlived its TTL, in
    /// which case it is purged. The returned borrow pins the store, so the
    /// value cannot be evicted while it is held.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.touch(key).map(|entry| entry.value.as_ref())
    }

    // == Observe ==
    /// Like [`get`](Self::get), but hands out a weak handle instead of a borrow.
    ///
    /// The store keeps the only strong reference, so the handle stops
    /// upgrading as soon as the entry is overwritten, evicted, expired,
    /// removed or cleared. Callers must re-check it with `upgrade` before use.
    pub fn observe<Q>(&mut self, key: &Q) -> Option<Weak<V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.touch(key).map(|entry| Rc::downgrade(&entry.value))
    }

    // == Contains ==
    /// Checks whether a fresh entry exists, without changing recency order.
    ///
    /// An expired entry is purged and reported absent.
    pub fn contains<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.fresh_position(key).is_some()
    }

    // == Delete ==
    /// Removes an entry by key. Returns `true` if it was present.
    ///
    /// Subscribers are not notified.
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.entries.remove(key) {
            Some(entry) => {
                self.lru.remove(entry.position);
                true
            }
            None => false,
        }
    }

    // == Clear ==
    /// Empties the index and the recency list. Subscribers are not notified.
    pub fn clear(&mut self) {
        let dropped = self.entries.len();
        self.entries.clear();
        self.lru.clear();
        debug!(dropped, "cache cleared");
    }

    // == Subscribe ==
    /// Registers a callback run after every successful put.
    ///
    /// Callbacks run in subscription order. A panic in one propagates out of
    /// `put`; the entry has already been stored by then.
    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: FnMut(&K, &V) + 'static,
    {
        self.observers.subscribe(callback);
        debug!(subscribers = self.observers.len(), "subscriber registered");
    }

    // == Time To Live ==
    /// Returns how long a fresh entry has left, without touching it.
    ///
    /// Expired entries report `None` here but are only purged by the next
    /// `get`, `observe` or `contains`.
    pub fn ttl_remaining<Q>(&self, key: &Q) -> Option<Duration>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let now = self.clock.now();
        self.entries
            .get(key)
            .filter(|entry| !entry.is_expired(now, self.config.ttl))
            .map(|entry| entry.ttl_remaining(now, self.config.ttl))
    }

    /// Keys from most to least recently used. Does not affect recency.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.lru.iter()
    }

    // == Stats ==
    /// Returns current cache statistics; `total_entries` is read from the index.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    /// Returns the configuration bound at construction.
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fresh-entry lookup shared by `get` and `observe`: counts the hit or
    /// miss and moves a hit to the front.
    fn touch<Q>(&mut self, key: &Q) -> Option<&CacheEntry<V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(position) = self.fresh_position(key) else {
            self.stats.record_miss();
            return None;
        };
        self.lru.move_to_front(position);
        self.stats.record_hit();
        self.entries.get(key)
    }

    /// Returns the recency handle of a fresh entry, purging it if expired.
    fn fresh_position<Q>(&mut self, key: &Q) -> Option<NodeIndex>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let now = self.clock.now();
        let entry = self.entries.get(key)?;
        if !entry.is_expired(now, self.config.ttl) {
            return Some(entry.position);
        }

        let position = entry.position;
        self.entries.remove(key);
        self.lru.remove(position);
        self.stats.record_expiration();
        debug!(entries = self.entries.len(), "purged expired entry");
        None
    }

    fn evict_oldest(&mut self) {
        if let Some(victim) = self.lru.pop_back() {
            self.entries.remove(&victim);
            self.stats.record_eviction();
            debug!(
                max_size = self.config.max_size,
                "evicted least recently used entry"
            );
        }
    }

    /// Checks that the index and the recency list describe the same key set.
    #[cfg(test)]
    pub(crate) fn assert_consistent(&self) {
        assert_eq!(self.entries.len(), self.lru.len(), "index/list size diverged");
        assert!(self.entries.len() <= self.config.max_size, "capacity exceeded");
        for key in self.lru.iter() {
            assert!(self.entries.contains_key(key), "listed key missing from index");
        }
    }
}
