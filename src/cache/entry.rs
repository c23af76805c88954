//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::rc::Rc;
use std::time::{Duration, Instant};

use super::lru::NodeIndex;

// == Cache Entry ==
/// Represents a single cache entry with value and metadata.
///
/// The store holds the only strong reference to `value`; handles given out by
/// `observe` are weak and die with the entry.
#[derive(Debug)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: Rc<V>,
    /// Instant the value was last written
    pub created_at: Instant,
    /// Node of this key in the recency list
    pub position: NodeIndex,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    pub fn new(value: V, created_at: Instant, position: NodeIndex) -> Self {
        Self {
            value: Rc::new(value),
            created_at,
            position,
        }
    }

    // == Refresh ==
    /// Replaces the value and restarts the TTL clock.
    ///
    /// The old allocation is dropped, so weak handles to it are invalidated.
    pub fn refresh(&mut self, value: V, now: Instant) {
        self.value = Rc::new(value);
        self.created_at = now;
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// An entry is expired only once its age is strictly greater than `ttl`;
    /// at exactly `ttl` it is still fresh.
    pub fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        self.age(now) > ttl
    }

    // == Time To Live ==
    /// Returns the remaining lifetime, saturating at zero.
    pub fn ttl_remaining(&self, now: Instant, ttl: Duration) -> Duration {
        ttl.saturating_sub(self.age(now))
    }

    fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }
}
