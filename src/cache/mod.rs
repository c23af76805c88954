//! Cache Module
//!
//! Provides in-memory caching with TTL expiration, LRU eviction and
//! synchronous update notifications.

mod entry;
mod lru;
mod observer;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use lru::{LruTracker, NodeIndex};
pub use observer::{Callback, Observers};
pub use stats::CacheStats;
pub use store::CacheStore;
