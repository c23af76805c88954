//! LRU/TTL Cache - An embeddable in-process cache
//!
//! Bounded key-value store with LRU eviction, lazy TTL expiration and
//! synchronous observers for every insert or update.

pub mod cache;
pub mod clock;
pub mod config;
pub mod error;

pub use cache::{CacheStats, CacheStore};
pub use clock::{Clock, MockClock, SystemClock};
pub use config::CacheConfig;
pub use error::{CacheError, Result};
