//! LRU/TTL Cache demo
//!
//! Exercises the cache the way an embedding application would: configure it,
//! subscribe an observer, write a value, and read it back before and after
//! its TTL has elapsed.

use std::thread::sleep;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lru_ttl_cache::{CacheConfig, CacheStore};

/// Main entry point for the cache demo.
///
/// # Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Subscribe a logging observer
/// 4. Put a value and read it back at t=0, t=ttl/2 and t=1.5*ttl
/// 5. Print cache statistics as JSON
fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lru_ttl_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = CacheConfig::from_env().context("failed to load cache configuration")?;
    info!(
        "Configuration loaded: ttl={}s, max_size={}",
        config.ttl.as_secs(),
        config.max_size
    );

    let mut cache: CacheStore<u32, String> = CacheStore::new(config);
    cache.subscribe(|key, value| info!("cache update: {} = {}", key, value));

    cache.put(42, "this is 42".to_string());

    let half_ttl = config.ttl / 2;
    let reads = [
        ("immediately", None),
        ("after ttl/2", Some(half_ttl)),
        ("after 1.5*ttl", Some(config.ttl)),
    ];
    for (label, wait) in reads {
        if let Some(wait) = wait {
            sleep(wait);
        }
        match cache.get(&42) {
            Some(value) => info!("read {}: {}", label, value),
            None => warn!("read {}: no value", label),
        }
    }

    let stats = serde_json::to_string_pretty(&cache.stats()).context("failed to encode stats")?;
    println!("{stats}");

    Ok(())
}
