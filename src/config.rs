//! Configuration Module
//!
//! Immutable `(ttl, max_size)` pair bound to a cache at construction.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{CacheError, Result};

/// Default time-to-live in seconds
pub const DEFAULT_TTL_SECS: u64 = 10;

/// Default maximum number of entries
pub const DEFAULT_MAX_SIZE: usize = 300;

/// Cache configuration parameters.
///
/// A `max_size` of zero is accepted and yields a cache that retains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum age of an entry before it is treated as absent
    pub ttl: Duration,
    /// Maximum number of entries held at once
    pub max_size: usize,
}

impl CacheConfig {
    /// Creates a configuration from a TTL in whole seconds and an entry limit.
    pub fn with(ttl_secs: u64, max_size: usize) -> Self {
        Self {
            ttl: Duration::from_secs(ttl_secs),
            max_size,
        }
    }

    /// Creates a Config by loading overrides from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_TTL_SECS` - TTL in seconds (default: 10)
    /// - `CACHE_MAX_SIZE` - Maximum entries (default: 300)
    ///
    /// Unset variables fall back to the default; unparsable ones are an error.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let ttl_secs = parse_var(&lookup, "CACHE_TTL_SECS", DEFAULT_TTL_SECS)?;
        let max_size = parse_var(&lookup, "CACHE_MAX_SIZE", DEFAULT_MAX_SIZE)?;
        Ok(Self::with(ttl_secs, max_size))
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self::with(DEFAULT_TTL_SECS, DEFAULT_MAX_SIZE)
    }
}

fn parse_var<F, T>(lookup: &F, var: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(var) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| CacheError::InvalidConfig {
                var: var.to_string(),
                value: raw,
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn test_config_default() {
        let config = CacheConfig::default();
        assert_eq!(config.ttl, Duration::from_secs(10));
        assert_eq!(config.max_size, 300);
    }

    #[test]
    fn test_config_with() {
        let config = CacheConfig::with(100, 2);
        assert_eq!(config.ttl, Duration::from_secs(100));
        assert_eq!(config.max_size, 2);
    }

    #[test]
    fn test_config_with_zero_values() {
        let config = CacheConfig::with(0, 0);
        assert_eq!(config.ttl, Duration::ZERO);
        assert_eq!(config.max_size, 0);
    }

    #[test]
    fn test_config_from_lookup_defaults() {
        let config = CacheConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, CacheConfig::default());
    }

    #[test]
    fn test_config_from_lookup_overrides() {
        let config = CacheConfig::from_lookup(lookup_from(&[
            ("CACHE_TTL_SECS", "15"),
            ("CACHE_MAX_SIZE", " 42 "),
        ]))
        .unwrap();
        assert_eq!(config, CacheConfig::with(15, 42));
    }

    #[test]
    fn test_config_from_lookup_invalid() {
        let result = CacheConfig::from_lookup(lookup_from(&[("CACHE_MAX_SIZE", "-3")]));
        match result {
            Err(CacheError::InvalidConfig { var, value }) => {
                assert_eq!(var, "CACHE_MAX_SIZE");
                assert_eq!(value, "-3");
            }
            other => panic!("expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_config_serde_roundtrip_shape() {
        let json = serde_json::to_value(CacheConfig::with(1, 100)).unwrap();
        assert_eq!(json["max_size"], 100);
        assert_eq!(json["ttl"]["secs"], 1);
    }
}
