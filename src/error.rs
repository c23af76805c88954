//! Error types for the cache crate
//!
//! Cache operations themselves are total; errors only arise while building
//! a configuration from outside input.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache crate.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CacheError {
    /// A configuration override could not be parsed
    #[error("Invalid configuration: {var}={value:?}")]
    InvalidConfig { var: String, value: String },
}

// == Result Type Alias ==
/// Convenience Result type for the cache crate.
pub type Result<T> = std::result::Result<T, CacheError>;
