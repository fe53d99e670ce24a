//! Configuration error types

use thiserror::Error;

/// Errors loading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Underlying loader/deserialization failure.
    #[error("configuration error: {0}")]
    Load(#[from] config::ConfigError),
}

/// Semantic validation failures for loaded configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("server port must be non-zero")]
    InvalidPort,

    #[error("request timeout must be between 1 and 300 seconds")]
    InvalidTimeout,

    #[error("fetch user agent cannot be empty")]
    EmptyUserAgent,

    #[error("fetch timeout must be between 1 and 120 seconds")]
    InvalidFetchTimeout,
}
