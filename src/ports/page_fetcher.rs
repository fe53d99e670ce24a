//! Page Fetcher Port - raw HTML retrieval interface.

use async_trait::async_trait;
use thiserror::Error;

/// Errors surfaced by a page fetch.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// URL scheme is not http(s).
    #[error("unsupported URL scheme '{scheme}'")]
    UnsupportedScheme {
        /// The offending scheme.
        scheme: String,
    },

    /// Server answered with a non-2xx status.
    #[error("fetch failed with status {status}")]
    HttpStatus {
        /// HTTP status code.
        status: u16,
    },

    /// Request exceeded the configured timeout.
    #[error("fetch timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u64,
    },

    /// Network or DNS failure.
    #[error("network error: {0}")]
    Network(String),
}

impl FetchError {
    /// Creates an unsupported-scheme error.
    pub fn unsupported_scheme(scheme: impl Into<String>) -> Self {
        FetchError::UnsupportedScheme { scheme: scheme.into() }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        FetchError::Network(message.into())
    }

    /// Whether retrying the same request could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            FetchError::Timeout { .. }
                | FetchError::Network(_)
                | FetchError::HttpStatus { status: 500..=599 }
        )
    }
}

/// Port for retrieving the raw body of a URL.
///
/// # Contract
///
/// Implementations must identify the tool via an explicit `User-Agent`
/// header, bound every request with the configured timeout, and surface
/// transport failures as typed [`FetchError`] values. Fetching performs no
/// retry unless a retry count is configured.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Retrieves the response body of `url` as text.
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_and_network_errors_are_retryable() {
        assert!(FetchError::Timeout { timeout_secs: 30 }.is_retryable());
        assert!(FetchError::network("connection reset").is_retryable());
    }

    #[test]
    fn server_errors_are_retryable_client_errors_are_not() {
        assert!(FetchError::HttpStatus { status: 503 }.is_retryable());
        assert!(!FetchError::HttpStatus { status: 404 }.is_retryable());
    }

    #[test]
    fn unsupported_scheme_is_not_retryable() {
        assert!(!FetchError::unsupported_scheme("ftp").is_retryable());
    }

    #[test]
    fn errors_display_their_context() {
        let err = FetchError::HttpStatus { status: 404 };
        assert_eq!(err.to_string(), "fetch failed with status 404");
    }
}
