//! URL Analyzer Port - the caller-facing analysis contract.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::analysis::AnalysisResult;

/// Errors surfaced by URL analysis.
///
/// Only `InvalidUrl` ever reaches the end caller: every remote failure is
/// recovered by the fallback analyzer one level up.
#[derive(Debug, Clone, Error)]
pub enum AnalysisError {
    /// The URL string cannot be parsed as a URL. Fatal to the whole call.
    #[error("invalid URL: {url}")]
    InvalidUrl {
        /// The unparseable input.
        url: String,
    },

    /// The remote analysis service failed (network, non-2xx status, or a
    /// malformed response body).
    #[error("analysis service failure: {message}")]
    Remote {
        /// Description of the underlying failure.
        message: String,
    },
}

impl AnalysisError {
    /// Creates an invalid-URL error.
    pub fn invalid_url(url: impl Into<String>) -> Self {
        AnalysisError::InvalidUrl { url: url.into() }
    }

    /// Creates a remote-failure error.
    pub fn remote(message: impl Into<String>) -> Self {
        AnalysisError::Remote { message: message.into() }
    }

    /// Whether the fallback path can recover from this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AnalysisError::Remote { .. })
    }
}

/// Port for producing an [`AnalysisResult`] for a URL.
#[async_trait]
pub trait UrlAnalyzer: Send + Sync {
    /// Analyzes `url` and returns a fully populated result.
    async fn analyze_url(&self, url: &str) -> Result<AnalysisResult, AnalysisError>;
}
