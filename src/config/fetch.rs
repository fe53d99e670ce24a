//! Outbound page-fetch configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Configuration for outbound page fetches.
///
/// The reference behavior is a single attempt with no retry; the timeout
/// makes the previously unbounded wait an explicit contract.
#[derive(Debug, Clone, Deserialize)]
pub struct FetchConfig {
    /// User-Agent header identifying the tool
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Additional attempts after a retryable failure
    #[serde(default)]
    pub max_retries: u32,
}

impl FetchConfig {
    /// Validate fetch configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.user_agent.trim().is_empty() {
            return Err(ValidationError::EmptyUserAgent);
        }
        if self.timeout_secs == 0 || self.timeout_secs > 120 {
            return Err(ValidationError::InvalidFetchTimeout);
        }
        Ok(())
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            max_retries: 0,
        }
    }
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (compatible; PromptForge/1.0; +https://promptforge.dev)".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}
