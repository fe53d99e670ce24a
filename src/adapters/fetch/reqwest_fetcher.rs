//! Reqwest-backed page fetcher.
//!
//! Issues a plain GET with the tool's identifying User-Agent. Timeout and
//! retry count come from [`FetchConfig`]; the default is a bounded wait
//! with no retries.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::config::FetchConfig;
use crate::ports::{FetchError, PageFetcher};

/// PageFetcher implementation over a shared reqwest client.
pub struct ReqwestPageFetcher {
    config: FetchConfig,
    client: Client,
}

impl ReqwestPageFetcher {
    /// Creates a new fetcher with the given configuration.
    pub fn new(config: FetchConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    async fn fetch_once(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout {
                    timeout_secs: self.config.timeout_secs,
                }
            } else if e.is_connect() {
                FetchError::network(format!("Connection failed: {}", e))
            } else {
                FetchError::network(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::network(format!("Failed to read body: {}", e)))
    }
}

#[async_trait]
impl PageFetcher for ReqwestPageFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let parsed =
            Url::parse(url).map_err(|e| FetchError::network(format!("invalid URL: {}", e)))?;
        match parsed.scheme() {
            "http" | "https" => {}
            other => return Err(FetchError::unsupported_scheme(other)),
        }

        let mut attempt = 0;
        loop {
            match self.fetch_once(url).await {
                Ok(body) => return Ok(body),
                Err(err) if err.is_retryable() && attempt < self.config.max_retries => {
                    attempt += 1;
                    tracing::warn!(url, attempt, error = %err, "retrying page fetch");
                }
                Err(err) => {
                    tracing::debug!(url, error = %err, "page fetch failed");
                    return Err(err);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn rejects_non_http_schemes() {
        let fetcher = ReqwestPageFetcher::new(FetchConfig::default());
        let err = fetcher.fetch("ftp://example.com/file").await.unwrap_err();
        assert!(matches!(err, FetchError::UnsupportedScheme { .. }));
    }

    #[tokio::test]
    async fn rejects_unparseable_urls() {
        let fetcher = ReqwestPageFetcher::new(FetchConfig::default());
        let err = fetcher.fetch("not a url").await.unwrap_err();
        assert!(matches!(err, FetchError::Network(_)));
    }
}
