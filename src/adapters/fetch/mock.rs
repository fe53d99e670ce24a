//! Mock page fetcher for testing.
//!
//! Configurable to return canned HTML bodies or inject fetch failures,
//! allowing tests to run without network access.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::ports::{FetchError, PageFetcher};

/// Mock PageFetcher returning pre-configured outcomes in order.
///
/// The last configured outcome repeats once the queue is drained; with no
/// outcomes configured every fetch fails with a network error. Requested
/// URLs are recorded for verification.
#[derive(Debug, Clone, Default)]
pub struct MockPageFetcher {
    outcomes: Arc<Mutex<VecDeque<Result<String, FetchError>>>>,
    calls: Arc<Mutex<Vec<String>>>,
    delay: Option<Duration>,
}

impl MockPageFetcher {
    /// Creates a mock with no configured outcomes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful fetch returning `body`.
    pub fn with_body(self, body: impl Into<String>) -> Self {
        self.outcomes.lock().unwrap().push_back(Ok(body.into()));
        self
    }

    /// Queues a failing fetch.
    pub fn with_error(self, error: FetchError) -> Self {
        self.outcomes.lock().unwrap().push_back(Err(error));
        self
    }

    /// Delays every fetch, simulating a slow origin.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// URLs requested so far.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageFetcher for MockPageFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.calls.lock().unwrap().push(url.to_string());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let mut outcomes = self.outcomes.lock().unwrap();
        if outcomes.len() > 1 {
            outcomes.pop_front().unwrap()
        } else if let Some(outcome) = outcomes.front() {
            outcome.clone()
        } else {
            Err(FetchError::network("no mock outcome configured"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_configured_body_and_records_calls() {
        let fetcher = MockPageFetcher::new().with_body("<html></html>");

        let body = fetcher.fetch("https://example.com").await.unwrap();
        assert_eq!(body, "<html></html>");
        assert_eq!(fetcher.calls(), vec!["https://example.com"]);
    }

    #[tokio::test]
    async fn returns_configured_error() {
        let fetcher = MockPageFetcher::new().with_error(FetchError::HttpStatus { status: 503 });

        let err = fetcher.fetch("https://example.com").await.unwrap_err();
        assert!(matches!(err, FetchError::HttpStatus { status: 503 }));
    }

    #[tokio::test]
    async fn last_outcome_repeats() {
        let fetcher = MockPageFetcher::new().with_body("a");

        assert_eq!(fetcher.fetch("https://x.com").await.unwrap(), "a");
        assert_eq!(fetcher.fetch("https://x.com").await.unwrap(), "a");
    }

    #[tokio::test]
    async fn unconfigured_mock_fails() {
        let fetcher = MockPageFetcher::new();
        assert!(fetcher.fetch("https://x.com").await.is_err());
    }
}
