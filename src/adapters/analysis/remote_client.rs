//! Remote analysis client - calls the analysis service over HTTP.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use url::Url;

use crate::domain::analysis::AnalysisResult;
use crate::ports::{AnalysisError, UrlAnalyzer};

#[derive(Debug, Serialize)]
struct AnalyzeRequest<'a> {
    url: &'a str,
}

/// UrlAnalyzer that round-trips through the remote analysis service.
///
/// One outstanding request per invocation; concurrent invocations share no
/// mutable state beyond the connection pool.
pub struct RemoteAnalysisClient {
    endpoint: String,
    client: Client,
}

impl RemoteAnalysisClient {
    /// Creates a client against the service endpoint, e.g.
    /// `http://localhost:8080/analyze-url`.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            endpoint: endpoint.into(),
            client,
        }
    }
}

#[async_trait]
impl UrlAnalyzer for RemoteAnalysisClient {
    async fn analyze_url(&self, url: &str) -> Result<AnalysisResult, AnalysisError> {
        // An unparseable URL is the one failure nothing downstream recovers.
        Url::parse(url).map_err(|_| AnalysisError::invalid_url(url))?;

        let response = self
            .client
            .post(&self.endpoint)
            .json(&AnalyzeRequest { url })
            .send()
            .await
            .map_err(|e| AnalysisError::remote(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnalysisError::remote(format!(
                "analysis service returned status {}",
                status.as_u16()
            )));
        }

        response
            .json::<AnalysisResult>()
            .await
            .map_err(|e| AnalysisError::remote(format!("malformed response body: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unparseable_url_fails_before_any_request() {
        let client =
            RemoteAnalysisClient::new("http://localhost:9/analyze-url", Duration::from_secs(1));
        let err = client.analyze_url("not a url").await.unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidUrl { .. }));
    }

    #[test]
    fn request_body_uses_url_key() {
        let body = serde_json::to_value(AnalyzeRequest { url: "https://a.com" }).unwrap();
        assert_eq!(body, serde_json::json!({ "url": "https://a.com" }));
    }
}
