//! Service-side analysis orchestration: fetch the page, analyze the HTML.

use std::sync::Arc;

use crate::domain::analysis::{analyze_html, AnalysisResult};
use crate::ports::{FetchError, PageFetcher};

/// Handles one inbound analysis request.
///
/// Holds no cross-request state: each call performs exactly one outbound
/// fetch (plus configured retries inside the fetcher) and one pure
/// analysis pass.
#[derive(Clone)]
pub struct AnalyzeUrlHandler {
    fetcher: Arc<dyn PageFetcher>,
}

impl AnalyzeUrlHandler {
    pub fn new(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self { fetcher }
    }

    /// Fetches `url` and analyzes the returned HTML.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` when the page cannot be retrieved; analysis
    /// itself never fails.
    pub async fn handle(&self, url: &str) -> Result<AnalysisResult, FetchError> {
        tracing::info!(url, "Analyzing URL");

        let html = self.fetcher.fetch(url).await?;
        let result = analyze_html(&html, url);

        tracing::info!(
            url,
            title = %result.title,
            confidence = result.confidence,
            "Analysis complete"
        );
        Ok(result)
    }
}
