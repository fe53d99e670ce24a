//! Fallback analyzer - remote analysis with domain-heuristic recovery.
//!
//! Wraps any [`UrlAnalyzer`] and recovers every remote failure by applying
//! the hostname heuristics, so the caller always receives a populated
//! result for any syntactically valid URL. The only surfaced error is
//! `InvalidUrl`.

use async_trait::async_trait;
use url::Url;

use crate::domain::analysis::{domain_profile, AnalysisResult, DEFAULT_FONTS, FALLBACK_CONFIDENCE};
use crate::ports::{AnalysisError, UrlAnalyzer};

/// Two-stage resolver: try the wrapped analyzer, fall back to domain
/// heuristics on any recoverable failure.
pub struct FallbackAnalyzer<A: UrlAnalyzer> {
    primary: A,
}

impl<A: UrlAnalyzer> FallbackAnalyzer<A> {
    /// Wraps a primary analyzer.
    pub fn new(primary: A) -> Self {
        Self { primary }
    }

    /// Builds the heuristic-only result for a parsed URL.
    fn heuristic_result(url: &str, host: &str) -> AnalysisResult {
        let domain = host.to_lowercase();
        let profile = domain_profile(&domain);

        AnalysisResult {
            title: format!("Analysis of {}", domain),
            description: format!("Automated analysis of {}", url),
            primary_color: profile.primary_color,
            secondary_color: profile.secondary_color,
            fonts: DEFAULT_FONTS.iter().map(|f| f.to_string()).collect(),
            keywords: profile.keywords,
            confidence: FALLBACK_CONFIDENCE,
        }
    }
}

#[async_trait]
impl<A: UrlAnalyzer> UrlAnalyzer for FallbackAnalyzer<A> {
    async fn analyze_url(&self, url: &str) -> Result<AnalysisResult, AnalysisError> {
        let host = Url::parse(url)
            .ok()
            .and_then(|u| u.host_str().map(|h| h.to_string()))
            .ok_or_else(|| AnalysisError::invalid_url(url))?;

        match self.primary.analyze_url(url).await {
            Ok(result) => Ok(result),
            Err(err) if err.is_recoverable() => {
                tracing::info!(url, error = %err, "remote analysis failed, using domain heuristics");
                Ok(Self::heuristic_result(url, &host))
            }
            Err(err) => Err(err),
        }
    }
}
