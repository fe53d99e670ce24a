//! HTML analyzer - runs every pattern extractor over one document.

use super::extractors::{
    extract_colors, extract_description, extract_fonts, extract_keywords, extract_title,
};
use super::result::{AnalysisResult, HTML_ANALYSIS_CONFIDENCE};

/// Analyzes one HTML document and assembles a fully populated result.
///
/// Pure and total: if every extractor comes up empty the result is still
/// well-formed via per-field defaults. Results from this path carry
/// confidence 0.85.
pub fn analyze_html(html: &str, url: &str) -> AnalysisResult {
    let colors = extract_colors(html);

    AnalysisResult {
        title: extract_title(html, url),
        description: extract_description(html, url),
        primary_color: colors.primary,
        secondary_color: colors.secondary,
        fonts: extract_fonts(html),
        keywords: extract_keywords(html, url),
        confidence: HTML_ANALYSIS_CONFIDENCE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::{DEFAULT_PRIMARY_COLOR, DEFAULT_SECONDARY_COLOR};

    const SAMPLE: &str = r##"
        <html>
          <head>
            <title>Acme Platform</title>
            <meta name="description" content="The fastest widget platform">
            <meta name="keywords" content="widgets, tooling">
            <style>
              body { color: #1A2B3C; background: rgb(16, 185, 129); font-family: "Inter", sans-serif; }
            </style>
          </head>
          <body>Enterprise SaaS analytics dashboard</body>
        </html>
    "##;

    #[test]
    fn full_document_populates_every_field() {
        let result = analyze_html(SAMPLE, "https://acme.com");

        assert_eq!(result.title, "Acme Platform");
        assert_eq!(result.description, "The fastest widget platform");
        assert_eq!(result.primary_color, "#1A2B3C");
        assert_eq!(result.secondary_color, "#10b981");
        assert_eq!(result.fonts, vec!["Inter"]);
        assert!(result.keywords.contains(&"widgets".to_string()));
        assert!(result.keywords.contains(&"saas".to_string()));
        assert_eq!(result.confidence, 0.85);
        assert!(result.is_well_formed());
    }

    #[test]
    fn empty_document_is_still_well_formed() {
        let result = analyze_html("", "https://example.com");

        assert_eq!(result.title, "example.com");
        assert_eq!(result.description, "Website analysis for example.com");
        assert_eq!(result.primary_color, DEFAULT_PRIMARY_COLOR);
        assert_eq!(result.secondary_color, DEFAULT_SECONDARY_COLOR);
        assert_eq!(result.fonts, vec!["Inter", "SF Pro Display"]);
        assert!(result.keywords.is_empty());
        assert!(result.is_well_formed());
    }

    #[test]
    fn analysis_is_deterministic() {
        let first = analyze_html(SAMPLE, "https://acme.com");
        let second = analyze_html(SAMPLE, "https://acme.com");
        assert_eq!(first, second);
    }
}
