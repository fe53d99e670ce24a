//! URL analysis domain - extractors, analyzer, and fallback heuristics.

mod analyzer;
mod extractors;
mod heuristics;
mod result;

pub use analyzer::analyze_html;
pub use extractors::{
    extract_colors, extract_description, extract_domain_name, extract_fonts, extract_keywords,
    extract_title, ColorPair,
};
pub use heuristics::{domain_profile, DomainProfile};
pub use result::{
    AnalysisResult, DEFAULT_FONTS, DEFAULT_PRIMARY_COLOR, DEFAULT_SECONDARY_COLOR,
    FALLBACK_CONFIDENCE, HTML_ANALYSIS_CONFIDENCE, MAX_FONTS, MAX_KEYWORDS,
};
