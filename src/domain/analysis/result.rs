//! The analysis result entity and its per-field defaults.

use serde::{Deserialize, Serialize};

/// Default primary brand color when extraction finds nothing usable.
pub const DEFAULT_PRIMARY_COLOR: &str = "#3B82F6";

/// Default secondary brand color.
pub const DEFAULT_SECONDARY_COLOR: &str = "#10B981";

/// Default font pair when no usable font-family declarations are found.
pub const DEFAULT_FONTS: [&str; 2] = ["Inter", "SF Pro Display"];

/// Confidence assigned to results produced from full HTML analysis.
pub const HTML_ANALYSIS_CONFIDENCE: f64 = 0.85;

/// Confidence assigned to results produced from domain heuristics alone.
pub const FALLBACK_CONFIDENCE: f64 = 0.7;

/// Maximum number of fonts carried in a result.
pub const MAX_FONTS: usize = 3;

/// Maximum number of keywords carried in a result.
pub const MAX_KEYWORDS: usize = 8;

/// Best-effort structured profile of one analyzed URL.
///
/// Every field is always populated: extraction failures fall back to the
/// defaults above, so a caller never observes a partial result. The
/// `confidence` value identifies which path produced the result (full HTML
/// analysis vs. domain-heuristic fallback), not the quality of individual
/// fields. The entity has no identity and no persistence; it is created
/// fresh per request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub title: String,
    pub description: String,
    /// Hex color matching `#RRGGBB`.
    pub primary_color: String,
    /// Hex color matching `#RRGGBB`.
    pub secondary_color: String,
    /// 1 to 3 entries, never empty.
    pub fonts: Vec<String>,
    /// 0 to 8 lower-cased entries, de-duplicated, insertion order preserved.
    pub keywords: Vec<String>,
    /// 0.85 for HTML analysis, 0.7 for the heuristic fallback.
    pub confidence: f64,
}

impl AnalysisResult {
    /// Checks the field invariants every produced result must satisfy.
    /// Used by tests; construction paths uphold these by design.
    pub fn is_well_formed(&self) -> bool {
        !self.title.is_empty()
            && !self.description.is_empty()
            && is_rrggbb(&self.primary_color)
            && is_rrggbb(&self.secondary_color)
            && (1..=MAX_FONTS).contains(&self.fonts.len())
            && self.keywords.len() <= MAX_KEYWORDS
            && (0.0..=1.0).contains(&self.confidence)
    }
}

/// Returns true when `s` is a `#RRGGBB` hex color.
pub fn is_rrggbb(s: &str) -> bool {
    s.len() == 7
        && s.starts_with('#')
        && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}
