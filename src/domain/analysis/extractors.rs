//! Pattern extractors - pure scans over raw HTML/CSS text.
//!
//! Each extractor takes the full HTML text (and where relevant the source
//! URL) and returns its slice of the analysis result. All extractors are
//! total: absence of a match yields the type's natural empty value, never
//! an error.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use super::result::{
    DEFAULT_FONTS, DEFAULT_PRIMARY_COLOR, DEFAULT_SECONDARY_COLOR, MAX_FONTS, MAX_KEYWORDS,
};

static TITLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<title[^>]*>([^<]+)</title>").expect("valid title regex"));

static DESCRIPTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<meta[^>]*name=["']description["'][^>]*content=["']([^"']+)["']"#)
        .expect("valid description regex")
});

static META_KEYWORDS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<meta[^>]*name=["']keywords["'][^>]*content=["']([^"']+)["']"#)
        .expect("valid meta keywords regex")
});

static HEX_COLOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#([0-9A-Fa-f]{6}|[0-9A-Fa-f]{3})\b").expect("valid hex regex"));

static RGB_COLOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"rgb\(\s*(\d+)\s*,\s*(\d+)\s*,\s*(\d+)\s*\)").expect("valid rgb regex")
});

static HSL_COLOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"hsl\(\s*(\d+)\s*,\s*(\d+)%\s*,\s*(\d+)%\s*\)").expect("valid hsl regex")
});

static FONT_FAMILY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)font-family\s*:\s*([^;}]+)").expect("valid font regex"));

static HTML_TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid tag regex"));

/// Technology and business vocabulary checked for literal presence in the
/// tag-stripped page text.
const VOCABULARY: &[&str] = &[
    // Technology terms
    "react",
    "vue",
    "angular",
    "javascript",
    "typescript",
    "api",
    "database",
    "cloud",
    "ai",
    "ml",
    "saas",
    "productivity",
    "automation",
    "analytics",
    "dashboard",
    "workflow",
    // Business terms
    "business",
    "enterprise",
    "startup",
    "growth",
    "marketing",
    "sales",
    "customer",
    "service",
    "platform",
    "solution",
];

/// Extracted primary/secondary brand color pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorPair {
    pub primary: String,
    pub secondary: String,
}

/// Derives a bare domain name from a URL, with `www.` stripped.
///
/// Falls back to the literal `"website"` when the URL cannot be parsed or
/// has no host.
pub fn extract_domain_name(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(|h| h.to_string()))
        .map(|host| host.strip_prefix("www.").unwrap_or(&host).to_string())
        .unwrap_or_else(|| "website".to_string())
}

/// Extracts the page title from the first `<title>` element.
///
/// Falls back to the domain name derived from `url`.
pub fn extract_title(html: &str, url: &str) -> String {
    TITLE_RE
        .captures(html)
        .map(|c| c[1].trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| extract_domain_name(url))
}

/// Extracts the meta description, or synthesizes one from the domain name.
pub fn extract_description(html: &str, url: &str) -> String {
    DESCRIPTION_RE
        .captures(html)
        .map(|c| c[1].trim().to_string())
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| format!("Website analysis for {}", extract_domain_name(url)))
}

/// Extracts primary and secondary brand colors from hex and rgb() literals.
///
/// Candidates are collected in document order (hex literals first, then
/// converted rgb() values), pure white/black are filtered out as carrying
/// no brand signal, and the first two survivors win. No deduplication or
/// frequency ranking is performed. Missing slots fall back to the global
/// defaults. hsl() colors are recognized but not converted.
pub fn extract_colors(html: &str) -> ColorPair {
    let mut candidates: Vec<String> = Vec::new();

    for caps in HEX_COLOR_RE.captures_iter(html) {
        candidates.push(format!("#{}", &caps[1]));
    }

    for caps in RGB_COLOR_RE.captures_iter(html) {
        let parsed = (
            caps[1].parse::<u8>(),
            caps[2].parse::<u8>(),
            caps[3].parse::<u8>(),
        );
        if let (Ok(r), Ok(g), Ok(b)) = parsed {
            candidates.push(format!("#{:02x}{:02x}{:02x}", r, g, b));
        }
    }

    // hsl() values are matched but intentionally not converted to hex.
    let _ = HSL_COLOR_RE.captures_iter(html).count();

    let mut survivors = candidates.into_iter().filter(|color| {
        let lower = color.to_lowercase();
        lower != "#ffffff" && lower != "#000000" && lower != "#fff" && lower != "#000"
    });

    let primary = survivors
        .next()
        .map(|c| normalize_hex(&c))
        .unwrap_or_else(|| DEFAULT_PRIMARY_COLOR.to_string());
    let secondary = survivors
        .next()
        .map(|c| normalize_hex(&c))
        .unwrap_or_else(|| DEFAULT_SECONDARY_COLOR.to_string());

    ColorPair { primary, secondary }
}

/// Expands 3-digit hex shorthand to the 6-digit form.
fn normalize_hex(color: &str) -> String {
    let digits = &color[1..];
    if digits.len() == 3 {
        let expanded: String = digits.chars().flat_map(|c| [c, c]).collect();
        format!("#{}", expanded)
    } else {
        color.to_string()
    }
}

/// Extracts up to three concrete font names from font-family declarations.
///
/// Generic family names (serif, sans-serif, monospace) and tokens of two
/// characters or fewer are discarded. First-seen order is preserved; an
/// empty result falls back to the default pair.
pub fn extract_fonts(html: &str) -> Vec<String> {
    let mut fonts: Vec<String> = Vec::new();

    for caps in FONT_FAMILY_RE.captures_iter(html) {
        for raw in caps[1].split(',') {
            let name = raw
                .trim()
                .replace(['"', '\''], "")
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ");
            let lower = name.to_lowercase();
            if lower.contains("serif") || lower.contains("monospace") || name.len() <= 2 {
                continue;
            }
            if !fonts.contains(&name) {
                fonts.push(name);
            }
        }
    }

    fonts.truncate(MAX_FONTS);
    if fonts.is_empty() {
        DEFAULT_FONTS.iter().map(|f| f.to_string()).collect()
    } else {
        fonts
    }
}

/// Extracts up to eight lower-cased keywords from three merged sources:
/// the meta keywords tag, a fixed technology/business vocabulary checked
/// against the tag-stripped text, and hostname-based rules.
pub fn extract_keywords(html: &str, url: &str) -> Vec<String> {
    let mut keywords: Vec<String> = Vec::new();
    let add = |keywords: &mut Vec<String>, word: String| {
        if !word.is_empty() && !keywords.contains(&word) {
            keywords.push(word);
        }
    };

    if let Some(caps) = META_KEYWORDS_RE.captures(html) {
        for part in caps[1].split(',') {
            add(&mut keywords, part.trim().to_lowercase());
        }
    }

    let text = HTML_TAG_RE.replace_all(html, " ").to_lowercase();
    for word in VOCABULARY {
        if text.contains(word) {
            add(&mut keywords, word.to_string());
        }
    }

    let domain = extract_domain_name(url).to_lowercase();
    if domain.contains("github") {
        add(&mut keywords, "developer".to_string());
    }
    if domain.contains("design") {
        add(&mut keywords, "design".to_string());
    }
    if domain.contains("pay") || domain.contains("stripe") {
        add(&mut keywords, "payments".to_string());
    }

    keywords.truncate(MAX_KEYWORDS);
    keywords
}
