//! Domain heuristics - hostname-keyed fallback brand profiles.
//!
//! Used as the last resort when live page content is unavailable. Matching
//! is by substring against the lower-cased hostname; no I/O, never fails.

use super::result::{DEFAULT_PRIMARY_COLOR, DEFAULT_SECONDARY_COLOR};

/// Hand-picked brand profile for a known domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainProfile {
    pub primary_color: String,
    pub secondary_color: String,
    pub keywords: Vec<String>,
}

/// Static table of known-domain profiles, checked in order.
const KNOWN_DOMAINS: &[(&str, &str, &str, &[&str])] = &[
    ("github", "#24292e", "#0366d6", &["developer", "code", "repository", "open source"]),
    ("stripe", "#635bff", "#00d924", &["payments", "fintech", "business", "api"]),
    ("figma", "#f24e1e", "#a259ff", &["design", "collaboration", "ui", "creative"]),
    ("notion", "#000000", "#37352f", &["productivity", "workspace", "collaboration", "notes"]),
];

/// Maps a hostname to its brand profile.
///
/// Unknown hosts get the global default colors and no keywords.
pub fn domain_profile(hostname: &str) -> DomainProfile {
    let host = hostname.to_lowercase();

    for (needle, primary, secondary, keywords) in KNOWN_DOMAINS {
        if host.contains(needle) {
            return DomainProfile {
                primary_color: primary.to_string(),
                secondary_color: secondary.to_string(),
                keywords: keywords.iter().map(|k| k.to_string()).collect(),
            };
        }
    }

    DomainProfile {
        primary_color: DEFAULT_PRIMARY_COLOR.to_string(),
        secondary_color: DEFAULT_SECONDARY_COLOR.to_string(),
        keywords: Vec::new(),
    }
}
