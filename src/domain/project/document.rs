//! The synthesized config document model.
//!
//! The document is a serde tree rendered to YAML by the synthesizer
//! adapter, so user-entered text can never break the document structure.
//! Field declaration order is the rendered key order. Every literal default
//! below is part of the output contract and must not drift.

use serde::{Deserialize, Serialize};

use crate::domain::analysis::{
    AnalysisResult, DEFAULT_FONTS, DEFAULT_PRIMARY_COLOR, DEFAULT_SECONDARY_COLOR,
};

use super::input::ProjectConfigInput;

/// Placeholder substituted for required-but-missing user input.
pub const MISSING_INPUT_PLACEHOLDER: &str = "[[PLACEHOLDER]]";

/// Complete synthesized configuration document.
///
/// Immutable once produced; ownership belongs to the caller that invoked
/// synthesis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigDocument {
    pub project: ProjectSection,
    pub output_contract: OutputContract,
    pub process_order: Vec<String>,
    pub quality_gates: QualityGates,
    pub missing_input_policy: MissingInputPolicy,
    pub defaults: Defaults,
    pub toggles: Toggles,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceSection>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub components: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSection {
    pub name: String,
    pub mission: String,
    pub domain: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputContract {
    pub sections: Vec<String>,
    pub required: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityGates {
    pub lint: bool,
    pub typecheck: bool,
    pub tests: bool,
    pub min_performance_score: u32,
    pub accessibility: String,
    pub security_headers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingInputPolicy {
    pub placeholder: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    pub palette: Palette,
    pub typography: Typography,
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub primary: String,
    pub secondary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Typography {
    pub headings: String,
    pub body: String,
}

/// Fixed feature toggles with literal default values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Toggles {
    pub responsive: bool,
    pub dark_mode: bool,
    pub animations: bool,
    pub accessibility: bool,
    pub seo: bool,
    pub analytics: bool,
    pub i18n: bool,
    pub pwa: bool,
    pub auth: bool,
    pub payments: bool,
    pub newsletter: bool,
    pub cms: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceSection {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

impl Default for Toggles {
    fn default() -> Self {
        Self {
            responsive: true,
            dark_mode: false,
            animations: true,
            accessibility: true,
            seo: true,
            analytics: false,
            i18n: false,
            pwa: false,
            auth: false,
            payments: false,
            newsletter: false,
            cms: false,
        }
    }
}

impl Default for QualityGates {
    fn default() -> Self {
        Self {
            lint: true,
            typecheck: true,
            tests: true,
            min_performance_score: 90,
            accessibility: "WCAG AA".to_string(),
            security_headers: vec![
                "Content-Security-Policy".to_string(),
                "X-Frame-Options".to_string(),
                "X-Content-Type-Options".to_string(),
                "Referrer-Policy".to_string(),
                "Strict-Transport-Security".to_string(),
            ],
        }
    }
}

impl ConfigDocument {
    /// Builds the document from user input plus an optional analysis.
    ///
    /// Pure, deterministic, total. Absent input fields fall back to the
    /// missing-input placeholder or fixed defaults; absent analysis falls
    /// back to the same static defaults the HTML analyzer uses, so the
    /// output is well-formed whether or not analysis ran.
    pub fn build(input: &ProjectConfigInput, analysis: Option<&AnalysisResult>) -> Self {
        let goal = input
            .primary_goal
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or("web application");
        let purpose = input
            .description
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or("achieve their goals");

        let palette = match analysis {
            Some(a) => Palette {
                primary: a.primary_color.clone(),
                secondary: a.secondary_color.clone(),
            },
            None => Palette {
                primary: DEFAULT_PRIMARY_COLOR.to_string(),
                secondary: DEFAULT_SECONDARY_COLOR.to_string(),
            },
        };

        let typography = match analysis {
            Some(a) => Typography {
                headings: a.fonts.first().cloned().unwrap_or_else(|| DEFAULT_FONTS[0].to_string()),
                body: a
                    .fonts
                    .get(1)
                    .or_else(|| a.fonts.first())
                    .cloned()
                    .unwrap_or_else(|| DEFAULT_FONTS[1].to_string()),
            },
            None => Typography {
                headings: DEFAULT_FONTS[0].to_string(),
                body: DEFAULT_FONTS[1].to_string(),
            },
        };

        let source = input
            .source_url
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(|url| SourceSection {
                url: url.to_string(),
                title: analysis.map(|a| a.title.clone()),
                confidence: analysis.map(|a| a.confidence),
            });

        Self {
            project: ProjectSection {
                name: present_or_placeholder(input.name.as_deref()),
                mission: format!("Produce a {} that enables users to {}", goal, purpose),
                domain: present_or_placeholder(input.domain.as_deref()),
            },
            output_contract: OutputContract {
                sections: fixed_strings(&["intro", "core", "qa"]),
                required: fixed_strings(&["acceptance_criteria", "delivery_notes"]),
            },
            process_order: fixed_strings(&["scaffold", "implement", "style", "test", "review"]),
            quality_gates: QualityGates::default(),
            missing_input_policy: MissingInputPolicy {
                placeholder: MISSING_INPUT_PLACEHOLDER.to_string(),
            },
            defaults: Defaults {
                palette,
                typography,
                keywords: analysis.map(|a| a.keywords.clone()).unwrap_or_default(),
            },
            toggles: Toggles::default(),
            source,
            components: input.component_urls.clone(),
        }
    }
}

fn present_or_placeholder(value: Option<&str>) -> String {
    value
        .filter(|s| !s.trim().is_empty())
        .map(|s| s.to_string())
        .unwrap_or_else(|| MISSING_INPUT_PLACEHOLDER.to_string())
}

fn fixed_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::HTML_ANALYSIS_CONFIDENCE;

    fn analysis() -> AnalysisResult {
        AnalysisResult {
            title: "Acme Platform".to_string(),
            description: "Widgets".to_string(),
            primary_color: "#1a2b3c".to_string(),
            secondary_color: "#4d5e6f".to_string(),
            fonts: vec!["Roboto".to_string(), "Lato".to_string()],
            keywords: vec!["saas".to_string()],
            confidence: HTML_ANALYSIS_CONFIDENCE,
        }
    }

    #[test]
    fn name_and_default_palette_without_analysis() {
        let input = ProjectConfigInput::new().with_name("Acme");
        let doc = ConfigDocument::build(&input, None);

        assert_eq!(doc.project.name, "Acme");
        assert_eq!(doc.defaults.palette.primary, "#3B82F6");
        assert_eq!(doc.defaults.palette.secondary, "#10B981");
        assert_eq!(doc.defaults.typography.headings, "Inter");
        assert_eq!(doc.defaults.typography.body, "SF Pro Display");
        assert!(doc.defaults.keywords.is_empty());
    }

    #[test]
    fn mission_uses_defaults_when_fields_absent() {
        let doc = ConfigDocument::build(&ProjectConfigInput::new(), None);
        assert_eq!(
            doc.project.mission,
            "Produce a web application that enables users to achieve their goals"
        );
    }

    #[test]
    fn mission_inlines_goal_and_description() {
        let input = ProjectConfigInput::new()
            .with_primary_goal("storefront")
            .with_description("sell widgets online");
        let doc = ConfigDocument::build(&input, None);
        assert_eq!(
            doc.project.mission,
            "Produce a storefront that enables users to sell widgets online"
        );
    }

    #[test]
    fn missing_name_renders_placeholder() {
        let doc = ConfigDocument::build(&ProjectConfigInput::new(), None);
        assert_eq!(doc.project.name, MISSING_INPUT_PLACEHOLDER);
        assert_eq!(doc.missing_input_policy.placeholder, MISSING_INPUT_PLACEHOLDER);
    }

    #[test]
    fn analysis_drives_palette_typography_and_keywords() {
        let input = ProjectConfigInput::new().with_name("Acme");
        let doc = ConfigDocument::build(&input, Some(&analysis()));

        assert_eq!(doc.defaults.palette.primary, "#1a2b3c");
        assert_eq!(doc.defaults.palette.secondary, "#4d5e6f");
        assert_eq!(doc.defaults.typography.headings, "Roboto");
        assert_eq!(doc.defaults.typography.body, "Lato");
        assert_eq!(doc.defaults.keywords, vec!["saas"]);
    }

    #[test]
    fn source_section_only_when_source_url_present() {
        let bare = ConfigDocument::build(&ProjectConfigInput::new(), None);
        assert!(bare.source.is_none());

        let input = ProjectConfigInput::new().with_source_url("https://acme.com");
        let doc = ConfigDocument::build(&input, Some(&analysis()));
        let source = doc.source.expect("source section");
        assert_eq!(source.url, "https://acme.com");
        assert_eq!(source.title.as_deref(), Some("Acme Platform"));
        assert_eq!(source.confidence, Some(0.85));
    }

    #[test]
    fn components_section_only_when_provided() {
        let bare = ConfigDocument::build(&ProjectConfigInput::new(), None);
        assert!(bare.components.is_empty());

        let input = ProjectConfigInput::new()
            .with_component_urls(vec!["https://acme.com/pricing".to_string()]);
        let doc = ConfigDocument::build(&input, None);
        assert_eq!(doc.components, vec!["https://acme.com/pricing"]);
    }

    #[test]
    fn fixed_lists_match_the_output_contract() {
        let doc = ConfigDocument::build(&ProjectConfigInput::new(), None);

        assert_eq!(doc.output_contract.sections, vec!["intro", "core", "qa"]);
        assert_eq!(
            doc.output_contract.required,
            vec!["acceptance_criteria", "delivery_notes"]
        );
        assert_eq!(
            doc.process_order,
            vec!["scaffold", "implement", "style", "test", "review"]
        );
        assert_eq!(doc.quality_gates.min_performance_score, 90);
        assert_eq!(doc.quality_gates.accessibility, "WCAG AA");
        assert_eq!(doc.quality_gates.security_headers.len(), 5);
        assert!(doc.toggles.responsive);
        assert!(!doc.toggles.dark_mode);
    }

    #[test]
    fn build_is_deterministic() {
        let input = ProjectConfigInput::new().with_name("Acme");
        let first = ConfigDocument::build(&input, Some(&analysis()));
        let second = ConfigDocument::build(&input, Some(&analysis()));
        assert_eq!(first, second);
    }
}
