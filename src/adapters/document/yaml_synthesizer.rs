//! YAML config synthesizer.
//!
//! Renders the [`ConfigDocument`] model to YAML through serde rather than
//! textual template substitution, so user-entered text can never produce a
//! malformed document.

use crate::domain::analysis::AnalysisResult;
use crate::domain::project::{ConfigDocument, ProjectConfigInput};
use crate::ports::{ConfigSynthesizer, SynthesisError};

/// Comment header carried at the top of every rendered document.
const DOCUMENT_HEADER: &str = "# Prompt Forge Configuration\n";

/// Serde-backed implementation of ConfigSynthesizer.
#[derive(Debug, Clone, Default)]
pub struct YamlConfigSynthesizer;

impl YamlConfigSynthesizer {
    /// Creates a new synthesizer.
    pub fn new() -> Self {
        Self
    }
}

impl ConfigSynthesizer for YamlConfigSynthesizer {
    fn build(
        &self,
        input: &ProjectConfigInput,
        analysis: Option<&AnalysisResult>,
    ) -> ConfigDocument {
        ConfigDocument::build(input, analysis)
    }

    fn synthesize(
        &self,
        input: &ProjectConfigInput,
        analysis: Option<&AnalysisResult>,
    ) -> Result<String, SynthesisError> {
        let document = self.build(input, analysis);
        let yaml = serde_yaml::to_string(&document)
            .map_err(|e| SynthesisError::Rendering(e.to_string()))?;
        Ok(format!("{}{}", DOCUMENT_HEADER, yaml))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::analyze_html;

    #[test]
    fn renders_header_and_project_section() {
        let input = ProjectConfigInput::new().with_name("Acme");
        let yaml = YamlConfigSynthesizer::new().synthesize(&input, None).unwrap();

        assert!(yaml.starts_with("# Prompt Forge Configuration\n"));
        assert!(yaml.contains("name: Acme"));
        assert!(yaml.contains("primary: '#3B82F6'"));
    }

    #[test]
    fn output_parses_back_into_the_document_model() {
        let input = ProjectConfigInput::new()
            .with_name("Acme")
            .with_domain("acme.com")
            .with_source_url("https://acme.com");
        let analysis = analyze_html("<title>Acme</title>", "https://acme.com");

        let synthesizer = YamlConfigSynthesizer::new();
        let yaml = synthesizer.synthesize(&input, Some(&analysis)).unwrap();
        let parsed: ConfigDocument = serde_yaml::from_str(&yaml).unwrap();

        assert_eq!(parsed, synthesizer.build(&input, Some(&analysis)));
    }

    #[test]
    fn synthesis_is_deterministic() {
        let input = ProjectConfigInput::new().with_name("Acme");
        let synthesizer = YamlConfigSynthesizer::new();

        let first = synthesizer.synthesize(&input, None).unwrap();
        let second = synthesizer.synthesize(&input, None).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn hostile_input_cannot_break_document_structure() {
        let input = ProjectConfigInput::new()
            .with_name("evil: {a: b}\nproject:")
            .with_description("line1\nline2: [injected]");

        let yaml = YamlConfigSynthesizer::new().synthesize(&input, None).unwrap();
        let parsed: ConfigDocument = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.project.name, "evil: {a: b}\nproject:");
    }

    #[test]
    fn optional_sections_are_omitted_when_absent() {
        let yaml = YamlConfigSynthesizer::new()
            .synthesize(&ProjectConfigInput::new(), None)
            .unwrap();

        assert!(!yaml.contains("source:"));
        assert!(!yaml.contains("components:"));
    }
}
