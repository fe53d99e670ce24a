//! Caller-supplied project fields.

use serde::{Deserialize, Serialize};

/// User-entered project fields feeding config synthesis.
///
/// Every field is optional at this stage; a project must eventually have a
/// non-empty `name` before synthesis is considered complete, and the
/// renderer substitutes the missing-input placeholder until then.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfigInput {
    pub name: Option<String>,
    pub domain: Option<String>,
    pub description: Option<String>,
    pub primary_goal: Option<String>,
    pub source_url: Option<String>,
    #[serde(default)]
    pub component_urls: Vec<String>,
}

impl ProjectConfigInput {
    /// Creates an empty input.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_primary_goal(mut self, goal: impl Into<String>) -> Self {
        self.primary_goal = Some(goal.into());
        self
    }

    pub fn with_source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = Some(url.into());
        self
    }

    pub fn with_component_urls(mut self, urls: Vec<String>) -> Self {
        self.component_urls = urls;
        self
    }

    /// True once the project carries a non-empty name.
    pub fn is_complete(&self) -> bool {
        self.name.as_deref().is_some_and(|n| !n.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_not_complete() {
        assert!(!ProjectConfigInput::new().is_complete());
    }

    #[test]
    fn whitespace_name_is_not_complete() {
        assert!(!ProjectConfigInput::new().with_name("   ").is_complete());
    }

    #[test]
    fn named_input_is_complete() {
        assert!(ProjectConfigInput::new().with_name("Acme").is_complete());
    }

    #[test]
    fn builder_sets_all_fields() {
        let input = ProjectConfigInput::new()
            .with_name("Acme")
            .with_domain("acme.com")
            .with_description("widget shop")
            .with_primary_goal("sell widgets")
            .with_source_url("https://acme.com")
            .with_component_urls(vec!["https://acme.com/pricing".to_string()]);

        assert_eq!(input.name.as_deref(), Some("Acme"));
        assert_eq!(input.domain.as_deref(), Some("acme.com"));
        assert_eq!(input.component_urls.len(), 1);
    }
}
