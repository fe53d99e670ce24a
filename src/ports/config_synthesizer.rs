//! Config Synthesizer Port - project config document rendering interface.

use thiserror::Error;

use crate::domain::analysis::AnalysisResult;
use crate::domain::project::{ConfigDocument, ProjectConfigInput};

/// Errors surfaced by config rendering.
#[derive(Debug, Error)]
pub enum SynthesisError {
    /// The document model could not be serialized.
    #[error("failed to render config document: {0}")]
    Rendering(String),
}

/// Port for synthesizing the project configuration document.
///
/// # Contract
///
/// Implementations must be deterministic: the same input and analysis
/// always produce byte-identical output. When `analysis` is absent, every
/// analysis-derived value falls back to the static defaults, so the output
/// is well-formed either way.
pub trait ConfigSynthesizer: Send + Sync {
    /// Builds the structured document model.
    fn build(&self, input: &ProjectConfigInput, analysis: Option<&AnalysisResult>)
        -> ConfigDocument;

    /// Renders the document to its textual form.
    fn synthesize(
        &self,
        input: &ProjectConfigInput,
        analysis: Option<&AnalysisResult>,
    ) -> Result<String, SynthesisError>;
}
