//! Project domain - user-entered project fields and the config document.

mod document;
mod input;

pub use document::{
    ConfigDocument, Defaults, MissingInputPolicy, OutputContract, Palette, ProjectSection,
    QualityGates, SourceSection, Toggles, Typography, MISSING_INPUT_PLACEHOLDER,
};
pub use input::ProjectConfigInput;
