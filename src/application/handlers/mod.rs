//! Application handlers.

mod analysis;

pub use analysis::AnalyzeUrlHandler;
