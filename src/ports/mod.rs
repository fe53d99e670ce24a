//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `PageFetcher` - retrieving raw HTML for a URL
//! - `UrlAnalyzer` - producing an analysis result for a URL
//! - `ConfigSynthesizer` - rendering the project config document

mod config_synthesizer;
mod page_fetcher;
mod url_analyzer;

pub use config_synthesizer::{ConfigSynthesizer, SynthesisError};
pub use page_fetcher::{FetchError, PageFetcher};
pub use url_analyzer::{AnalysisError, UrlAnalyzer};
