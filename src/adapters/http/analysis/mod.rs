//! HTTP adapter for the analysis service endpoint.

mod dto;
mod handlers;
mod routes;

pub use dto::{AnalyzeUrlRequest, ErrorResponse};
pub use handlers::AnalysisHandlers;
pub use routes::analysis_routes;
