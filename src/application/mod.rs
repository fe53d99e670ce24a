//! Application layer - orchestration between ports and the domain.

pub mod handlers;

pub use handlers::AnalyzeUrlHandler;
