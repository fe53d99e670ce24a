//! Analysis adapters - remote client and fallback orchestration.

mod fallback;
mod remote_client;

pub use fallback::FallbackAnalyzer;
pub use remote_client::RemoteAnalysisClient;
