//! Prompt Forge analysis service - entry point.
//!
//! Starts the HTTP service that fetches and analyzes URLs on behalf of the
//! Prompt Forge frontend.

use std::sync::Arc;
use std::time::Duration;

use tokio::{net::TcpListener, signal};
use tracing_subscriber::EnvFilter;

use prompt_forge::adapters::fetch::ReqwestPageFetcher;
use prompt_forge::adapters::http::analysis::{analysis_routes, AnalysisHandlers};
use prompt_forge::application::AnalyzeUrlHandler;
use prompt_forge::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .with_ansi(!config.server.is_production())
        .init();

    tracing::info!("Starting Prompt Forge analysis service");
    tracing::info!(
        "Configuration loaded: server={}:{}, fetch timeout={}s",
        config.server.host,
        config.server.port,
        config.fetch.timeout_secs
    );

    let fetcher = Arc::new(ReqwestPageFetcher::new(config.fetch.clone()));
    let handlers = AnalysisHandlers::new(AnalyzeUrlHandler::new(fetcher));
    let app = analysis_routes(
        handlers,
        Duration::from_secs(config.server.request_timeout_secs),
    );

    let addr = config.server.socket_addr();
    tracing::info!("Server listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl+C handler: {}", e);
    }
}
