//! HTTP routes for the analysis service.

use std::time::Duration;

use axum::{
    http::header::{HeaderName, AUTHORIZATION, CONTENT_TYPE},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::handlers::{analyze_url, health, AnalysisHandlers};

/// Creates the analysis router.
///
/// CORS is fully permissive: any origin, with the preflight answered for
/// the `authorization, x-client-info, apikey, content-type` headers.
/// In-flight requests are cut off at `request_timeout` with a 408.
pub fn analysis_routes(handlers: AnalysisHandlers, request_timeout: Duration) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers([
            AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            CONTENT_TYPE,
        ]);

    Router::new()
        .route("/analyze-url", post(analyze_url))
        .route("/health", get(health))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(request_timeout))
        .with_state(handlers)
}
