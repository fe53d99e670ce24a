//! HTTP handlers for the analysis endpoint.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::AnalyzeUrlHandler;

use super::dto::{AnalyzeUrlRequest, ErrorResponse};

/// Shared handler state for the analysis routes.
#[derive(Clone)]
pub struct AnalysisHandlers {
    analyze_handler: AnalyzeUrlHandler,
}

impl AnalysisHandlers {
    pub fn new(analyze_handler: AnalyzeUrlHandler) -> Self {
        Self { analyze_handler }
    }
}

/// POST /analyze-url - Fetch and analyze one URL
///
/// Every failure on this boundary answers with the `{"error": ...}` body
/// shape, including body deserialization rejections.
pub async fn analyze_url(
    State(handlers): State<AnalysisHandlers>,
    payload: Result<Json<AnalyzeUrlRequest>, JsonRejection>,
) -> Response {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            return (
                rejection.status(),
                Json(ErrorResponse::new(rejection.body_text())),
            )
                .into_response()
        }
    };

    let url = match req.url.filter(|u| !u.trim().is_empty()) {
        Some(url) => url,
        None => {
            return (StatusCode::BAD_REQUEST, Json(ErrorResponse::url_required()))
                .into_response()
        }
    };

    match handlers.analyze_handler.handle(&url).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => {
            tracing::error!(url = %url, error = %e, "analysis request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(e.to_string())),
            )
                .into_response()
        }
    }
}

/// GET /health - Liveness probe
pub async fn health() -> Response {
    (StatusCode::OK, Json(serde_json::json!({ "status": "ok" }))).into_response()
}
