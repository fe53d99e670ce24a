//! HTTP DTOs for the analysis endpoint.

use serde::{Deserialize, Serialize};

/// Request body for `POST /analyze-url`.
///
/// `url` is optional at the type level so a missing or empty value maps to
/// the 400 contract instead of a deserialization rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeUrlRequest {
    #[serde(default)]
    pub url: Option<String>,
}

/// Error body: `{ "error": "..." }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { error: message.into() }
    }

    /// The fixed missing-url message.
    pub fn url_required() -> Self {
        Self::new("URL is required")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_with_url_deserializes() {
        let req: AnalyzeUrlRequest = serde_json::from_str(r#"{"url": "https://a.com"}"#).unwrap();
        assert_eq!(req.url.as_deref(), Some("https://a.com"));
    }

    #[test]
    fn request_without_url_deserializes_to_none() {
        let req: AnalyzeUrlRequest = serde_json::from_str("{}").unwrap();
        assert!(req.url.is_none());
    }

    #[test]
    fn error_response_has_error_key() {
        let json = serde_json::to_value(ErrorResponse::url_required()).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "URL is required" }));
    }
}
