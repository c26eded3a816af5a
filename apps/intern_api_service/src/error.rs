use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Everything a handler can fail with, mapped to the response envelope in
/// one place so no error crosses the HTTP boundary unconverted.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required field was missing or empty. Never reaches the provider.
    #[error("{0}")]
    Validation(&'static str),

    /// No provider credential was configured at startup.
    #[error("Gemini API key not configured")]
    ApiKeyNotConfigured,

    /// The provider call failed; the provider's message goes to `details`.
    #[error("Failed to {action}: {details}")]
    Provider {
        action: &'static str,
        details: String,
    },

    /// Anything else. The client gets no internal detail.
    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    pub fn provider(action: &'static str, source: anyhow::Error) -> Self {
        Self::Provider {
            action,
            details: format!("{:#}", source),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Validation(message) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": message,
                    "success": false
                }),
            ),
            ApiError::ApiKeyNotConfigured => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({
                    "error": "Gemini API key not configured",
                    "success": false
                }),
            ),
            ApiError::Provider { action, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({
                    "error": format!("Failed to {}", action),
                    "success": false,
                    "details": details
                }),
            ),
            ApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({
                    "error": "Internal server error",
                    "success": false
                }),
            ),
        };

        (status, Json(body)).into_response()
    }
}
