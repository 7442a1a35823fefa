//! Error types for the CDC API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use gemini_client::GeminiError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Assessment not found: {0}")]
    AssessmentNotFound(String),

    #[error("Checklist item not found: {0}")]
    ItemNotFound(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Another AI request is already in progress for this assessment")]
    RequestInFlight,

    #[error("AI analysis is not configured")]
    AiUnavailable,

    #[error("AI request failed: {0}")]
    Gemini(#[from] GeminiError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::AssessmentNotFound(id) => {
                (StatusCode::NOT_FOUND, format!("Assessment not found: {}", id))
            }
            ApiError::ItemNotFound(id) => (
                StatusCode::NOT_FOUND,
                format!("Checklist item not found: {}", id),
            ),
            ApiError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::RequestInFlight => (
                StatusCode::CONFLICT,
                "Another AI request is already in progress for this assessment".to_string(),
            ),
            ApiError::AiUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "AI analysis is not configured".to_string(),
            ),
            // Bad uploads are the caller's problem; everything else from the
            // AI integration surfaces as one generic upstream failure.
            ApiError::Gemini(e @ GeminiError::NoValidFiles) => {
                (StatusCode::BAD_REQUEST, e.to_string())
            }
            ApiError::Gemini(e) => {
                tracing::error!("Gemini error: {}", e);
                (
                    StatusCode::BAD_GATEWAY,
                    "Failed to analyze documents. Please try again.".to_string(),
                )
            }
            ApiError::Internal(e) => {
                tracing::error!("Internal error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
