use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::recommendation::RecommendationError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Recommendation(#[from] RecommendationError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Recommendation(e) => {
                let (status, code) = match e {
                    RecommendationError::ConfigurationMissing { .. } => {
                        tracing::error!("{e}");
                        (StatusCode::SERVICE_UNAVAILABLE, "CONFIGURATION_MISSING")
                    }
                    RecommendationError::RemoteCallFailed(cause) => {
                        tracing::error!("LLM error: {cause:?}");
                        (StatusCode::BAD_GATEWAY, "REMOTE_CALL_FAILED")
                    }
                    RecommendationError::MalformedResponse { reason } => {
                        tracing::error!("Malformed LLM reply: {reason}");
                        (StatusCode::BAD_GATEWAY, "MALFORMED_RESPONSE")
                    }
                };
                (status, code, e.user_message())
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
