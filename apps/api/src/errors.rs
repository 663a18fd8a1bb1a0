use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::parser::error::ParseError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Failed to parse resume: {0}")]
    Parse(#[from] ParseError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            AppError::Parse(e) => match e {
                ParseError::UnsupportedFormat { .. } => {
                    (StatusCode::BAD_REQUEST, "UNSUPPORTED_FORMAT")
                }
                ParseError::Retrieval(_) => {
                    tracing::warn!("Retrieval error: {e}");
                    (StatusCode::BAD_GATEWAY, "RETRIEVAL_ERROR")
                }
                ParseError::Extraction(_) => {
                    (StatusCode::UNPROCESSABLE_ENTITY, "EXTRACTION_ERROR")
                }
                ParseError::EmptyContent(_) => {
                    (StatusCode::UNPROCESSABLE_ENTITY, "EMPTY_CONTENT")
                }
                ParseError::Analysis(_) => {
                    tracing::error!("Analysis error: {e}");
                    (StatusCode::INTERNAL_SERVER_ERROR, "ANALYSIS_ERROR")
                }
            },
        };

        let body = Json(json!({
            "success": false,
            "error": self.to_string(),
            "code": code
        }));

        (status, body).into_response()
    }
}
