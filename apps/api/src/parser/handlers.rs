//! Axum route handlers for the resume parsing API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::resume::{ParseResumeRequest, ParseResumeResponse};
use crate::state::AppState;

/// POST /parse-resume
///
/// Downloads the resume at `file_url`, extracts contact details, experience,
/// education and skills, and scores the skills against `job_requirements`.
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    payload: Result<Json<ParseResumeRequest>, JsonRejection>,
) -> Result<Json<ParseResumeResponse>, AppError> {
    let Json(request) =
        payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;
    let file_url = request.file_url.trim();
    if file_url.is_empty() {
        return Err(AppError::Validation("file_url is required".to_string()));
    }

    info!(
        "Parsing resume from {file_url} against {} requirement(s)",
        request.job_requirements.len()
    );

    let data = state
        .parser
        .parse(file_url, &request.job_requirements)
        .await
        .map_err(|e| {
            warn!("Failed to parse resume from {file_url} at {} stage: {e}", e.stage());
            AppError::from(e)
        })?;

    Ok(Json(ParseResumeResponse {
        success: true,
        data: Some(data),
    }))
}
