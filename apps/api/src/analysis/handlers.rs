//! Axum route handlers for the Analysis API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::analysis::scoring::ScoreReport;
use crate::document::{classify_lines, structure_document, StructuredDocument};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub resume_text: String,
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub report: ScoreReport,
    pub document: StructuredDocument,
}

/// POST /api/v1/analysis
///
/// Scores the resume against the job description and returns the structured
/// document alongside the report. Scoring goes through the configured
/// strategy; a remote failure is absorbed before it reaches this handler.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "resume_text cannot be empty".to_string(),
        ));
    }

    let report = state
        .scorer
        .score(&request.resume_text, &request.job_description)
        .await
        .map_err(|e| AppError::Scoring(e.to_string()))?;

    let lines = classify_lines(&request.resume_text);
    let document = structure_document(&lines);

    Ok(Json(AnalyzeResponse { report, document }))
}
