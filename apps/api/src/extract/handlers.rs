//! Axum route handler for resume uploads.

use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;
use serde::Serialize;

use crate::document::{classify_lines, structure_document, StructuredDocument};
use crate::errors::AppError;
use crate::extract::{FileKind, RawDocument};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub resume: RawDocument,
    pub document: StructuredDocument,
}

/// POST /api/v1/resumes/upload
///
/// Accepts a multipart `file` field (PDF or DOCX), extracts its text, and
/// returns the raw lines together with the structured document. Extraction
/// failure is not an error: the response simply carries an empty document.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let mut file: Option<(String, FileKind, Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart payload: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or("resume").to_string();
        let kind = field
            .content_type()
            .and_then(FileKind::from_mime)
            .or_else(|| FileKind::from_file_name(&file_name))
            .ok_or_else(|| {
                AppError::Validation("unsupported file type; upload PDF or DOCX".to_string())
            })?;
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("failed to read upload: {e}")))?;

        file = Some((file_name, kind, data));
    }

    let (file_name, kind, data) =
        file.ok_or_else(|| AppError::Validation("missing 'file' field".to_string()))?;

    let text = state.extractors.extract_or_empty(&file_name, kind, data).await;
    let resume = RawDocument::from_text(file_name, kind, &text);
    let document = structure_document(&classify_lines(&resume.text()));

    Ok(Json(UploadResponse { resume, document }))
}
