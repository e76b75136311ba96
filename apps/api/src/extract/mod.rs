//! Text extraction collaborators. PDF runs in process; DOCX is delegated to
//! the external conversion service. The rest of the system depends only on
//! the `TextExtractor` seam, and extraction failure is never fatal: the
//! upload flow degrades to empty text and the scores degrade with it.

pub mod handlers;

use async_trait::async_trait;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Declared kind of an uploaded file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Pdf,
    Docx,
}

impl FileKind {
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            "application/pdf" => Some(Self::Pdf),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
                Some(Self::Docx)
            }
            _ => None,
        }
    }

    pub fn from_file_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        if lower.ends_with(".pdf") {
            Some(Self::Pdf)
        } else if lower.ends_with(".docx") {
            Some(Self::Docx)
        } else {
            None
        }
    }
}

/// An extracted file: ordered lines plus the identity of the file they came
/// from. Produced once per upload and read-only afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct RawDocument {
    pub file_name: String,
    pub kind: FileKind,
    pub lines: Vec<String>,
}

impl RawDocument {
    pub fn from_text(file_name: String, kind: FileKind, text: &str) -> Self {
        Self {
            file_name,
            kind,
            lines: text.lines().map(str::to_string).collect(),
        }
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("conversion service request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("conversion service returned status {0}")]
    Status(u16),

    #[error("no converter configured for {0:?} files")]
    Unconfigured(FileKind),
}

/// The extraction seam: file bytes in, plain text out.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, file_name: &str, data: Bytes) -> Result<String, ExtractError>;
}

// ────────────────────────────────────────────────────────────────────────────
// PDF — in-process via pdf-extract
// ────────────────────────────────────────────────────────────────────────────

/// In-process PDF text extraction. CPU-bound parsing runs inside
/// `spawn_blocking` so it never stalls the request executor.
pub struct PdfTextExtractor;

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract(&self, _file_name: &str, data: Bytes) -> Result<String, ExtractError> {
        tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&data))
            .await
            .map_err(|e| ExtractError::Pdf(e.to_string()))?
            .map_err(|e| ExtractError::Pdf(e.to_string()))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// DOCX — delegated to the conversion service
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct ConvertResponse {
    text: String,
}

/// Posts the file to the external conversion service and returns its
/// extracted text.
pub struct RemoteDocxExtractor {
    client: reqwest::Client,
    base_url: String,
}

impl RemoteDocxExtractor {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl TextExtractor for RemoteDocxExtractor {
    async fn extract(&self, file_name: &str, data: Bytes) -> Result<String, ExtractError> {
        let part = reqwest::multipart::Part::bytes(data.to_vec()).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(format!("{}/extract/docx", self.base_url))
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExtractError::Status(status.as_u16()));
        }

        let body: ConvertResponse = response.json().await?;
        Ok(body.text)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Dispatch
// ────────────────────────────────────────────────────────────────────────────

/// Routes a file to the extractor for its declared kind. DOCX support is
/// optional: without a configured conversion service that path reports
/// `Unconfigured` and the caller degrades.
pub struct ExtractorSet {
    pdf: PdfTextExtractor,
    docx: Option<RemoteDocxExtractor>,
}

impl ExtractorSet {
    pub fn new(convert_service_url: Option<String>) -> Self {
        Self {
            pdf: PdfTextExtractor,
            docx: convert_service_url.map(RemoteDocxExtractor::new),
        }
    }

    pub async fn extract(
        &self,
        file_name: &str,
        kind: FileKind,
        data: Bytes,
    ) -> Result<String, ExtractError> {
        match kind {
            FileKind::Pdf => self.pdf.extract(file_name, data).await,
            FileKind::Docx => match &self.docx {
                Some(docx) => docx.extract(file_name, data).await,
                None => Err(ExtractError::Unconfigured(kind)),
            },
        }
    }

    /// Extraction with the never-fatal contract applied: failures log a
    /// warning and degrade to empty text.
    pub async fn extract_or_empty(&self, file_name: &str, kind: FileKind, data: Bytes) -> String {
        match self.extract(file_name, kind, data).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Extraction failed for '{file_name}', continuing with empty text: {e}");
                String::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_kind_from_mime() {
        assert_eq!(FileKind::from_mime("application/pdf"), Some(FileKind::Pdf));
        assert_eq!(
            FileKind::from_mime(
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            ),
            Some(FileKind::Docx)
        );
        assert_eq!(FileKind::from_mime("text/plain"), None);
    }

    #[test]
    fn test_file_kind_from_file_name_is_case_insensitive() {
        assert_eq!(FileKind::from_file_name("Resume.PDF"), Some(FileKind::Pdf));
        assert_eq!(FileKind::from_file_name("cv.docx"), Some(FileKind::Docx));
        assert_eq!(FileKind::from_file_name("notes.txt"), None);
    }

    #[test]
    fn test_raw_document_round_trips_lines() {
        let raw = RawDocument::from_text(
            "resume.pdf".to_string(),
            FileKind::Pdf,
            "JANE DOE\njane@x.com",
        );
        assert_eq!(raw.lines.len(), 2);
        assert_eq!(raw.text(), "JANE DOE\njane@x.com");
    }

    #[tokio::test]
    async fn test_docx_without_converter_reports_unconfigured() {
        let set = ExtractorSet::new(None);
        let result = set
            .extract("cv.docx", FileKind::Docx, Bytes::from_static(b"stub"))
            .await;
        assert!(matches!(result, Err(ExtractError::Unconfigured(_))));
    }

    #[tokio::test]
    async fn test_extract_or_empty_degrades_instead_of_failing() {
        let set = ExtractorSet::new(None);
        let text = set
            .extract_or_empty("cv.docx", FileKind::Docx, Bytes::from_static(b"stub"))
            .await;
        assert_eq!(text, "");
    }

    #[tokio::test]
    async fn test_garbage_pdf_bytes_fail_without_panicking() {
        let set = ExtractorSet::new(None);
        let result = set
            .extract("junk.pdf", FileKind::Pdf, Bytes::from_static(b"not a pdf"))
            .await;
        assert!(result.is_err());
    }
}
