//! Scoring strategies — a remote LLM primary with a deterministic local fallback.
//!
//! `AppState` holds an `Arc<dyn ResumeScorer>`; handlers never know which
//! backend produced a report. `ResilientScorer` makes the substitution: any
//! remote failure (no credentials, network error, malformed or out-of-range
//! response) silently degrades to `LocalScorer`, which cannot fail.

use async_trait::async_trait;
use thiserror::Error;
use tracing::warn;

use crate::analysis::scoring::{compute_score_report, ScoreReport};
use crate::llm_client::prompts::{score_prompt, SCORE_SYSTEM};
use crate::llm_client::{LlmClient, LlmError};

#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("remote report rejected: {0}")]
    InvalidRemoteReport(String),
}

/// The scorer seam. Implementations are swapped without touching handlers.
#[async_trait]
pub trait ResumeScorer: Send + Sync {
    async fn score(&self, resume_text: &str, jd_text: &str) -> Result<ScoreReport, ScoreError>;
}

// ────────────────────────────────────────────────────────────────────────────
// LocalScorer — deterministic, always available
// ────────────────────────────────────────────────────────────────────────────

/// Pure-Rust scorer running the local aggregation algorithm. Never fails.
pub struct LocalScorer;

#[async_trait]
impl ResumeScorer for LocalScorer {
    async fn score(&self, resume_text: &str, jd_text: &str) -> Result<ScoreReport, ScoreError> {
        let mut report = compute_score_report(resume_text, jd_text);
        report.scorer_backend = "local".to_string();
        Ok(report)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// RemoteScorer — LLM-backed primary
// ────────────────────────────────────────────────────────────────────────────

/// Scores via the LLM. The prompt pins the exact ScoreReport shape; anything
/// that fails to parse or falls outside [0, 100] is rejected so the range
/// invariant never depends on remote behavior.
pub struct RemoteScorer {
    llm: LlmClient,
}

impl RemoteScorer {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl ResumeScorer for RemoteScorer {
    async fn score(&self, resume_text: &str, jd_text: &str) -> Result<ScoreReport, ScoreError> {
        let prompt = score_prompt(jd_text, resume_text);
        let mut report: ScoreReport = self.llm.call_json(&prompt, SCORE_SYSTEM).await?;
        validate_remote_report(&report)?;
        report.scorer_backend = "remote".to_string();
        Ok(report)
    }
}

fn validate_remote_report(report: &ScoreReport) -> Result<(), ScoreError> {
    let scores = [
        ("overall_score", report.overall_score),
        ("keyword_match", report.details.keyword_match),
        ("formatting", report.details.formatting),
        ("section_completeness", report.details.section_completeness),
        ("experience_relevance", report.details.experience_relevance),
    ];
    for (name, value) in scores {
        if value > 100 {
            return Err(ScoreError::InvalidRemoteReport(format!(
                "{name} = {value} is out of range"
            )));
        }
    }
    for category in &report.categories {
        if category.score > 100 {
            return Err(ScoreError::InvalidRemoteReport(format!(
                "category '{}' score {} is out of range",
                category.name, category.score
            )));
        }
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// ResilientScorer — the substitution wrapper
// ────────────────────────────────────────────────────────────────────────────

/// Tries the remote primary when one is configured and falls back to the
/// local algorithm on any failure. Callers only ever see a ScoreReport.
pub struct ResilientScorer {
    primary: Option<RemoteScorer>,
    fallback: LocalScorer,
}

impl ResilientScorer {
    pub fn new(primary: Option<RemoteScorer>) -> Self {
        Self {
            primary,
            fallback: LocalScorer,
        }
    }
}

#[async_trait]
impl ResumeScorer for ResilientScorer {
    async fn score(&self, resume_text: &str, jd_text: &str) -> Result<ScoreReport, ScoreError> {
        if let Some(remote) = &self.primary {
            match remote.score(resume_text, jd_text).await {
                Ok(report) => return Ok(report),
                Err(e) => warn!("Remote scorer failed, falling back to local: {e}"),
            }
        }
        self.fallback.score(resume_text, jd_text).await
    }
}
