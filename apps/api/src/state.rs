use std::sync::Arc;

use crate::analysis::strategy::ResumeScorer;
use crate::extract::ExtractorSet;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable scorer. Remote LLM primary with local fallback when
    /// credentials are configured; plain local scorer otherwise.
    pub scorer: Arc<dyn ResumeScorer>,
    pub extractors: Arc<ExtractorSet>,
}
