// Scoring engine: keyword extraction, the four sub-scores, weighted
// aggregation, and the remote/local scorer strategy.
// All LLM calls go through llm_client — no direct Anthropic calls here.

pub mod handlers;
pub mod keywords;
pub mod scoring;
pub mod strategy;
