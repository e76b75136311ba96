use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Both integration keys are optional: absence selects a degraded mode
/// rather than failing startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Enables the remote LLM scorer. Without it, scoring runs locally.
    pub anthropic_api_key: Option<String>,
    /// Base URL of the document conversion service. Without it, DOCX uploads
    /// extract as empty text.
    pub convert_service_url: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            convert_service_url: optional_env("CONVERT_SERVICE_URL"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Missing and empty values both read as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
