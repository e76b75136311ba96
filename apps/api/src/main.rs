mod analysis;
mod config;
mod document;
mod errors;
mod extract;
mod llm_client;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::strategy::{RemoteScorer, ResilientScorer, ResumeScorer};
use crate::config::Config;
use crate::extract::ExtractorSet;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Rescore API v{}", env!("CARGO_PKG_VERSION"));

    // Remote scoring is opt-in by credentials; the local algorithm always
    // backs it so analysis works with no configuration at all.
    let remote = config
        .anthropic_api_key
        .clone()
        .map(|key| RemoteScorer::new(LlmClient::new(key)));
    match &remote {
        Some(_) => info!("Remote scorer enabled (model: {})", llm_client::MODEL),
        None => info!("ANTHROPIC_API_KEY not set; scoring runs locally"),
    }
    let scorer: Arc<dyn ResumeScorer> = Arc::new(ResilientScorer::new(remote));

    let extractors = Arc::new(ExtractorSet::new(config.convert_service_url.clone()));
    if config.convert_service_url.is_none() {
        info!("CONVERT_SERVICE_URL not set; DOCX uploads will extract as empty");
    }

    let state = AppState { scorer, extractors };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
