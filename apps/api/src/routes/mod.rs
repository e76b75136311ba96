pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::extract::handlers as uploads;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/analysis", post(analysis::handle_analyze))
        .route("/api/v1/resumes/upload", post(uploads::handle_upload))
        .with_state(state)
}
