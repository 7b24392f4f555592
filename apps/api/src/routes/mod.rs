pub mod health;

use axum::{routing::get, routing::post, Router};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // ATS analysis API
        .route("/api/v1/ats/analyze", post(handlers::handle_analyze))
        .route("/api/v1/ats/live-score", post(handlers::handle_live_score))
        .route("/api/v1/ats/fix-strategy", post(handlers::handle_fix_strategy))
        .with_state(state)
}
