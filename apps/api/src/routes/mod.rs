pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::extraction::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Portfolio extraction API
        .route("/api/v1/portfolio/extract", post(handlers::handle_extract))
        .route(
            "/api/v1/portfolio/upload",
            post(handlers::handle_upload).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/api/v1/portfolio/sample", get(handlers::handle_sample))
        .with_state(state)
}
