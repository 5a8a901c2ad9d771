pub mod api;
pub mod health;
pub mod pages;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Browser UI
        .route("/", get(pages::handle_index))
        .route("/analyze", post(pages::handle_analyze_page))
        .route("/recommendations", post(pages::handle_recommendations_page))
        // JSON API
        .route("/api/v1/analyze", post(api::handle_analyze))
        .route("/api/v1/recommendations", post(api::handle_recommendations))
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}
