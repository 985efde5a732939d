use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers::{get_stats, list_stats, shorten_url, AppState};

pub fn create_api_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/shorten", post(shorten_url))
        .route("/api/stats", get(list_stats))
        .route("/api/stats/{code}", get(get_stats))
        .with_state(state)
}
