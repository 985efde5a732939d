use axum::{routing::get, Router};
use std::sync::Arc;

use super::handlers::{health_check, redirect_url, RedirectState};

pub fn create_redirect_router(state: Arc<RedirectState>) -> Router {
    Router::new()
        .route("/", get(health_check))
        .route("/{code}", get(redirect_url))
        .with_state(state)
}
