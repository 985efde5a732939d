use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use std::sync::Arc;

use crate::shortener::{Resolver, ShortenerError};

pub struct RedirectState {
    pub resolver: Resolver,
}

/// Redirect to original URL with a 302, counting the visit
pub async fn redirect_url(
    State(state): State<Arc<RedirectState>>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, ShortenerError> {
    let original_url = state.resolver.resolve_and_count(&code).await?;

    Ok((StatusCode::FOUND, [(header::LOCATION, original_url)]))
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    #[derive(Serialize)]
    struct HealthResponse {
        status: String,
    }

    Json(HealthResponse {
        status: "OK".to_string(),
    })
}
