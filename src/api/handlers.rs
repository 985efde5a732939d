use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;

use super::extract::ShortenPayload;
use crate::models::{ListQuery, Mapping, MappingStats, ShortenResponse};
use crate::shortener::{Allocator, ShortenerError, Stats};

pub struct AppState {
    pub allocator: Allocator,
    pub stats: Stats,
    pub base_url: String,
}

/// Create a new shortened URL
pub async fn shorten_url(
    State(state): State<Arc<AppState>>,
    ShortenPayload(payload): ShortenPayload,
) -> Result<Json<ShortenResponse>, ShortenerError> {
    let url = payload.url.unwrap_or_default();
    let mapping = state.allocator.allocate(&url).await?;

    Ok(Json(ShortenResponse::new(mapping, &state.base_url)))
}

/// List all shortened URLs, newest first
pub async fn list_stats(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Mapping>>, ShortenerError> {
    Ok(Json(state.stats.list(&query).await?))
}

/// Stats for a single short code
pub async fn get_stats(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> Result<Json<MappingStats>, ShortenerError> {
    Ok(Json(state.stats.get(&code).await?))
}
