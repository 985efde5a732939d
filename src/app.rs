use axum::Router;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::api::{self, AppState};
use crate::redirect::{self, RedirectState};
use crate::shortener::{Allocator, RandomCodeSource, Resolver, Stats};
use crate::storage::Storage;

/// Wire the shortener components over `storage` and return the full router.
pub fn create_app(
    storage: Arc<dyn Storage>,
    codes: Arc<dyn RandomCodeSource>,
    base_url: &str,
    max_attempts: u32,
) -> Router {
    let api_state = Arc::new(AppState {
        allocator: Allocator::new(Arc::clone(&storage), codes, max_attempts),
        stats: Stats::new(Arc::clone(&storage)),
        base_url: base_url.to_string(),
    });
    let redirect_state = Arc::new(RedirectState {
        resolver: Resolver::new(storage),
    });

    Router::new()
        .merge(api::create_api_router(api_state))
        .merge(redirect::create_redirect_router(redirect_state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
}
