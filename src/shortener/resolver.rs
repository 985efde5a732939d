use std::sync::Arc;

use super::error::ShortenerError;
use crate::storage::Storage;

/// Resolves short codes to their target and counts the visit.
#[derive(Clone)]
pub struct Resolver {
    storage: Arc<dyn Storage>,
}

impl Resolver {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Look up `short_code`, bump its click counter and return the original URL.
    ///
    /// A failed increment is logged and swallowed: the visitor still gets
    /// redirected even if the counter misses the hit.
    pub async fn resolve_and_count(&self, short_code: &str) -> Result<String, ShortenerError> {
        let mapping = self
            .storage
            .get(short_code)
            .await?
            .ok_or(ShortenerError::NotFound)?;

        match self.storage.increment_clicks(short_code).await {
            Ok(true) => {}
            Ok(false) => {
                tracing::warn!(short_code = %short_code, "mapping vanished before click was counted");
            }
            Err(err) => {
                tracing::warn!(short_code = %short_code, error = %err, "failed to record click");
            }
        }

        Ok(mapping.original_url)
    }
}
