use std::sync::Arc;

use super::error::ShortenerError;
use crate::models::{ListQuery, Mapping, MappingStats};
use crate::storage::Storage;

/// Read-only views over stored mappings.
#[derive(Clone)]
pub struct Stats {
    storage: Arc<dyn Storage>,
}

impl Stats {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Mappings newest first. Without a limit every mapping is returned.
    pub async fn list(&self, query: &ListQuery) -> Result<Vec<Mapping>, ShortenerError> {
        if query.limit.is_some_and(|l| l < 0) || query.offset < 0 {
            return Err(ShortenerError::Validation(
                "limit and offset must not be negative".to_string(),
            ));
        }

        Ok(self.storage.list(query.limit, query.offset).await?)
    }

    pub async fn get(&self, short_code: &str) -> Result<MappingStats, ShortenerError> {
        self.storage
            .get(short_code)
            .await?
            .map(MappingStats::from)
            .ok_or(ShortenerError::NotFound)
    }
}
