use crate::models::Mapping;
use crate::storage::{Storage, StorageError, StorageResult};
use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::atomic::{AtomicI64, Ordering};

/// Process-local storage backed by a sharded `DashMap`.
///
/// Uniqueness and click increments are atomic per entry, so this backend
/// honours the same contract as the SQL stores. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    mappings: DashMap<String, Mapping>,
    next_id: AtomicI64,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn init(&self) -> Result<()> {
        Ok(())
    }

    async fn create_with_code(
        &self,
        short_code: &str,
        original_url: &str,
    ) -> StorageResult<Mapping> {
        match self.mappings.entry(short_code.to_string()) {
            Entry::Occupied(_) => Err(StorageError::Conflict),
            Entry::Vacant(slot) => {
                let mapping = Mapping {
                    id: self.next_id.fetch_add(1, Ordering::Relaxed) + 1,
                    original_url: original_url.to_string(),
                    short_code: short_code.to_string(),
                    clicks: 0,
                    created_at: Utc::now(),
                };
                slot.insert(mapping.clone());
                Ok(mapping)
            }
        }
    }

    async fn get(&self, short_code: &str) -> Result<Option<Mapping>> {
        Ok(self.mappings.get(short_code).map(|entry| entry.value().clone()))
    }

    async fn increment_clicks(&self, short_code: &str) -> Result<bool> {
        match self.mappings.get_mut(short_code) {
            Some(mut entry) => {
                entry.clicks += 1;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn list(&self, limit: Option<i64>, offset: i64) -> Result<Vec<Mapping>> {
        let mut mappings: Vec<Mapping> = self
            .mappings
            .iter()
            .map(|entry| entry.value().clone())
            .collect();

        mappings.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        let skip = usize::try_from(offset).unwrap_or(0);
        let take = limit
            .and_then(|l| usize::try_from(l).ok())
            .unwrap_or(usize::MAX);

        Ok(mappings.into_iter().skip(skip).take(take).collect())
    }
}
