use crate::models::Mapping;
use anyhow::Result;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("short code already exists")]
    Conflict,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

#[async_trait]
pub trait Storage: Send + Sync {
    /// Initialize the storage (create tables and indexes if absent)
    async fn init(&self) -> Result<()>;

    /// Insert a new mapping under `short_code`.
    ///
    /// Returns `StorageError::Conflict` when the code is already taken. This is
    /// the authoritative uniqueness check; callers may race on the same code.
    async fn create_with_code(
        &self,
        short_code: &str,
        original_url: &str,
    ) -> StorageResult<Mapping>;

    /// Get a mapping by short code
    async fn get(&self, short_code: &str) -> Result<Option<Mapping>>;

    /// Atomically add one click to whatever row currently holds `short_code`.
    /// Returns false if no row matched.
    async fn increment_clicks(&self, short_code: &str) -> Result<bool>;

    /// List mappings, newest first. `limit: None` returns everything past `offset`.
    async fn list(&self, limit: Option<i64>, offset: i64) -> Result<Vec<Mapping>>;
}
