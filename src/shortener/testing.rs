//! Failure-injecting storage wrappers for unit tests.

use std::sync::Arc;

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use crate::models::Mapping;
use crate::storage::{Storage, StorageError, StorageResult};

/// Hides existing rows from `get`, as if another writer inserted them after
/// the pre-check ran.
pub struct BlindStorage {
    inner: Arc<dyn Storage>,
}

impl BlindStorage {
    pub fn new(inner: Arc<dyn Storage>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl Storage for BlindStorage {
    async fn init(&self) -> Result<()> {
        self.inner.init().await
    }

    async fn create_with_code(&self, short_code: &str, original_url: &str) -> StorageResult<Mapping> {
        self.inner.create_with_code(short_code, original_url).await
    }

    async fn get(&self, _short_code: &str) -> Result<Option<Mapping>> {
        Ok(None)
    }

    async fn increment_clicks(&self, short_code: &str) -> Result<bool> {
        self.inner.increment_clicks(short_code).await
    }

    async fn list(&self, limit: Option<i64>, offset: i64) -> Result<Vec<Mapping>> {
        self.inner.list(limit, offset).await
    }
}

/// Reads work, click increments always fail.
pub struct NoCountStorage {
    inner: Arc<dyn Storage>,
}

impl NoCountStorage {
    pub fn new(inner: Arc<dyn Storage>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl Storage for NoCountStorage {
    async fn init(&self) -> Result<()> {
        self.inner.init().await
    }

    async fn create_with_code(&self, short_code: &str, original_url: &str) -> StorageResult<Mapping> {
        self.inner.create_with_code(short_code, original_url).await
    }

    async fn get(&self, short_code: &str) -> Result<Option<Mapping>> {
        self.inner.get(short_code).await
    }

    async fn increment_clicks(&self, _short_code: &str) -> Result<bool> {
        Err(anyhow!("write timed out"))
    }

    async fn list(&self, limit: Option<i64>, offset: i64) -> Result<Vec<Mapping>> {
        self.inner.list(limit, offset).await
    }
}

/// Every call fails.
pub struct BrokenStorage;

#[async_trait]
impl Storage for BrokenStorage {
    async fn init(&self) -> Result<()> {
        Err(anyhow!("connection refused"))
    }

    async fn create_with_code(&self, _short_code: &str, _original_url: &str) -> StorageResult<Mapping> {
        Err(StorageError::Other(anyhow!("connection refused")))
    }

    async fn get(&self, _short_code: &str) -> Result<Option<Mapping>> {
        Err(anyhow!("connection refused"))
    }

    async fn increment_clicks(&self, _short_code: &str) -> Result<bool> {
        Err(anyhow!("connection refused"))
    }

    async fn list(&self, _limit: Option<i64>, _offset: i64) -> Result<Vec<Mapping>> {
        Err(anyhow!("connection refused"))
    }
}
