use crate::models::Mapping;
use crate::storage::{Storage, StorageError, StorageResult};
use anyhow::Result;
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::sync::Arc;

pub struct PostgresStorage {
    pool: Arc<PgPool>,
}

impl PostgresStorage {
    pub async fn new(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        Ok(Self {
            pool: Arc::new(pool),
        })
    }
}

#[async_trait]
impl Storage for PostgresStorage {
    async fn init(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS urls (
                id BIGSERIAL PRIMARY KEY,
                original_url TEXT NOT NULL,
                short_code VARCHAR(10) NOT NULL UNIQUE,
                clicks BIGINT NOT NULL DEFAULT 0,
                created_at TIMESTAMPTZ NOT NULL DEFAULT CURRENT_TIMESTAMP
            )
            "#,
        )
        .execute(self.pool.as_ref())
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_urls_created_at ON urls(created_at)")
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn create_with_code(
        &self,
        short_code: &str,
        original_url: &str,
    ) -> StorageResult<Mapping> {
        let row = sqlx::query_as::<_, Mapping>(
            r#"
            INSERT INTO urls (original_url, short_code)
            VALUES ($1, $2)
            ON CONFLICT (short_code) DO NOTHING
            RETURNING id, original_url, short_code, clicks, created_at
            "#,
        )
        .bind(original_url)
        .bind(short_code)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(|e| StorageError::Other(e.into()))?;

        row.ok_or(StorageError::Conflict)
    }

    async fn get(&self, short_code: &str) -> Result<Option<Mapping>> {
        let mapping = sqlx::query_as::<_, Mapping>(
            r#"
            SELECT id, original_url, short_code, clicks, created_at
            FROM urls
            WHERE short_code = $1
            "#,
        )
        .bind(short_code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(mapping)
    }

    async fn increment_clicks(&self, short_code: &str) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE urls
            SET clicks = clicks + 1
            WHERE short_code = $1
            "#,
        )
        .bind(short_code)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self, limit: Option<i64>, offset: i64) -> Result<Vec<Mapping>> {
        // LIMIT NULL means no limit in Postgres
        let mappings = sqlx::query_as::<_, Mapping>(
            r#"
            SELECT id, original_url, short_code, clicks, created_at
            FROM urls
            ORDER BY created_at DESC, id DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(mappings)
    }
}
