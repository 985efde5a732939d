use std::sync::Arc;

use super::code::RandomCodeSource;
use super::error::ShortenerError;
use crate::models::Mapping;
use crate::storage::{Storage, StorageError};

/// Reserves a fresh short code for a URL and persists the mapping.
#[derive(Clone)]
pub struct Allocator {
    storage: Arc<dyn Storage>,
    codes: Arc<dyn RandomCodeSource>,
    max_attempts: u32,
}

impl Allocator {
    pub fn new(
        storage: Arc<dyn Storage>,
        codes: Arc<dyn RandomCodeSource>,
        max_attempts: u32,
    ) -> Self {
        Self {
            storage,
            codes,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Allocate a code for `original_url` and return the stored mapping.
    ///
    /// The existence check is only a shortcut. Two allocators can both see a
    /// code as free; the store's unique constraint picks the winner and the
    /// loser retries with a new candidate.
    pub async fn allocate(&self, original_url: &str) -> Result<Mapping, ShortenerError> {
        if original_url.is_empty() {
            return Err(ShortenerError::Validation("URL is required".to_string()));
        }

        for attempt in 1..=self.max_attempts {
            let code = self.codes.next_code();

            if self.storage.get(&code).await?.is_some() {
                tracing::debug!(short_code = %code, attempt, "short code taken, retrying");
                continue;
            }

            match self.storage.create_with_code(&code, original_url).await {
                Ok(mapping) => {
                    tracing::info!(short_code = %mapping.short_code, attempt, "allocated short code");
                    return Ok(mapping);
                }
                Err(StorageError::Conflict) => {
                    tracing::debug!(short_code = %code, attempt, "lost insert race, retrying");
                }
                Err(StorageError::Other(e)) => return Err(ShortenerError::Store(e)),
            }
        }

        tracing::error!(attempts = self.max_attempts, "short code allocation exhausted");
        Err(ShortenerError::AllocationExhausted {
            attempts: self.max_attempts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shortener::code::{is_valid_code, SequenceCodeSource, ThreadRngCodeSource};
    use crate::shortener::testing::{BlindStorage, BrokenStorage};
    use crate::storage::MemoryStorage;
    use std::collections::HashSet;

    fn allocator_with(storage: Arc<dyn Storage>, codes: Vec<&str>, max: u32) -> Allocator {
        Allocator::new(storage, Arc::new(SequenceCodeSource::new(codes)), max)
    }

    #[tokio::test]
    async fn allocates_fresh_mapping() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        let allocator = Allocator::new(Arc::clone(&storage), Arc::new(ThreadRngCodeSource), 10);

        let mapping = allocator
            .allocate("https://example.com/long/path")
            .await
            .unwrap();

        assert!(is_valid_code(&mapping.short_code));
        assert_eq!(mapping.original_url, "https://example.com/long/path");
        assert_eq!(mapping.clicks, 0);

        let stored = storage.get(&mapping.short_code).await.unwrap().unwrap();
        assert_eq!(stored.id, mapping.id);
    }

    #[tokio::test]
    async fn empty_url_is_rejected_without_writing() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        let allocator = allocator_with(Arc::clone(&storage), vec!["AAAAAA"], 10);

        let err = allocator.allocate("").await.unwrap_err();
        assert!(matches!(err, ShortenerError::Validation(_)));
        assert!(storage.list(None, 0).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn existing_code_triggers_retry() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        storage
            .create_with_code("AAAAAA", "https://taken.example")
            .await
            .unwrap();

        let allocator = allocator_with(Arc::clone(&storage), vec!["AAAAAA", "BBBBBB"], 10);
        let mapping = allocator.allocate("https://example.com").await.unwrap();

        assert_eq!(mapping.short_code, "BBBBBB");
        let original = storage.get("AAAAAA").await.unwrap().unwrap();
        assert_eq!(original.original_url, "https://taken.example");
    }

    #[tokio::test]
    async fn insert_conflict_triggers_retry() {
        // The pre-check never sees the existing row, so only the insert can catch it
        let inner = Arc::new(MemoryStorage::new());
        inner
            .create_with_code("AAAAAA", "https://taken.example")
            .await
            .unwrap();
        let storage: Arc<dyn Storage> = Arc::new(BlindStorage::new(inner.clone()));

        let allocator = allocator_with(storage, vec!["AAAAAA", "CCCCCC"], 10);
        let mapping = allocator.allocate("https://example.com").await.unwrap();

        assert_eq!(mapping.short_code, "CCCCCC");
        assert_eq!(inner.list(None, 0).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn gives_up_after_max_attempts() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        storage
            .create_with_code("AAAAAA", "https://taken.example")
            .await
            .unwrap();

        let allocator = allocator_with(Arc::clone(&storage), vec!["AAAAAA"], 3);
        let err = allocator.allocate("https://example.com").await.unwrap_err();

        assert!(matches!(err, ShortenerError::AllocationExhausted { attempts: 3 }));
        assert_eq!(storage.list(None, 0).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn store_failure_is_not_retried() {
        let storage: Arc<dyn Storage> = Arc::new(BrokenStorage);
        let allocator = allocator_with(storage, vec!["AAAAAA"], 10);

        let err = allocator.allocate("https://example.com").await.unwrap_err();
        assert!(matches!(err, ShortenerError::Store(_)));
    }

    #[tokio::test]
    async fn concurrent_allocations_get_distinct_codes() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        let codes: Vec<String> = (0..64).map(|i| format!("code{i:02}")).collect();

        let mut handles = vec![];
        for i in 0..32 {
            // Every task walks the same sequence from the start, so they collide
            let allocator = Allocator::new(
                Arc::clone(&storage),
                Arc::new(SequenceCodeSource::new(codes.clone())),
                64,
            );
            handles.push(tokio::spawn(async move {
                allocator
                    .allocate(&format!("https://example.com/{i}"))
                    .await
                    .unwrap()
            }));
        }

        let mut seen = HashSet::new();
        for handle in handles {
            let mapping = handle.await.unwrap();
            assert!(seen.insert(mapping.short_code), "duplicate code handed out");
        }
        assert_eq!(storage.list(None, 0).await.unwrap().len(), 32);
    }
}
