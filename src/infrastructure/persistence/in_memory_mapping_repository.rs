//! In-memory implementation of the mapping repository.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::{MappingRepository, StorageError, StorageResult};

/// Records plus the two indices into them. Only mutated under the write lock.
#[derive(Debug, Default)]
struct Tables {
    records: Vec<UrlMapping>,
    by_code: HashMap<String, usize>,
    by_original_url: HashMap<String, usize>,
}

/// Mapping store that lives for the lifetime of the process.
///
/// Both indices sit behind one [`RwLock`], so the duplicate checks and the
/// insert in [`MappingRepository::insert`] happen as a single step. Nothing
/// is ever updated or removed.
#[derive(Debug, Default)]
pub struct InMemoryMappingRepository {
    tables: RwLock<Tables>,
}

impl InMemoryMappingRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MappingRepository for InMemoryMappingRepository {
    async fn insert(&self, new_mapping: NewUrlMapping) -> StorageResult<UrlMapping> {
        let mut tables = self.tables.write().await;

        if tables.by_code.contains_key(&new_mapping.short_code) {
            return Err(StorageError::DuplicateCode(new_mapping.short_code));
        }

        if let Some(&idx) = tables.by_original_url.get(&new_mapping.original_url) {
            return Err(StorageError::DuplicateUrl(Box::new(
                tables.records[idx].clone(),
            )));
        }

        let idx = tables.records.len();
        let id = i64::try_from(idx + 1)
            .map_err(|_| StorageError::Backend("mapping id space exhausted".to_string()))?;

        let mapping = UrlMapping::new(
            id,
            new_mapping.original_url,
            new_mapping.short_code,
            Utc::now(),
        );

        tables.by_code.insert(mapping.short_code.clone(), idx);
        tables
            .by_original_url
            .insert(mapping.original_url.clone(), idx);
        tables.records.push(mapping.clone());

        debug!(id, code = %mapping.short_code, "Mapping stored");

        Ok(mapping)
    }

    async fn find_by_code(&self, code: &str) -> StorageResult<Option<UrlMapping>> {
        let tables = self.tables.read().await;
        Ok(tables
            .by_code
            .get(code)
            .map(|&idx| tables.records[idx].clone()))
    }

    async fn find_by_original_url(&self, original_url: &str) -> StorageResult<Option<UrlMapping>> {
        let tables = self.tables.read().await;
        Ok(tables
            .by_original_url
            .get(original_url)
            .map(|&idx| tables.records[idx].clone()))
    }

    async fn list_all(&self) -> StorageResult<Vec<UrlMapping>> {
        let mut mappings = self.tables.read().await.records.clone();
        mappings.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(mappings)
    }

    async fn count(&self) -> StorageResult<usize> {
        Ok(self.tables.read().await.records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn new_mapping(url: &str, code: &str) -> NewUrlMapping {
        NewUrlMapping {
            original_url: url.to_string(),
            short_code: code.to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let repo = InMemoryMappingRepository::new();

        let first = repo
            .insert(new_mapping("https://example.com/1", "aaaaaa"))
            .await
            .unwrap();
        let second = repo
            .insert(new_mapping("https://example.com/2", "bbbbbb"))
            .await
            .unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_find_by_code_round_trip() {
        let repo = InMemoryMappingRepository::new();
        repo.insert(new_mapping("https://example.com/page", "Xy12Ab"))
            .await
            .unwrap();

        let found = repo.find_by_code("Xy12Ab").await.unwrap().unwrap();
        assert_eq!(found.original_url, "https://example.com/page");
    }

    #[tokio::test]
    async fn test_find_by_code_is_case_sensitive() {
        let repo = InMemoryMappingRepository::new();
        repo.insert(new_mapping("https://example.com", "AbCdEf"))
            .await
            .unwrap();

        assert!(repo.find_by_code("abcdef").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_by_original_url_exact_match_only() {
        let repo = InMemoryMappingRepository::new();
        repo.insert(new_mapping("https://example.com/page", "abc123"))
            .await
            .unwrap();

        assert!(
            repo.find_by_original_url("https://example.com/page")
                .await
                .unwrap()
                .is_some()
        );
        assert!(
            repo.find_by_original_url("https://example.com/page/")
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_insert_rejects_duplicate_code() {
        let repo = InMemoryMappingRepository::new();
        repo.insert(new_mapping("https://first.com", "taken1"))
            .await
            .unwrap();

        let result = repo.insert(new_mapping("https://second.com", "taken1")).await;

        assert!(matches!(result, Err(StorageError::DuplicateCode(code)) if code == "taken1"));
        assert_eq!(repo.count().await.unwrap(), 1);
        assert!(
            repo.find_by_original_url("https://second.com")
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_insert_reports_existing_mapping_for_duplicate_url() {
        let repo = InMemoryMappingRepository::new();
        let first = repo
            .insert(new_mapping("https://example.com", "first1"))
            .await
            .unwrap();

        let result = repo.insert(new_mapping("https://example.com", "other2")).await;

        match result {
            Err(StorageError::DuplicateUrl(existing)) => assert_eq!(*existing, first),
            other => panic!("expected DuplicateUrl, got {other:?}"),
        }
        assert!(repo.find_by_code("other2").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_all_newest_first() {
        let repo = InMemoryMappingRepository::new();
        repo.insert(new_mapping("https://example.com/old", "old111"))
            .await
            .unwrap();
        repo.insert(new_mapping("https://example.com/new", "new222"))
            .await
            .unwrap();

        let all = repo.list_all().await.unwrap();

        assert_eq!(all.len(), 2);
        assert_eq!(all[0].short_code, "new222");
        assert_eq!(all[1].short_code, "old111");
        assert!(all[0].created_at >= all[1].created_at);
    }

    #[tokio::test]
    async fn test_list_all_empty() {
        let repo = InMemoryMappingRepository::new();
        assert!(repo.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_inserts_same_code_single_winner() {
        let repo = Arc::new(InMemoryMappingRepository::new());

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    repo.insert(new_mapping(&format!("https://example.com/{i}"), "race00"))
                        .await
                })
            })
            .collect();

        let mut successes = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                successes += 1;
            }
        }

        assert_eq!(successes, 1);
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_inserts_same_url_single_record() {
        let repo = Arc::new(InMemoryMappingRepository::new());

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    repo.insert(new_mapping("https://example.com/same", &format!("code{i:02}")))
                        .await
                })
            })
            .collect();

        for handle in handles {
            let _ = handle.await.unwrap();
        }

        assert_eq!(repo.count().await.unwrap(), 1);
    }
}
