//! Repository trait for mapping data access.

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use async_trait::async_trait;
use thiserror::Error;

/// Errors reported by a mapping store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The short code is already taken. Callers retry with a new code.
    #[error("short code already exists: {0}")]
    DuplicateCode(String),

    /// The original URL was stored concurrently. Carries the winning mapping.
    #[error("original URL already shortened as {}", .0.short_code)]
    DuplicateUrl(Box<UrlMapping>),

    /// The backing store failed.
    #[error("storage backend error: {0}")]
    Backend(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Store of original URL to short code mappings with two lookup paths.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryMappingRepository`] - Process-lifetime store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Inserts a mapping, indexing it by code and by original URL.
    ///
    /// Atomic over both indices: either both are updated or neither is.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::DuplicateCode`] if the code is in use.
    /// Returns [`StorageError::DuplicateUrl`] if the original URL is already stored.
    async fn insert(&self, new_mapping: NewUrlMapping) -> StorageResult<UrlMapping>;

    /// Exact-match lookup by short code.
    async fn find_by_code(&self, code: &str) -> StorageResult<Option<UrlMapping>>;

    /// Exact-match lookup on the raw original URL string.
    async fn find_by_original_url(&self, original_url: &str) -> StorageResult<Option<UrlMapping>>;

    /// Snapshot of all mappings, newest first.
    async fn list_all(&self) -> StorageResult<Vec<UrlMapping>>;

    /// Number of stored mappings.
    async fn count(&self) -> StorageResult<usize>;
}
