//! Repository trait definitions for the domain layer.
//!
//! - [`MappingRepository`] - Two-index mapping store
//!
//! Implementations live in `crate::infrastructure::persistence`; mock
//! implementations are generated via `mockall` for unit tests.

pub mod mapping_repository;

pub use mapping_repository::{MappingRepository, StorageError, StorageResult};

#[cfg(test)]
pub use mapping_repository::MockMappingRepository;
