//! Mapping store implementations.
//!
//! - [`InMemoryMappingRepository`] - Process-lifetime store guarded by a single lock

pub mod in_memory_mapping_repository;

pub use in_memory_mapping_repository::InMemoryMappingRepository;
