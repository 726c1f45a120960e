//! Domain layer containing the mapping entity and the store contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Concrete stores live in [`crate::infrastructure::persistence`].

pub mod entities;
pub mod repositories;
