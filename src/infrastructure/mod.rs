//! Infrastructure layer.
//!
//! Provides concrete implementations of the domain repository traits.
//!
//! - [`persistence`] - Mapping store implementations

pub mod persistence;
