//! # tinylink
//!
//! A small URL shortening service built with Axum. It accepts a long URL,
//! returns a six-character code and short URL, redirects visitors from the
//! code to the original URL, and lists recent mappings.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Mapping entity and store trait
//! - **Application Layer** ([`application`]) - Code allocation, resolution, listing
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory store
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export BASE_URL="https://sho.rt"   # Optional
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//!
//! ## Metrics
//!
//! Counters are emitted through the [`metrics`] facade:
//!
//! - `tinylink_links_created_total` - new mappings stored
//! - `tinylink_code_collisions_total` - candidate codes already in use
//! - `tinylink_redirects_total` - successful redirects
//!
//! The crate installs no recorder. Until the embedding binary sets one
//! (e.g. a Prometheus exporter) the counters are no-ops.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::application::services::ShortenerService;
    pub use crate::domain::entities::{NewUrlMapping, UrlMapping};
    pub use crate::domain::repositories::{MappingRepository, StorageError};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::InMemoryMappingRepository;
    pub use crate::state::AppState;
    pub use crate::utils::code_generator::{CodeGenerator, RandomCodeGenerator};
}
