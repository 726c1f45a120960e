//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::ShortenerService;
use crate::domain::repositories::MappingRepository;
use crate::infrastructure::persistence::InMemoryMappingRepository;
use crate::utils::code_generator::{CodeGenerator, RandomCodeGenerator};

/// State cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<ShortenerService>,
}

impl AppState {
    pub fn new(shortener: Arc<ShortenerService>) -> Self {
        Self { shortener }
    }

    /// Builds state around an arbitrary store and generator.
    pub fn with_parts(
        repository: Arc<dyn MappingRepository>,
        generator: Arc<dyn CodeGenerator>,
        base_url: impl Into<String>,
    ) -> Self {
        Self::new(Arc::new(ShortenerService::new(
            repository, generator, base_url,
        )))
    }

    /// Empty in-memory store with random codes.
    pub fn in_memory(base_url: impl Into<String>) -> Self {
        Self::with_parts(
            Arc::new(InMemoryMappingRepository::new()),
            Arc::new(RandomCodeGenerator::new()),
            base_url,
        )
    }
}
