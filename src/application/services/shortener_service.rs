//! Short code allocation, resolution and listing.

use std::sync::Arc;

use metrics::counter;
use tracing::{debug, info, warn};

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::{MappingRepository, StorageError};
use crate::error::{AppError, INVALID_URL_MESSAGE};
use crate::utils::code_generator::{CodeGenerator, is_reserved_path};
use crate::utils::url_validator::validate_original_url;

/// Upper bound on candidate codes tried per shorten request.
pub const MAX_GENERATION_ATTEMPTS: usize = 10;

/// Service for creating and resolving short codes.
///
/// Owns no state of its own beyond handles to the store and the code
/// generator, so it is shared freely between requests.
pub struct ShortenerService {
    repository: Arc<dyn MappingRepository>,
    generator: Arc<dyn CodeGenerator>,
    base_url: String,
}

impl ShortenerService {
    /// Creates a new shortener service.
    ///
    /// `base_url` is the public origin prepended to codes; a trailing `/`
    /// is dropped.
    pub fn new(
        repository: Arc<dyn MappingRepository>,
        generator: Arc<dyn CodeGenerator>,
        base_url: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            repository,
            generator,
            base_url,
        }
    }

    /// Returns the mapping for `original_url`, creating it if needed.
    ///
    /// # Idempotency
    ///
    /// The original URL is matched as an exact string. A second request for
    /// the same string returns the stored mapping with its original code and
    /// timestamp.
    ///
    /// # Code Generation
    ///
    /// Tries up to [`MAX_GENERATION_ATTEMPTS`] candidates. A candidate is
    /// skipped if it looks like a reserved path, is already in use, or loses
    /// an insert race to a concurrent request.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is not absolute with a host.
    /// Returns [`AppError::GenerationExhausted`] if no candidate was usable.
    /// Returns [`AppError::Internal`] on storage failures.
    pub async fn shorten(&self, original_url: &str) -> Result<UrlMapping, AppError> {
        if let Err(e) = validate_original_url(original_url) {
            debug!(reason = %e, "Rejected URL");
            return Err(AppError::bad_request(INVALID_URL_MESSAGE));
        }

        if let Some(existing) = self.repository.find_by_original_url(original_url).await? {
            debug!(code = %existing.short_code, "Reusing existing mapping");
            return Ok(existing);
        }

        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            let code = self.generator.generate();

            if is_reserved_path(&code) {
                debug!(attempt, %code, "Skipping reserved-looking code");
                continue;
            }

            if self.repository.find_by_code(&code).await?.is_some() {
                warn!(attempt, %code, "Short code collision");
                counter!("tinylink_code_collisions_total").increment(1);
                continue;
            }

            let new_mapping = NewUrlMapping {
                original_url: original_url.to_string(),
                short_code: code,
            };

            match self.repository.insert(new_mapping).await {
                Ok(mapping) => {
                    info!(id = mapping.id, code = %mapping.short_code, "Short link created");
                    counter!("tinylink_links_created_total").increment(1);
                    return Ok(mapping);
                }
                Err(StorageError::DuplicateCode(code)) => {
                    warn!(attempt, %code, "Short code taken by concurrent insert");
                    counter!("tinylink_code_collisions_total").increment(1);
                }
                Err(StorageError::DuplicateUrl(existing)) => {
                    debug!(code = %existing.short_code, "URL shortened by concurrent request");
                    return Ok(*existing);
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(AppError::GenerationExhausted {
            attempts: MAX_GENERATION_ATTEMPTS,
        })
    }

    /// Looks up the mapping a short code redirects to.
    ///
    /// Reserved-looking codes are rejected without touching the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for reserved or unknown codes.
    pub async fn resolve(&self, code: &str) -> Result<UrlMapping, AppError> {
        if is_reserved_path(code) {
            debug!(%code, "Rejected reserved path");
            return Err(AppError::not_found(code));
        }

        self.repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found(code))
    }

    /// Returns every mapping, newest first.
    pub async fn list_recent(&self) -> Result<Vec<UrlMapping>, AppError> {
        Ok(self.repository.list_all().await?)
    }

    /// Number of stored mappings.
    pub async fn mapping_count(&self) -> Result<usize, AppError> {
        Ok(self.repository.count().await?)
    }

    /// Builds `{base_url}/{code}`.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url, code)
    }
}
