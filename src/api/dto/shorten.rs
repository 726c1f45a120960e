//! DTOs for link shortening endpoint.

use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::UrlMapping;

/// Request to shorten a single URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten. Stored exactly as sent.
    #[validate(url(message = "Please provide a valid URL"))]
    pub url: String,
}

/// Externally visible representation of a mapping.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub short_url: String,
    pub original_url: String,
    pub short_code: String,
    /// RFC 3339, UTC, millisecond precision.
    pub created_at: String,
}

impl ShortenResponse {
    pub fn from_mapping(mapping: &UrlMapping, short_url: String) -> Self {
        Self {
            short_url,
            original_url: mapping.original_url.clone(),
            short_code: mapping.short_code.clone(),
            created_at: format_timestamp(mapping),
        }
    }
}

fn format_timestamp(mapping: &UrlMapping) -> String {
    mapping
        .created_at
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}
