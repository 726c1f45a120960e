//! DTOs for the mapping listing endpoint.

use serde::{Deserialize, Serialize};

use super::shorten::ShortenResponse;
use crate::domain::entities::UrlMapping;

/// One entry of `GET /api/urls`: the shorten response plus the record id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UrlListItem {
    pub id: i64,
    #[serde(flatten)]
    pub mapping: ShortenResponse,
}

impl UrlListItem {
    pub fn from_mapping(mapping: &UrlMapping, short_url: String) -> Self {
        Self {
            id: mapping.id,
            mapping: ShortenResponse::from_mapping(mapping, short_url),
        }
    }
}
