//! DTOs for health check endpoint.
//!
//! The service has one dependency to check, the mapping store, so the
//! check set is a single `storage` entry.

use serde::Serialize;

/// Health check response.
///
/// `status` is `healthy` when the store answered a count, `degraded` otherwise.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub checks: HealthChecks,
}

/// Per-component checks. Only the in-memory store is checked.
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    /// Result of counting stored mappings.
    pub storage: CheckStatus,
}

/// Outcome of one check: `ok` or `error`, with a human-readable detail.
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
