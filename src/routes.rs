//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`  - Health check
//! - `/api/*`        - JSON API
//! - `GET  /{code}`  - Short link redirect
//! - anything else   - 404 in the same shape as an unknown code
//!
//! The redirect route shares the flat top-level namespace; codes that look
//! like other routes are rejected by [`crate::utils::code_generator::is_reserved_path`].

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler, unmatched_path_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// Trailing slashes are trimmed before routing, so `/api/urls/` and
/// `/aB3xY9/` behave like their canonical forms.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state))
}

/// Routes and middleware without path normalization.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes())
        .route("/{code}", get(redirect_handler))
        .fallback(unmatched_path_handler)
        .with_state(state)
        .layer(tracing::layer())
}
