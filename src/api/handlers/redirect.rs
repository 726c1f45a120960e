//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use metrics::counter;
use tracing::debug;
use url::Url;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Redirect Type
///
/// Always `302 Found`. Clients must not cache the target permanently.
///
/// The stored URL is kept exactly as submitted; `Location` carries its
/// percent-encoded form (`/a b` becomes `/a%20b`).
///
/// # Errors
///
/// Returns 404 Not Found if the code is unknown or looks like a reserved
/// path (`api*`, `src*`, anything with a `.`).
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let mapping = state.shortener.resolve(&code).await?;

    let target = Url::parse(&mapping.original_url)
        .map_err(|e| AppError::internal(format!("stored URL no longer parses: {e}")))?;
    let location = HeaderValue::try_from(target.as_str())
        .map_err(|e| AppError::internal(format!("stored URL is not a valid header: {e}")))?;

    debug!(%code, target = %mapping.original_url, "Redirecting");
    counter!("tinylink_redirects_total").increment(1);

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

/// Answers any path no route matched (e.g. `/a/b`) like an unknown code.
pub async fn unmatched_path_handler(uri: Uri) -> AppError {
    AppError::not_found(uri.path().trim_start_matches('/'))
}
