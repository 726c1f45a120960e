//! Handler for link shortening endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates (or reuses) the short link for a URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/page" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "shortUrl": "http://localhost:5000/aB3xY9",
///   "originalUrl": "https://example.com/page",
///   "shortCode": "aB3xY9",
///   "createdAt": "2025-01-01T12:00:00.000Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is malformed or the URL is invalid.
/// Returns 500 if no unique code could be generated.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let mapping = state.shortener.shorten(&payload.url).await?;
    let short_url = state.shortener.short_url(&mapping.short_code);

    Ok(Json(ShortenResponse::from_mapping(&mapping, short_url)))
}
