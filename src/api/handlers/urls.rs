//! Handler for listing stored mappings.

use axum::{Json, extract::State};

use crate::api::dto::urls::UrlListItem;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every stored mapping, newest first.
///
/// # Endpoint
///
/// `GET /api/urls`
///
/// No pagination: callers truncate for display.
pub async fn list_urls_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<UrlListItem>>, AppError> {
    let mappings = state.shortener.list_recent().await?;

    let items = mappings
        .iter()
        .map(|m| UrlListItem::from_mapping(m, state.shortener.short_url(&m.short_code)))
        .collect();

    Ok(Json(items))
}
