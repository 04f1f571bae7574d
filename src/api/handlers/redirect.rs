//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects an identifier to its original URL.
///
/// # Endpoint
///
/// `GET /{id}` - the entire remaining path is treated as the identifier.
///
/// # Request Flow
///
/// 1. Look up the identifier in the mapping store
/// 2. Enqueue a hit event for async counting (never awaited)
/// 3. Return `301 Moved Permanently` with the stored URL
///
/// The response carries `Cache-Control: max-age=3600` so intermediaries may
/// cache the redirect for an hour, reducing load on repeated access.
///
/// # Errors
///
/// Returns 404 if the identifier doesn't exist.
/// Returns 500 on store failure.
pub async fn redirect_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let long_url = state.redirect_service.resolve(&id).await?;

    Ok((
        StatusCode::MOVED_PERMANENTLY,
        [
            (header::LOCATION, long_url),
            (header::CACHE_CONTROL, "max-age=3600".to_string()),
        ],
    ))
}
