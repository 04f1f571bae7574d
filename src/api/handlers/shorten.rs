//! Handler for the URL shortening endpoint.

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::extract_host::host_from_headers;

/// Creates a shortened URL for a long URL.
///
/// # Endpoint
///
/// `POST /url`
///
/// # Request Body
///
/// ```json
/// { "longUrl": "https://example.com/page" }
/// ```
///
/// # Response
///
/// `201 Created` with `{"shortUrl": "https://<domain>/<id>"}` and caching
/// disabled, since a freshly created mapping must not be cached by
/// intermediaries or clients.
///
/// # Errors
///
/// Returns 400 for an absent or unparseable body and for a missing,
/// non-string, or scheme-invalid `longUrl`. Returns 500 on store failure or
/// identifier collision.
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    // The body is taken raw so that an absent payload and a wrong
    // Content-Type still get the documented error body instead of an
    // extractor rejection.
    let long_url = ShortenRequest::from_body(&body)?.validated_long_url()?;

    // Fallback domain when no public domain is configured.
    let request_host = host_from_headers(&headers).ok();

    let short_url = state
        .shorten_service
        .create_short_url(long_url, request_host)
        .await?;

    Ok((
        StatusCode::CREATED,
        [(header::CACHE_CONTROL, "no-cache, no-store, must-revalidate")],
        Json(ShortenResponse { short_url }),
    ))
}
