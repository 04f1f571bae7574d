//! Host extraction from HTTP request headers.

use crate::error::AppError;
use axum::http::{HeaderMap, header};

/// Extracts the host from HTTP request headers.
///
/// Returns the `Host` header value as-is, including any port, since it is
/// used verbatim to compose short URLs (e.g. `https://localhost:3000/<id>`).
///
/// # Errors
///
/// Returns [`AppError::Validation`] if:
/// - The `Host` header is missing
/// - The header value contains invalid UTF-8
pub fn host_from_headers(headers: &HeaderMap) -> Result<String, AppError> {
    let host = headers
        .get(header::HOST)
        .ok_or_else(|| AppError::bad_request("Missing Host header", serde_json::json!({})))?
        .to_str()
        .map_err(|_| AppError::bad_request("Invalid Host header", serde_json::json!({})))?;

    Ok(host.to_string())
}
