//! Fallback handler for unroutable requests.

use serde_json::json;

use crate::error::AppError;

/// Rejects any method/path combination outside the service contract.
///
/// Covers unrecognized methods, `GET` on the shortening path, and paths the
/// router cannot dispatch. Always responds `400 {"error": "Bad request"}`.
pub async fn bad_request_handler() -> AppError {
    AppError::bad_request("Bad request", json!({}))
}
