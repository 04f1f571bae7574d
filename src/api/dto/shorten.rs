//! DTOs for the shortening endpoint.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::error::AppError;

/// Request to shorten a long URL.
///
/// `longUrl` is deserialized as a raw JSON value so a missing field and a
/// non-string field can be rejected at the boundary with the same specific
/// message instead of a generic deserialization error.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    #[serde(default)]
    pub long_url: Option<Value>,
}

impl ShortenRequest {
    /// Parses a raw request body into a `ShortenRequest`.
    ///
    /// An absent body is treated as an empty JSON object, so it fails
    /// validation with the same message as an explicit `{}` payload.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when the body is not valid JSON.
    pub fn from_body(body: &[u8]) -> Result<Self, AppError> {
        if body.is_empty() {
            return Ok(Self { long_url: None });
        }

        serde_json::from_slice(body).map_err(|e| {
            AppError::bad_request(
                "Missing or invalid longUrl",
                json!({ "parse_error": e.to_string() }),
            )
        })
    }

    /// Validates the payload and returns the long URL.
    ///
    /// Checks, in order: the field is present and string-typed, then the
    /// value starts with `http://` or `https://`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] with a descriptive message on any
    /// violation; no record is created in that case.
    pub fn validated_long_url(self) -> Result<String, AppError> {
        let long_url = match self.long_url {
            Some(Value::String(s)) => s,
            _ => {
                return Err(AppError::bad_request("Missing or invalid longUrl", json!({})));
            }
        };

        if !long_url.starts_with("http://") && !long_url.starts_with("https://") {
            return Err(AppError::bad_request(
                "URL must start with http:// or https://",
                json!({ "longUrl": long_url }),
            ));
        }

        Ok(long_url)
    }
}

/// Response containing the composed short URL.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub short_url: String,
}
