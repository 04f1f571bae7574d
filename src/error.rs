//! Central application error type and HTTP mapping.
//!
//! Clients always receive a flat `{"error": "<message>"}` body. Internal
//! errors additionally carry a `details` value that is logged but never
//! serialized into the response.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Application error taxonomy.
///
/// - `Validation` - malformed input, always a 400 with a specific message
/// - `NotFound` - unknown identifier, 404, terminal
/// - `Conflict` - conditional insert hit an existing identifier
/// - `Internal` - store or other unexpected failure, 500 with a generic
///   message; the real cause stays in the logs
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Conflict { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation { message, details } => {
                tracing::debug!(%details, "request validation failed: {message}");
                (StatusCode::BAD_REQUEST, message)
            }
            AppError::NotFound { message, details } => {
                tracing::debug!(%details, "resource not found: {message}");
                (StatusCode::NOT_FOUND, message)
            }
            AppError::Conflict { message, details } => {
                tracing::warn!(%details, "conflict: {message}");
                (StatusCode::CONFLICT, message)
            }
            AppError::Internal { message, details } => {
                tracing::error!(%details, "internal error: {message}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = ErrorBody { error: message };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": db.constraint() }),
            );
        }

        AppError::internal("Database error", json!({ "source": e.to_string() }))
    }
}
