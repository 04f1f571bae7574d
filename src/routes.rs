//! Router configuration.
//!
//! # Dispatch Rules (evaluated in order)
//!
//! - `POST /url`       - Create a short URL
//! - `GET  /{id}`      - Redirect; the entire remaining path is the identifier
//! - anything else     - `400 {"error": "Bad request"}`, including `GET /url`
//!   and unrecognized methods

use axum::{Router, routing::get, routing::post};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use crate::api::handlers::{bad_request_handler, redirect_handler, shorten_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;

/// Constructs the service routes with the dispatch rules above.
///
/// Kept separate from [`app_router`] so tests can drive the router without
/// the outer middleware stack.
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/url", post(shorten_handler).fallback(bad_request_handler))
        .route(
            "/{*id}",
            get(redirect_handler).fallback(bad_request_handler),
        )
        .fallback(bad_request_handler)
        .with_state(state)
}

/// Constructs the full application router with middleware.
///
/// Adds request tracing and trailing-slash normalization around [`routes`].
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(routes(state).layer(tracing::layer()))
}
