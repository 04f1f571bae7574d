//! Short URL creation service.

use std::sync::Arc;

use serde_json::json;
use tracing::warn;

use crate::domain::entities::NewShortUrl;
use crate::domain::repositories::MappingStore;
use crate::error::AppError;
use crate::utils::id_generator::generate_id;

/// Service for creating short URLs.
///
/// Generates an identifier, persists the mapping via the store's conditional
/// insert, and composes the public short URL.
pub struct ShortenService {
    store: Arc<dyn MappingStore>,
    public_domain: Option<String>,
}

impl ShortenService {
    /// Creates a new shortening service.
    ///
    /// `public_domain` is the front-end domain presented in responses; when
    /// `None`, the inbound request's host is used instead.
    pub fn new(store: Arc<dyn MappingStore>, public_domain: Option<String>) -> Self {
        Self {
            store,
            public_domain,
        }
    }

    /// Creates a short URL for an already validated long URL.
    ///
    /// # Collision Policy
    ///
    /// Exactly one identifier is generated per request. If the conditional
    /// insert reports that the identifier already exists, the request fails
    /// with a generic internal error; there is no retry with a fresh
    /// identifier. With 4 bytes of randomness this is a known correctness
    /// gap at moderate scale, reproduced here deliberately.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if neither a public domain is
    /// configured nor a request host was supplied.
    /// Returns [`AppError::Internal`] on identifier collision or store errors.
    pub async fn create_short_url(
        &self,
        long_url: String,
        request_host: Option<String>,
    ) -> Result<String, AppError> {
        let domain = self
            .public_domain
            .clone()
            .or(request_host)
            .ok_or_else(|| AppError::bad_request("Missing Host header", json!({})))?;

        let id = generate_id();
        let new_record = NewShortUrl::new(id.clone(), long_url);

        match self.store.create_if_absent(new_record).await {
            Ok(()) => {}
            Err(AppError::Conflict { message, details }) => {
                warn!(%id, %details, "identifier collision, failing request: {message}");
                return Err(AppError::internal(
                    "Identifier collision",
                    json!({ "id": id }),
                ));
            }
            Err(e) => return Err(e),
        }

        Ok(self.short_url(&domain, &id))
    }

    /// Constructs the full short URL from a domain and identifier.
    ///
    /// Always uses HTTPS protocol.
    fn short_url(&self, domain: &str, id: &str) -> String {
        format!("https://{}/{}", domain.trim_end_matches('/'), id)
    }
}
