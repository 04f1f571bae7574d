//! Short URL resolution service.

use std::sync::Arc;

use serde_json::json;
use tokio::sync::mpsc;
use tracing::warn;

use crate::domain::hit_event::HitEvent;
use crate::domain::repositories::MappingStore;
use crate::error::AppError;

/// Service for resolving identifiers back to long URLs.
///
/// Every successful resolution enqueues a best-effort hit event; the
/// redirect never waits for the counter update.
pub struct RedirectService {
    store: Arc<dyn MappingStore>,
    hit_tx: mpsc::Sender<HitEvent>,
}

impl RedirectService {
    /// Creates a new redirect service.
    pub fn new(store: Arc<dyn MappingStore>, hit_tx: mpsc::Sender<HitEvent>) -> Self {
        Self { store, hit_tx }
    }

    /// Resolves an identifier to its stored long URL.
    ///
    /// On success a [`HitEvent`] is enqueued without blocking; a full queue
    /// drops the event. The enqueue outcome never affects the returned URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the identifier is unknown.
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn resolve(&self, id: &str) -> Result<String, AppError> {
        let record = self
            .store
            .get(id)
            .await?
            .ok_or_else(|| AppError::not_found("URL not found", json!({ "id": id })))?;

        if self.hit_tx.try_send(HitEvent::new(record.id)).is_err() {
            warn!(%id, "hit queue full, dropping event");
        }

        Ok(record.long_url)
    }
}
