//! Shared application state injected into all handlers.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::application::services::{RedirectService, ShortenService};
use crate::domain::hit_event::HitEvent;
use crate::domain::repositories::MappingStore;

/// Application state shared across request handlers.
///
/// The store client is injected once here rather than held as process-wide
/// mutable state, which keeps handlers stateless and lets tests substitute
/// an in-memory store.
#[derive(Clone)]
pub struct AppState {
    pub shorten_service: Arc<ShortenService>,
    pub redirect_service: Arc<RedirectService>,
}

impl AppState {
    /// Wires the services around a mapping store and hit event channel.
    pub fn new(
        store: Arc<dyn MappingStore>,
        hit_tx: mpsc::Sender<HitEvent>,
        public_domain: Option<String>,
    ) -> Self {
        Self {
            shorten_service: Arc::new(ShortenService::new(store.clone(), public_domain)),
            redirect_service: Arc::new(RedirectService::new(store, hit_tx)),
        }
    }
}
