#![allow(dead_code)]

use std::sync::Arc;
use tokio::sync::mpsc;

use miniurl::domain::entities::NewShortUrl;
use miniurl::domain::hit_event::HitEvent;
use miniurl::domain::repositories::MappingStore;
use miniurl::infrastructure::persistence::MemoryMappingStore;
use miniurl::state::AppState;

/// Builds an [`AppState`] over an in-memory store.
///
/// Returns the state, the hit event receiver (so tests can assert on
/// enqueued events), and the store itself (so tests can seed and inspect
/// records directly).
pub fn create_test_state(
    public_domain: Option<&str>,
) -> (
    AppState,
    mpsc::Receiver<HitEvent>,
    Arc<MemoryMappingStore>,
) {
    let store = Arc::new(MemoryMappingStore::new());
    let (tx, rx) = mpsc::channel(100);

    let state = AppState::new(
        store.clone(),
        tx,
        public_domain.map(|d| d.to_string()),
    );

    (state, rx, store)
}

/// Seeds a record directly into the store.
pub async fn create_test_record(store: &MemoryMappingStore, id: &str, url: &str) {
    store
        .create_if_absent(NewShortUrl::new(id.to_string(), url.to_string()))
        .await
        .unwrap();
}
