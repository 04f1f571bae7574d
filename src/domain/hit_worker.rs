//! Background worker draining the hit event queue.

use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{error, warn};

use crate::domain::hit_event::HitEvent;
use crate::domain::repositories::MappingStore;

/// Processes hit events until the channel is closed.
///
/// Each event becomes one atomic counter increment against the store. The
/// increment's outcome never reaches the redirect path: a failed update or an
/// unknown identifier is logged and the event is discarded. This is the
/// intentional weak-consistency half of the redirect flow, not an oversight.
pub async fn run_hit_worker(mut rx: mpsc::Receiver<HitEvent>, store: Arc<dyn MappingStore>) {
    while let Some(event) = rx.recv().await {
        match store.increment_hit_count(&event.id).await {
            Ok(true) => {}
            Ok(false) => {
                warn!(id = %event.id, "hit count update skipped: identifier not found");
            }
            Err(e) => {
                error!(id = %event.id, error = %e, "failed to update hit count");
            }
        }
    }
}
