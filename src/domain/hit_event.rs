//! Hit event model for asynchronous hit counting.

/// An in-memory representation of a redirect hit for async processing.
///
/// Used to pass the resolved identifier from the redirect handler to the
/// background worker via a channel. This decouples the redirect response from
/// the counter update, so redirect latency is independent of store latency.
///
/// # Delivery Semantics
///
/// Best-effort, at most once per redirect attempt. Enqueueing never blocks
/// and a full queue drops the event; there is no compensating mechanism for
/// lost increments.
#[derive(Debug, Clone)]
pub struct HitEvent {
    pub id: String,
}

impl HitEvent {
    /// Creates a new hit event for the given identifier.
    pub fn new(id: String) -> Self {
        Self { id }
    }
}
