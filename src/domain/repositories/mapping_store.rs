//! Repository trait for the identifier → long URL mapping store.

use crate::domain::entities::{NewShortUrl, ShortUrlRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Key-value store interface for short URL mappings.
///
/// All cross-request coordination goes through the two atomic operations
/// below; callers never hold locks or transactions of their own.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMappingStore`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryMappingStore`] - in-memory store for tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingStore: Send + Sync {
    /// Inserts a new record only if the identifier is not already present.
    ///
    /// This is a single atomic conditional insert, not a read-then-write, so
    /// two concurrent shortening requests that draw the same identifier
    /// cannot both succeed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the identifier already exists.
    /// Returns [`AppError::Internal`] on store errors.
    async fn create_if_absent(&self, new_record: NewShortUrl) -> Result<(), AppError>;

    /// Looks up a record by its identifier.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(record))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn get(&self, id: &str) -> Result<Option<ShortUrlRecord>, AppError>;

    /// Atomically adds 1 to the record's hit counter.
    ///
    /// A single atomic add, never a read-modify-write of the whole record, so
    /// concurrent increments from simultaneous redirects never lose updates.
    ///
    /// Returns `Ok(true)` if a record was updated, `Ok(false)` if the
    /// identifier is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn increment_hit_count(&self, id: &str) -> Result<bool, AppError>;
}
