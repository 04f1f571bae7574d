//! Mapping store implementations.
//!
//! Concrete implementations of [`crate::domain::repositories::MappingStore`]:
//!
//! - [`PgMappingStore`] - PostgreSQL-backed store used in production
//! - [`MemoryMappingStore`] - in-memory store for tests and local experiments

pub mod memory_mapping_store;
pub mod pg_mapping_store;

pub use memory_mapping_store::MemoryMappingStore;
pub use pg_mapping_store::PgMappingStore;
