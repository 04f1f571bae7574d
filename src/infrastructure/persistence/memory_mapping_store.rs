//! In-memory implementation of the mapping store.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;

use crate::domain::entities::{NewShortUrl, ShortUrlRecord};
use crate::domain::repositories::MappingStore;
use crate::error::AppError;

/// In-memory store for short URL mappings.
///
/// Mirrors the atomicity semantics of the PostgreSQL store under a single
/// mutex: conditional insert and counter increment each happen under one
/// lock acquisition. Intended for tests and local experiments; nothing is
/// persisted across restarts.
#[derive(Default)]
pub struct MemoryMappingStore {
    records: Mutex<HashMap<String, ShortUrlRecord>>,
}

impl MemoryMappingStore {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored records.
    pub fn len(&self) -> usize {
        self.records
            .lock()
            .expect("mapping store lock poisoned")
            .len()
    }

    /// Returns true if no records are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl MappingStore for MemoryMappingStore {
    async fn create_if_absent(&self, new_record: NewShortUrl) -> Result<(), AppError> {
        let mut records = self.records.lock().expect("mapping store lock poisoned");

        if records.contains_key(&new_record.id) {
            return Err(AppError::conflict(
                "Identifier already exists",
                json!({ "id": new_record.id }),
            ));
        }

        records.insert(
            new_record.id.clone(),
            ShortUrlRecord {
                id: new_record.id,
                long_url: new_record.long_url,
                created_at: new_record.created_at,
                hit_count: 0,
                expire_at: None,
            },
        );

        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<ShortUrlRecord>, AppError> {
        let records = self.records.lock().expect("mapping store lock poisoned");

        Ok(records.get(id).cloned())
    }

    async fn increment_hit_count(&self, id: &str) -> Result<bool, AppError> {
        let mut records = self.records.lock().expect("mapping store lock poisoned");

        match records.get_mut(id) {
            Some(record) => {
                record.hit_count += 1;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
