//! PostgreSQL implementation of the mapping store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;

use crate::domain::entities::{NewShortUrl, ShortUrlRecord};
use crate::domain::repositories::MappingStore;
use crate::error::AppError;

/// Row shape for the short URL table.
#[derive(sqlx::FromRow)]
struct ShortUrlRow {
    id: String,
    long_url: String,
    created_at: DateTime<Utc>,
    hit_count: i64,
    expire_at: Option<DateTime<Utc>>,
}

impl From<ShortUrlRow> for ShortUrlRecord {
    fn from(row: ShortUrlRow) -> Self {
        Self {
            id: row.id,
            long_url: row.long_url,
            created_at: row.created_at,
            hit_count: row.hit_count,
            expire_at: row.expire_at,
        }
    }
}

/// PostgreSQL store for short URL mappings.
///
/// The table name is configurable, so queries are prepared as runtime
/// strings at construction; all values are still bound as parameters. The
/// table name itself is validated by [`crate::config::Config`] before it
/// reaches this type.
pub struct PgMappingStore {
    pool: PgPool,
    insert_sql: String,
    select_sql: String,
    increment_sql: String,
}

impl PgMappingStore {
    /// Creates a new store backed by the given pool and table.
    pub fn new(pool: PgPool, table: &str) -> Self {
        Self {
            pool,
            insert_sql: format!(
                "INSERT INTO {table} (id, long_url, created_at, hit_count) \
                 VALUES ($1, $2, $3, 0) ON CONFLICT (id) DO NOTHING"
            ),
            select_sql: format!(
                "SELECT id, long_url, created_at, hit_count, expire_at \
                 FROM {table} WHERE id = $1"
            ),
            increment_sql: format!(
                "UPDATE {table} SET hit_count = hit_count + 1 WHERE id = $1"
            ),
        }
    }
}

#[async_trait]
impl MappingStore for PgMappingStore {
    async fn create_if_absent(&self, new_record: NewShortUrl) -> Result<(), AppError> {
        let result = sqlx::query(&self.insert_sql)
            .bind(&new_record.id)
            .bind(&new_record.long_url)
            .bind(new_record.created_at)
            .execute(&self.pool)
            .await?;

        // ON CONFLICT DO NOTHING reports zero affected rows on a duplicate.
        if result.rows_affected() == 0 {
            return Err(AppError::conflict(
                "Identifier already exists",
                json!({ "id": new_record.id }),
            ));
        }

        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<ShortUrlRecord>, AppError> {
        let row = sqlx::query_as::<_, ShortUrlRow>(&self.select_sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(ShortUrlRecord::from))
    }

    async fn increment_hit_count(&self, id: &str) -> Result<bool, AppError> {
        let result = sqlx::query(&self.increment_sql)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
