//! Short URL record entity.

use chrono::{DateTime, Utc};

/// A stored mapping from a short identifier to a long URL.
///
/// `expire_at` is reserved in the schema for future TTL support and is never
/// populated by current logic.
#[derive(Debug, Clone)]
pub struct ShortUrlRecord {
    pub id: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
    pub hit_count: i64,
    pub expire_at: Option<DateTime<Utc>>,
}

/// Input data for creating a new short URL record.
///
/// `hit_count` always starts at zero and is therefore not part of the input.
#[derive(Debug, Clone)]
pub struct NewShortUrl {
    pub id: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
}

impl NewShortUrl {
    /// Creates a new record input with `created_at` set to the current time.
    pub fn new(id: String, long_url: String) -> Self {
        Self {
            id,
            long_url,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_short_url_sets_creation_time() {
        let before = Utc::now();
        let record = NewShortUrl::new("abc123".to_string(), "https://example.com".to_string());
        let after = Utc::now();

        assert_eq!(record.id, "abc123");
        assert_eq!(record.long_url, "https://example.com");
        assert!(record.created_at >= before && record.created_at <= after);
    }

    #[test]
    fn test_record_clone_preserves_fields() {
        let record = ShortUrlRecord {
            id: "xyz789".to_string(),
            long_url: "https://rust-lang.org".to_string(),
            created_at: Utc::now(),
            hit_count: 7,
            expire_at: None,
        };

        let copy = record.clone();
        assert_eq!(copy.id, record.id);
        assert_eq!(copy.hit_count, 7);
        assert!(copy.expire_at.is_none());
    }
}
