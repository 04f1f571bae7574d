//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization with camelCase wire fields.

pub mod shorten;
