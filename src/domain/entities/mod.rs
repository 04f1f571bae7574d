//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic. Creation inputs
//! use a separate struct (`NewShortUrl`) so stored fields like `hit_count`
//! cannot be supplied by callers.

pub mod short_url;

pub use short_url::{NewShortUrl, ShortUrlRecord};
