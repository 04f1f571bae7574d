//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating store calls,
//! identifier generation, and response composition. Services consume the
//! [`crate::domain::repositories::MappingStore`] trait and provide a clean
//! API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::shorten_service::ShortenService`] - Short URL creation
//! - [`services::redirect_service::RedirectService`] - Identifier resolution

pub mod services;
