//! HTTP API layer for request/response handling.
//!
//! Translates HTTP requests into domain operations and formats responses
//! according to the service contract.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request observability middleware

pub mod dto;
pub mod handlers;
pub mod middleware;
