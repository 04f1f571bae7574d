//! Utility functions shared across the application.
//!
//! - [`id_generator`] - Short identifier generation
//! - [`extract_host`] - Host extraction from HTTP headers

pub mod extract_host;
pub mod id_generator;
