//! Domain layer containing business entities and logic.
//!
//! Defines entities, repository interfaces, and the asynchronous hit counting
//! pipeline, independent of infrastructure concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`hit_event`] - Hit tracking event model
//! - [`hit_worker`] - Asynchronous hit counting worker
//!
//! # Hit Counting Flow
//!
//! 1. HTTP handler receives redirect request
//! 2. [`hit_event::HitEvent`] is sent to an async channel (non-blocking)
//! 3. [`hit_worker::run_hit_worker`] drains the channel
//! 4. The counter is incremented via [`repositories::MappingStore`]

pub mod entities;
pub mod hit_event;
pub mod hit_worker;
pub mod repositories;
