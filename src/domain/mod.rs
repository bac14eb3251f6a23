//! Domain layer containing business entities and contracts.
//!
//! Nothing in here knows about HTTP, the in-memory table, or the remote log
//! collector. Those live in [`crate::api`] and [`crate::infrastructure`].
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`log_event`] - Structured log events shipped to the remote collector

pub mod entities;
pub mod log_event;
pub mod repositories;
