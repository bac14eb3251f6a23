//! Utility functions shared across layers.
//!
//! - [`code_generator`] - Random short code generation
//! - [`timestamp`] - ISO 8601 timestamp formatting
//! - [`validity`] - Coercion of the `validity` request field into an expiry

pub mod code_generator;
pub mod timestamp;
pub mod validity;
