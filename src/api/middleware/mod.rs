//! HTTP middleware for request processing.
//!
//! Provides observability and cross-origin access.

pub mod cors;
pub mod tracing;
