//! Infrastructure layer for storage and external integrations.
//!
//! # Modules
//!
//! - [`persistence`] - Process-local link storage
//! - [`remote_log`] - Shipping log events to the remote collector

pub mod persistence;
pub mod remote_log;
