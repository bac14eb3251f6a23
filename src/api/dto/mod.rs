//! Data Transfer Objects for API requests and responses.
//!
//! Field names on the wire are camelCase. Timestamps are serialized with
//! [`crate::utils::timestamp`].

pub mod health;
pub mod shorten;
pub mod statistics;
