//! Core domain entities.
//!
//! - [`UrlEntry`] - A short code mapped to its original URL

pub mod url_entry;

pub use url_entry::UrlEntry;
