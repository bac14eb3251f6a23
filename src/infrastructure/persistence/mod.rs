//! Link repository implementations.
//!
//! - [`InMemoryLinkRepository`] - insertion-ordered table held in process memory.
//!   Contents are lost on restart.

pub mod in_memory_link_repository;

pub use in_memory_link_repository::InMemoryLinkRepository;
