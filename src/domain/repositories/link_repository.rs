//! Repository trait for short link storage.

use crate::domain::entities::UrlEntry;
use crate::error::AppError;
use async_trait::async_trait;

/// Storage interface for URL entries, keyed by short code.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - process-local table
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Stores `entry` unless its code is already taken.
    ///
    /// The existence check and the write are a single atomic step.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the code already exists. The stored
    /// entry is left untouched.
    async fn insert_if_absent(&self, entry: UrlEntry) -> Result<UrlEntry, AppError>;

    /// Finds an entry by its short code.
    async fn find_by_code(&self, code: &str) -> Result<Option<UrlEntry>, AppError>;

    /// Returns true if the code is taken.
    async fn exists(&self, code: &str) -> Result<bool, AppError>;

    /// Lists every entry in insertion order.
    async fn list_all(&self) -> Result<Vec<UrlEntry>, AppError>;

    /// Number of stored entries.
    async fn count(&self) -> Result<usize, AppError>;
}
