//! In-memory implementation of link repository.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::UrlEntry;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Entries in insertion order plus a code → position index.
#[derive(Debug, Default)]
struct Table {
    entries: Vec<UrlEntry>,
    index: HashMap<String, usize>,
}

/// Process-local link storage.
///
/// Each instance is an independent table; the server owns exactly one through
/// [`crate::state::AppState`]. Entries are never updated or removed.
#[derive(Debug, Default)]
pub struct InMemoryLinkRepository {
    table: RwLock<Table>,
}

impl InMemoryLinkRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn insert_if_absent(&self, entry: UrlEntry) -> Result<UrlEntry, AppError> {
        let mut table = self.table.write().await;

        if table.index.contains_key(&entry.code) {
            return Err(AppError::conflict("Shortcode already exists"));
        }

        let position = table.entries.len();
        table.index.insert(entry.code.clone(), position);
        table.entries.push(entry.clone());

        Ok(entry)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<UrlEntry>, AppError> {
        let table = self.table.read().await;

        Ok(table
            .index
            .get(code)
            .and_then(|&position| table.entries.get(position))
            .cloned())
    }

    async fn exists(&self, code: &str) -> Result<bool, AppError> {
        Ok(self.table.read().await.index.contains_key(code))
    }

    async fn list_all(&self) -> Result<Vec<UrlEntry>, AppError> {
        Ok(self.table.read().await.entries.clone())
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.table.read().await.entries.len())
    }
}
