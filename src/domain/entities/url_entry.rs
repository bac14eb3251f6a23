//! URL entry entity representing one shortened-URL record.

use chrono::{DateTime, Utc};

/// A short code mapped to the URL it stands for.
///
/// Entries are immutable once stored. `expiry` is informational only: nothing
/// rejects or hides an entry after it passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlEntry {
    pub code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expiry: DateTime<Utc>,
}

impl UrlEntry {
    /// Creates a new entry.
    pub fn new(
        code: String,
        original_url: String,
        created_at: DateTime<Utc>,
        expiry: DateTime<Utc>,
    ) -> Self {
        Self {
            code,
            original_url,
            created_at,
            expiry,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_url_entry_creation() {
        let now = Utc::now();
        let entry = UrlEntry::new(
            "abc123".to_string(),
            "https://example.com".to_string(),
            now,
            now + Duration::minutes(30),
        );

        assert_eq!(entry.code, "abc123");
        assert_eq!(entry.original_url, "https://example.com");
        assert_eq!(entry.created_at, now);
        assert_eq!(entry.expiry - entry.created_at, Duration::minutes(30));
    }
}
