//! Link creation and retrieval service.

use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use crate::domain::entities::UrlEntry;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use crate::utils::validity::compute_expiry;

/// Attempts at finding a free generated code before giving up.
pub const MAX_GENERATION_ATTEMPTS: usize = 10;

/// Service for creating and retrieving shortened links.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
    base_url: String,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    ///
    /// `base_url` is the public prefix of every short link, e.g.
    /// `http://localhost:8080`. A trailing slash is ignored.
    pub fn new(link_repository: Arc<L>, base_url: impl Into<String>) -> Self {
        Self {
            link_repository,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Creates a short link.
    ///
    /// # Arguments
    ///
    /// - `original_url` - Target URL, stored verbatim
    /// - `custom_code` - Code to use instead of a generated one
    /// - `validity_minutes` - Lifetime as coerced by
    ///   [`crate::utils::validity::coerce_minutes`]
    ///
    /// # Code Generation
    ///
    /// Without a custom code, random base-36 codes are drawn until a free one
    /// is found, up to [`MAX_GENERATION_ATTEMPTS`] times.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the custom code already exists.
    /// Returns [`AppError::CodeSpaceExhausted`] if every generated code collided.
    pub async fn create_short_link(
        &self,
        original_url: String,
        custom_code: Option<String>,
        validity_minutes: f64,
    ) -> Result<UrlEntry, AppError> {
        let created_at = Utc::now();
        let expiry = compute_expiry(created_at, validity_minutes);

        if let Some(code) = custom_code {
            let entry = UrlEntry::new(code, original_url, created_at, expiry);
            return self.link_repository.insert_if_absent(entry).await;
        }

        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            let code = generate_code();

            if self.link_repository.exists(&code).await? {
                debug!(attempt, code, "Generated code collided");
                continue;
            }

            let entry = UrlEntry::new(code, original_url.clone(), created_at, expiry);
            match self.link_repository.insert_if_absent(entry).await {
                Ok(entry) => return Ok(entry),
                // Taken between the check and the insert.
                Err(AppError::Conflict(_)) => continue,
                Err(e) => return Err(e),
            }
        }

        Err(AppError::CodeSpaceExhausted {
            attempts: MAX_GENERATION_ATTEMPTS,
        })
    }

    /// Retrieves a link by its short code.
    ///
    /// Expired links are still returned.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this code.
    pub async fn get_link_by_code(&self, code: &str) -> Result<UrlEntry, AppError> {
        self.link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Shortcode not found"))
    }

    /// Lists every link in creation order.
    pub async fn list_links(&self) -> Result<Vec<UrlEntry>, AppError> {
        self.link_repository.list_all().await
    }

    /// Number of stored links.
    pub async fn count_links(&self) -> Result<usize, AppError> {
        self.link_repository.count().await
    }

    /// Constructs the full short URL for a code.
    pub fn get_short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url, code)
    }
}
