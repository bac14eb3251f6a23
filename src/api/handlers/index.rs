//! Handler for the service root.

/// Plain-text banner confirming the service is up.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler() -> &'static str {
    "URL shortener is running"
}
