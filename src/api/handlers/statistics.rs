//! Handler for the statistics endpoint.

use axum::{Json, extract::State};

use crate::api::dto::statistics::UrlStatistics;
use crate::domain::log_event::{Level, Package};
use crate::error::AppError;
use crate::state::AppState;

/// Lists every short link with its statistics, in creation order.
///
/// # Endpoint
///
/// `GET /statistics`
///
/// # Response
///
/// ```json
/// [
///   {
///     "shortcode": "abc1",
///     "shortLink": "http://localhost:8080/abc1",
///     "originalUrl": "https://example.com",
///     "createdAt": "2024-01-15T10:30:00.000Z",
///     "expiresAt": "2024-01-15T11:00:00.000Z",
///     "totalClicks": 0,
///     "clickData": []
///   }
/// ]
/// ```
///
/// Expired links are included. Click counts are always zero.
pub async fn statistics_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<UrlStatistics>>, AppError> {
    let links = state.link_service.list_links().await?;

    let items = links
        .into_iter()
        .map(|link| UrlStatistics {
            short_link: state.link_service.get_short_url(&link.code),
            shortcode: link.code,
            original_url: link.original_url,
            created_at: link.created_at,
            expires_at: link.expiry,
            total_clicks: 0,
            click_data: Vec::new(),
        })
        .collect();

    state
        .log(Level::Info, Package::Controller, "Fetched statistics")
        .await;

    Ok(Json(items))
}
