//! API route configuration.

use crate::api::handlers::{shorten_handler, statistics_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Link management routes.
///
/// # Endpoints
///
/// - `POST /shorten`    - Create a short link
/// - `GET  /statistics` - List every link with its statistics
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/statistics", get(statistics_handler))
}
