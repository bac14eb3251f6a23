//! Handler for link shortening endpoint.

use axum::{Json, extract::State};

use crate::api::dto::shorten::ShortenResponse;
use crate::api::extract::ShortenPayload;
use crate::domain::log_event::{Level, Package};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// JSON or url-encoded form:
///
/// ```json
/// {
///   "originalUrl": "https://example.com",
///   "validity": 30,        // optional, minutes
///   "shortcode": "abc1"    // optional
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "shortLink": "http://localhost:8080/abc1",
///   "expiry": "2024-01-15T11:00:00.000Z"
/// }
/// ```
///
/// # Logging
///
/// Exactly one remote log event per request, sent before the response:
/// error on invalid input, warn on conflict, info on success.
///
/// # Errors
///
/// - 400 `originalUrl is required` if `originalUrl` is missing, empty, or not a string
/// - 409 `Shortcode already exists` if the code is taken
/// - 500 if no free generated code was found
pub async fn shorten_handler(
    State(state): State<AppState>,
    ShortenPayload(payload): ShortenPayload,
) -> Result<Json<ShortenResponse>, AppError> {
    let Some(original_url) = payload.original_url() else {
        state
            .log(Level::Error, Package::Controller, "Missing or invalid originalUrl")
            .await;
        return Err(AppError::bad_request("originalUrl is required"));
    };

    let result = state
        .link_service
        .create_short_link(
            original_url.to_string(),
            payload.custom_code().map(str::to_string),
            payload.validity_minutes(),
        )
        .await;

    match result {
        Ok(link) => {
            state
                .log(
                    Level::Info,
                    Package::Controller,
                    format!("Shortened URL: {} -> {}", link.original_url, link.code),
                )
                .await;

            Ok(Json(ShortenResponse {
                short_link: state.link_service.get_short_url(&link.code),
                expiry: link.expiry,
            }))
        }
        Err(err) => {
            let level = match &err {
                AppError::Conflict(_) => Level::Warn,
                _ => Level::Error,
            };
            state.log(level, Package::Controller, err.to_string()).await;
            Err(err)
        }
    }
}
