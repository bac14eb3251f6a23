//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::domain::log_event::{Level, Package};
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Responds with 307 Temporary Redirect. Expiry is not checked: expired links
/// still redirect. Clicks are not recorded.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
/// Returns 500 if the stored URL contains characters that cannot appear in a
/// `Location` header.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let link = match state.link_service.get_link_by_code(&code).await {
        Ok(link) => link,
        Err(err) => {
            state.log(Level::Warn, Package::Handler, err.to_string()).await;
            return Err(err);
        }
    };

    // Stored URLs are unvalidated; control characters cannot go in a header.
    let Ok(location) = HeaderValue::from_bytes(link.original_url.as_bytes()) else {
        state
            .log(
                Level::Error,
                Package::Handler,
                format!("Stored URL for {code} is not a valid redirect target"),
            )
            .await;
        return Err(AppError::internal("Stored URL is not a valid redirect target"));
    };

    state
        .log(Level::Info, Package::Handler, format!("Redirected {code}"))
        .await;

    Ok((StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, location)]).into_response())
}
