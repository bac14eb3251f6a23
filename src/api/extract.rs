//! Lenient request body extraction.
//!
//! [`ShortenPayload`] never rejects a request. A body that cannot be read as
//! a JSON object or url-encoded form becomes an empty [`ShortenRequest`], so
//! the handler answers with its own validation error instead of an extractor
//! rejection.

use std::collections::HashMap;
use std::convert::Infallible;

use axum::{
    Form,
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
};
use serde_json::Value;
use tracing::debug;

use crate::api::dto::shorten::ShortenRequest;

/// Shorten request read from a JSON or `application/x-www-form-urlencoded` body.
#[derive(Debug)]
pub struct ShortenPayload(pub ShortenRequest);

impl<S> FromRequest<S> for ShortenPayload
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_form(&req) {
            let fields = match Form::<HashMap<String, String>>::from_request(req, state).await {
                Ok(Form(fields)) => fields,
                Err(e) => {
                    debug!(error = %e, "Unreadable form body");
                    HashMap::new()
                }
            };
            return Ok(Self(ShortenRequest::from_form(fields)));
        }

        let body = match Bytes::from_request(req, state).await {
            Ok(body) => body,
            Err(e) => {
                debug!(error = %e, "Unreadable request body");
                Bytes::new()
            }
        };

        Ok(Self(parse_json_object(&body)))
    }
}

fn is_form(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"))
}

/// Parses `body` as a JSON object. Anything else yields an empty request.
fn parse_json_object(body: &[u8]) -> ShortenRequest {
    match serde_json::from_slice::<Value>(body) {
        Ok(value @ Value::Object(_)) => serde_json::from_value(value).unwrap_or_default(),
        Ok(_) => ShortenRequest::default(),
        Err(e) => {
            if !body.is_empty() {
                debug!(error = %e, "Request body is not valid JSON");
            }
            ShortenRequest::default()
        }
    }
}
