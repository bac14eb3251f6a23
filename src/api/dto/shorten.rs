//! DTOs for link shortening endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::utils::validity::coerce_minutes;

/// Request to shorten a URL.
///
/// Fields are kept as raw JSON values so that wrongly typed input reaches the
/// handler instead of failing deserialization: a non-string `originalUrl` is
/// a 400 with a fixed message, a non-string `shortcode` means "generate one".
#[derive(Debug, Default, Deserialize)]
pub struct ShortenRequest {
    #[serde(rename = "originalUrl", default)]
    pub original_url: Option<Value>,

    #[serde(default)]
    pub validity: Option<Value>,

    #[serde(default)]
    pub shortcode: Option<Value>,
}

impl ShortenRequest {
    /// Builds a request from url-encoded form fields.
    pub fn from_form(mut fields: HashMap<String, String>) -> Self {
        Self {
            original_url: fields.remove("originalUrl").map(Value::String),
            validity: fields.remove("validity").map(Value::String),
            shortcode: fields.remove("shortcode").map(Value::String),
        }
    }

    /// The target URL, if present as a non-empty string.
    pub fn original_url(&self) -> Option<&str> {
        non_empty_str(self.original_url.as_ref())
    }

    /// The requested custom code, if present as a non-empty string.
    pub fn custom_code(&self) -> Option<&str> {
        non_empty_str(self.shortcode.as_ref())
    }

    /// Requested lifetime in minutes; NaN when unusable.
    pub fn validity_minutes(&self) -> f64 {
        coerce_minutes(self.validity.as_ref())
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s.as_str()),
        _ => None,
    }
}

/// Successful shortening result.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub short_link: String,

    #[serde(serialize_with = "crate::utils::timestamp::serialize")]
    pub expiry: DateTime<Utc>,
}
