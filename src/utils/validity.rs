//! Coercion of the loosely typed `validity` field into an expiry timestamp.
//!
//! Clients send `validity` as a number, a numeric string, or not at all.
//! Values are coerced the way loose numeric conversion works in most web
//! clients:
//!
//! | Input | Minutes |
//! |---|---|
//! | `10`, `1.5`, `-5` | as given |
//! | `"10"`, `" 10 "`, `"1e1"` | parsed |
//! | `""`, `null`, `false` | 0 |
//! | `true` | 1 |
//! | missing, arrays, objects, `"abc"` | NaN |
//!
//! Zero, NaN, infinities and offsets that overflow the timestamp range all
//! fall back to [`DEFAULT_VALIDITY_MINUTES`].

use chrono::{DateTime, TimeDelta, Utc};
use serde_json::Value;

/// Lifetime applied when `validity` is absent or unusable.
pub const DEFAULT_VALIDITY_MINUTES: i64 = 30;

/// Largest distance from the epoch, in milliseconds, accepted for an expiry.
const MAX_TIMESTAMP_MILLIS: i64 = 8_640_000_000_000_000;

/// Coerces a raw `validity` value into a number of minutes.
///
/// Returns NaN for values with no numeric reading.
pub fn coerce_minutes(value: Option<&Value>) -> f64 {
    match value {
        None => f64::NAN,
        Some(Value::Null) => 0.0,
        Some(Value::Bool(b)) => f64::from(u8::from(*b)),
        Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse::<f64>().unwrap_or(f64::NAN)
            }
        }
        Some(Value::Array(_)) | Some(Value::Object(_)) => f64::NAN,
    }
}

/// Computes the expiry for an entry created at `created_at` and living for
/// `minutes` (as returned by [`coerce_minutes`]).
pub fn compute_expiry(created_at: DateTime<Utc>, minutes: f64) -> DateTime<Utc> {
    offset_by_minutes(created_at, minutes)
        .unwrap_or_else(|| created_at + TimeDelta::minutes(DEFAULT_VALIDITY_MINUTES))
}

/// Adds `minutes` (fractional, possibly negative) to `created_at`.
///
/// Returns `None` when the offset is zero, not finite, or lands outside the
/// representable range. Sub-millisecond fractions are truncated toward zero.
fn offset_by_minutes(created_at: DateTime<Utc>, minutes: f64) -> Option<DateTime<Utc>> {
    if minutes == 0.0 || !minutes.is_finite() {
        return None;
    }

    let millis = (minutes * 60_000.0).trunc();
    if millis.abs() > MAX_TIMESTAMP_MILLIS as f64 {
        return None;
    }

    let expiry = created_at.checked_add_signed(TimeDelta::try_milliseconds(millis as i64)?)?;
    if expiry.timestamp_millis().abs() > MAX_TIMESTAMP_MILLIS {
        return None;
    }

    Some(expiry)
}
