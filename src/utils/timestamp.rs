//! ISO 8601 timestamp formatting.
//!
//! Timestamps leave the service as UTC with millisecond precision and a `Z`
//! suffix, e.g. `2024-01-15T10:30:00.000Z`.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serializer;

/// Formats a timestamp as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
pub fn to_iso8601(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Serde `serialize_with` adapter for [`to_iso8601`].
pub fn serialize<S: Serializer>(timestamp: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&to_iso8601(timestamp))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_to_iso8601_millis_and_z_suffix() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        assert_eq!(to_iso8601(&ts), "2024-01-15T10:30:00.000Z");
    }

    #[test]
    fn test_to_iso8601_truncates_sub_millisecond() {
        let ts = Utc.timestamp_opt(1_700_000_000, 123_456_789).unwrap();
        assert_eq!(to_iso8601(&ts), "2023-11-14T22:13:20.123Z");
    }
}
