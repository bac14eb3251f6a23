//! DTOs for the statistics endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Statistics for one short link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlStatistics {
    pub shortcode: String,
    pub short_link: String,
    pub original_url: String,

    #[serde(serialize_with = "crate::utils::timestamp::serialize")]
    pub created_at: DateTime<Utc>,

    #[serde(serialize_with = "crate::utils::timestamp::serialize")]
    pub expires_at: DateTime<Utc>,

    /// Always 0: clicks are not tracked.
    pub total_clicks: u64,

    /// Always empty: clicks are not tracked.
    pub click_data: Vec<ClickData>,
}

/// A single click record.
#[derive(Debug, Serialize)]
pub struct ClickData {
    #[serde(serialize_with = "crate::utils::timestamp::serialize")]
    pub timestamp: DateTime<Utc>,
    pub source: String,
    pub location: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_statistics_serialization() {
        let created_at = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        let stats = UrlStatistics {
            shortcode: "abc123".to_string(),
            short_link: "http://localhost:8080/abc123".to_string(),
            original_url: "https://example.com".to_string(),
            created_at,
            expires_at: created_at + chrono::Duration::minutes(30),
            total_clicks: 0,
            click_data: vec![],
        };

        assert_eq!(
            serde_json::to_value(&stats).unwrap(),
            json!({
                "shortcode": "abc123",
                "shortLink": "http://localhost:8080/abc123",
                "originalUrl": "https://example.com",
                "createdAt": "2024-01-15T10:30:00.000Z",
                "expiresAt": "2024-01-15T11:00:00.000Z",
                "totalClicks": 0,
                "clickData": []
            })
        );
    }

    #[test]
    fn test_click_data_shape() {
        let click = ClickData {
            timestamp: Utc.with_ymd_and_hms(2024, 1, 15, 10, 35, 0).unwrap(),
            source: "direct".to_string(),
            location: "Berlin, DE".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&click).unwrap(),
            json!({
                "timestamp": "2024-01-15T10:35:00.000Z",
                "source": "direct",
                "location": "Berlin, DE"
            })
        );
    }
}
