mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use link_shortener::domain::log_event::{Level, Package, Stack};
use serde_json::{Value, json};
use std::future::IntoFuture;

#[tokio::test]
async fn test_shorten_generates_code() {
    let (server, state, mut rx) = common::create_test_server();

    let response = server
        .post("/shorten")
        .json(&json!({ "originalUrl": "https://example.com" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    let short_link = json["shortLink"].as_str().unwrap();
    let code = short_link
        .strip_prefix("http://localhost:8080/")
        .expect("short link uses the configured base URL");
    assert_eq!(code.len(), 6);
    assert!(json["expiry"].is_string());

    let link = state.link_service.get_link_by_code(code).await.unwrap();
    assert_eq!(link.original_url, "https://example.com");

    let logs = common::drain_logs(&mut rx);
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].stack, Stack::Backend);
    assert_eq!(logs[0].level, Level::Info);
    assert_eq!(logs[0].package, Package::Controller);
    assert_eq!(
        logs[0].message,
        format!("Shortened URL: https://example.com -> {code}")
    );
}

#[tokio::test]
async fn test_shorten_generated_codes_are_distinct() {
    let (server, _state, _rx) = common::create_test_server();

    let mut links = Vec::new();
    for i in 0..20 {
        let response = server
            .post("/shorten")
            .json(&json!({ "originalUrl": format!("https://example.com/{i}") }))
            .await;
        response.assert_status_ok();
        links.push(response.json::<Value>()["shortLink"].clone());
    }

    links.sort_by_key(|l| l.as_str().unwrap().to_string());
    links.dedup();
    assert_eq!(links.len(), 20);
}

#[tokio::test]
async fn test_shorten_with_custom_code() {
    let (server, _state, _rx) = common::create_test_server();

    let response = server
        .post("/shorten")
        .json(&json!({
            "originalUrl": "https://example.com",
            "shortcode": "abc1"
        }))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>()["shortLink"],
        "http://localhost:8080/abc1"
    );
}

#[tokio::test]
async fn test_shorten_non_string_shortcode_is_generated() {
    let (server, _state, _rx) = common::create_test_server();

    let response = server
        .post("/shorten")
        .json(&json!({
            "originalUrl": "https://example.com",
            "shortcode": 1234
        }))
        .await;

    response.assert_status_ok();
    let short_link = response.json::<Value>()["shortLink"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(!short_link.ends_with("/1234"));
}

#[tokio::test]
async fn test_shorten_missing_original_url() {
    let (server, state, mut rx) = common::create_test_server();

    for body in [
        json!({}),
        json!({ "originalUrl": "" }),
        json!({ "originalUrl": 42 }),
        json!({ "originalUrl": ["https://example.com"] }),
        json!({ "originalUrl": null }),
    ] {
        let response = server.post("/shorten").json(&body).await;

        response.assert_status_bad_request();
        assert_eq!(
            response.json::<Value>(),
            json!({ "error": "originalUrl is required" })
        );
    }

    assert_eq!(state.link_service.count_links().await.unwrap(), 0);

    let logs = common::drain_logs(&mut rx);
    assert_eq!(logs.len(), 5);
    assert!(logs.iter().all(|e| e.level == Level::Error
        && e.package == Package::Controller
        && e.message == "Missing or invalid originalUrl"));
}

#[tokio::test]
async fn test_shorten_malformed_body_is_validation_error() {
    let (server, _state, _rx) = common::create_test_server();

    let response = server
        .post("/shorten")
        .content_type("application/json")
        .bytes("{not json".into())
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["error"], "originalUrl is required");

    let response = server.post("/shorten").await;
    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_custom_code_conflict() {
    let (server, state, mut rx) = common::create_test_server();

    server
        .post("/shorten")
        .json(&json!({
            "originalUrl": "https://first.com",
            "shortcode": "abc1"
        }))
        .await
        .assert_status_ok();
    common::drain_logs(&mut rx);

    let response = server
        .post("/shorten")
        .json(&json!({
            "originalUrl": "https://second.com",
            "shortcode": "abc1"
        }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Shortcode already exists" })
    );

    let link = state.link_service.get_link_by_code("abc1").await.unwrap();
    assert_eq!(link.original_url, "https://first.com");

    let logs = common::drain_logs(&mut rx);
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].level, Level::Warn);
    assert_eq!(logs[0].message, "Shortcode already exists");
}

#[tokio::test]
async fn test_shorten_concurrent_duplicate_codes() {
    let (server, state, _rx) = common::create_test_server();

    let first = server.post("/shorten").json(&json!({
        "originalUrl": "https://first.com",
        "shortcode": "race"
    }))
    .into_future();
    let second = server.post("/shorten").json(&json!({
        "originalUrl": "https://second.com",
        "shortcode": "race"
    }))
    .into_future();

    let (first, second) = tokio::join!(first, second);

    let mut statuses = vec![first.status_code(), second.status_code()];
    statuses.sort();
    assert_eq!(statuses, vec![StatusCode::OK, StatusCode::CONFLICT]);
    assert_eq!(state.link_service.count_links().await.unwrap(), 1);
}

#[tokio::test]
async fn test_shorten_validity_sets_expiry() {
    let (server, _state, _rx) = common::create_test_server();

    let before = Utc::now();
    let response = server
        .post("/shorten")
        .json(&json!({
            "originalUrl": "https://example.com",
            "validity": 10
        }))
        .await;
    let after = Utc::now();

    response.assert_status_ok();
    let expiry = common::parse_timestamp(&response.json::<Value>()["expiry"]);

    assert!(expiry >= before + Duration::minutes(10) - Duration::milliseconds(1));
    assert!(expiry <= after + Duration::minutes(10));
}

#[tokio::test]
async fn test_shorten_default_validity_is_thirty_minutes() {
    let (server, _state, _rx) = common::create_test_server();

    for body in [
        json!({ "originalUrl": "https://example.com" }),
        json!({ "originalUrl": "https://example.com", "validity": "soon" }),
        json!({ "originalUrl": "https://example.com", "validity": 0 }),
    ] {
        let before = Utc::now();
        let response = server.post("/shorten").json(&body).await;
        let after = Utc::now();

        response.assert_status_ok();
        let expiry = common::parse_timestamp(&response.json::<Value>()["expiry"]);

        assert!(expiry >= before + Duration::minutes(30) - Duration::milliseconds(1));
        assert!(expiry <= after + Duration::minutes(30));
    }
}

#[tokio::test]
async fn test_shorten_numeric_string_validity() {
    let (server, _state, _rx) = common::create_test_server();

    server
        .post("/shorten")
        .json(&json!({
            "originalUrl": "https://example.com",
            "validity": "5",
            "shortcode": "five"
        }))
        .await
        .assert_status_ok();

    let stats = server.get("/statistics").await.json::<Value>();
    let created_at = common::parse_timestamp(&stats[0]["createdAt"]);
    let expires_at = common::parse_timestamp(&stats[0]["expiresAt"]);
    assert_eq!(expires_at - created_at, Duration::minutes(5));
}

#[tokio::test]
async fn test_shorten_form_body() {
    let (server, _state, _rx) = common::create_test_server();

    let response = server
        .post("/shorten")
        .form(&[
            ("originalUrl", "https://example.com/form"),
            ("shortcode", "form1"),
            ("validity", "15"),
        ])
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>()["shortLink"],
        "http://localhost:8080/form1"
    );
}

#[tokio::test]
async fn test_shorten_timestamps_use_millisecond_iso_format() {
    let (server, _state, _rx) = common::create_test_server();

    let response = server
        .post("/shorten")
        .json(&json!({ "originalUrl": "https://example.com" }))
        .await;

    let expiry = response.json::<Value>()["expiry"]
        .as_str()
        .unwrap()
        .to_string();

    // YYYY-MM-DDTHH:MM:SS.mmmZ
    assert_eq!(expiry.len(), 24);
    assert!(expiry.ends_with('Z'));
    assert_eq!(&expiry[19..20], ".");
}
