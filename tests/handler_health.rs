mod common;

use axum::{Router, http::StatusCode, routing::get};
use axum_test::TestServer;
use link_shortener::api::handlers::health_handler;
use link_shortener::infrastructure::remote_log::NullLogSink;
use link_shortener::state::AppState;
use std::sync::Arc;

fn health_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(state)
}

#[tokio::test]
async fn test_health_endpoint_success() {
    let (state, _rx) = common::create_test_state();
    let server = TestServer::new(health_app(state)).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["store"]["status"], "ok");
    assert_eq!(json["checks"]["store"]["message"], "Entries: 0");
    assert_eq!(json["checks"]["log_queue"]["status"], "ok");
}

#[tokio::test]
async fn test_health_endpoint_structure() {
    let (state, _rx) = common::create_test_state();
    let server = TestServer::new(health_app(state)).unwrap();

    let json = server.get("/health").await.json::<serde_json::Value>();

    assert!(json.get("status").is_some());
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json["checks"].get("store").is_some());
    assert!(json["checks"].get("log_queue").is_some());
}

#[tokio::test]
async fn test_health_counts_entries() {
    let (state, _rx) = common::create_test_state();
    state
        .link_service
        .create_short_link("https://example.com".to_string(), None, f64::NAN)
        .await
        .unwrap();
    let server = TestServer::new(health_app(state)).unwrap();

    let json = server.get("/health").await.json::<serde_json::Value>();

    assert_eq!(json["checks"]["store"]["message"], "Entries: 1");
}

#[tokio::test]
async fn test_health_degraded_when_log_queue_closed() {
    let (state, rx) = common::create_test_state();
    drop(rx);
    let server = TestServer::new(health_app(state)).unwrap();

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["log_queue"]["status"], "error");
    assert_eq!(json["checks"]["store"]["status"], "ok");
}

#[tokio::test]
async fn test_health_with_remote_logging_disabled() {
    let state = AppState::with_empty_store(common::BASE_URL, Arc::new(NullLogSink::new()));
    let server = TestServer::new(health_app(state)).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>()["checks"]["log_queue"]["message"],
        "Remote logging disabled"
    );
}
