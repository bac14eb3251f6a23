#![allow(dead_code)]

use axum_test::TestServer;
use chrono::{DateTime, Utc};
use link_shortener::domain::log_event::LogEvent;
use link_shortener::infrastructure::remote_log::RemoteLogSink;
use link_shortener::routes::build_router;
use link_shortener::state::AppState;
use std::sync::Arc;
use tokio::sync::mpsc;

pub const BASE_URL: &str = "http://localhost:8080";

/// Fresh state with an empty store. Log events land on the returned receiver.
pub fn create_test_state() -> (AppState, mpsc::Receiver<LogEvent>) {
    let (tx, rx) = mpsc::channel(100);
    let state = AppState::with_empty_store(BASE_URL, Arc::new(RemoteLogSink::new(tx)));

    (state, rx)
}

/// Test server over the full router, plus its log receiver.
pub fn create_test_server() -> (TestServer, AppState, mpsc::Receiver<LogEvent>) {
    let (state, rx) = create_test_state();
    let server = TestServer::new(build_router(state.clone())).unwrap();

    (server, state, rx)
}

/// Drains every log event queued so far.
pub fn drain_logs(rx: &mut mpsc::Receiver<LogEvent>) -> Vec<LogEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

pub fn parse_timestamp(value: &serde_json::Value) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value.as_str().unwrap())
        .unwrap()
        .with_timezone(&Utc)
}
