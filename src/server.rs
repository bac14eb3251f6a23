//! HTTP server initialization and runtime setup.
//!
//! Handles log sink setup, dispatcher spawning, and Axum server lifecycle.

use crate::config::Config;
use crate::infrastructure::remote_log::{
    LogShipper, LogSink, NullLogSink, RemoteLogSink, run_log_dispatcher,
};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Remote log dispatcher (or NullLogSink when disabled)
/// - Empty in-memory store
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The HTTP client for log shipping cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let log_sink = build_log_sink(&config)?;

    let state = AppState::with_empty_store(config.base_url.clone(), log_sink);
    let app = app_router(state);

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Builds the log sink and, when remote logging is enabled, spawns its dispatcher.
fn build_log_sink(config: &Config) -> Result<Arc<dyn LogSink>> {
    let Some(endpoint) = &config.log_endpoint else {
        tracing::info!("Remote logging disabled (NullLogSink)");
        return Ok(Arc::new(NullLogSink::new()));
    };

    let shipper = LogShipper::new(endpoint.clone(), config.log_timeout())
        .context("Failed to build log shipping client")?;

    let (log_tx, log_rx) = mpsc::channel(config.log_queue_capacity);
    tokio::spawn(run_log_dispatcher(log_rx, shipper));

    Ok(Arc::new(RemoteLogSink::new(log_tx)))
}

/// Waits for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
