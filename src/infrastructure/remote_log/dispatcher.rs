//! Background worker posting queued log events to the collector.

use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::domain::log_event::LogEvent;

/// Result of a single delivery attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// Collector answered with a 2xx status.
    Delivered,
    /// Collector answered with a non-2xx status.
    Rejected(u16),
    /// Request never completed (connect error, timeout, ...).
    Failed,
}

/// HTTP client bound to one collector endpoint.
#[derive(Debug, Clone)]
pub struct LogShipper {
    client: reqwest::Client,
    endpoint: String,
}

impl LogShipper {
    /// Creates a shipper whose requests give up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built (TLS backend
    /// initialization failure).
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Posts one event. Never returns an error; the outcome is counted in
    /// `remote_log_sent_total`, `remote_log_rejected_total` or
    /// `remote_log_failed_total`.
    pub async fn ship(&self, event: &LogEvent) -> DeliveryOutcome {
        match self.client.post(&self.endpoint).json(event).send().await {
            Ok(response) if response.status().is_success() => {
                metrics::counter!("remote_log_sent_total").increment(1);
                DeliveryOutcome::Delivered
            }
            Ok(response) => {
                let status = response.status().as_u16();
                metrics::counter!("remote_log_rejected_total").increment(1);
                debug!(status, "Log collector rejected event");
                DeliveryOutcome::Rejected(status)
            }
            Err(e) => {
                metrics::counter!("remote_log_failed_total").increment(1);
                debug!(error = %e, "Failed to ship log event");
                DeliveryOutcome::Failed
            }
        }
    }
}

/// Drains `rx` and ships events one at a time, in the order they were queued.
///
/// Returns once every sender has been dropped and the queue is empty.
pub async fn run_log_dispatcher(mut rx: mpsc::Receiver<LogEvent>, shipper: LogShipper) {
    info!(endpoint = shipper.endpoint(), "Log dispatcher started");

    while let Some(event) = rx.recv().await {
        shipper.ship(&event).await;
    }

    info!("Log dispatcher stopped");
}
