//! Channel-backed sink feeding the background dispatcher.

use async_trait::async_trait;
use tokio::sync::mpsc::{self, error::TrySendError};
use tracing::debug;

use super::sink::{LogSink, SinkStatus, mirror_locally};
use crate::domain::log_event::LogEvent;

/// Queues events for [`super::run_log_dispatcher`].
///
/// The queue is bounded. When it is full or the dispatcher is gone the event
/// is dropped and counted in `remote_log_dropped_total`.
#[derive(Clone)]
pub struct RemoteLogSink {
    sender: mpsc::Sender<LogEvent>,
}

impl RemoteLogSink {
    pub fn new(sender: mpsc::Sender<LogEvent>) -> Self {
        Self { sender }
    }
}

#[async_trait]
impl LogSink for RemoteLogSink {
    async fn send(&self, event: LogEvent) {
        mirror_locally(&event);

        match self.sender.try_send(event) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                metrics::counter!("remote_log_dropped_total", "reason" => "full").increment(1);
                debug!("Log queue full, dropping event");
            }
            Err(TrySendError::Closed(_)) => {
                metrics::counter!("remote_log_dropped_total", "reason" => "closed").increment(1);
                debug!("Log queue closed, dropping event");
            }
        }
    }

    fn status(&self) -> SinkStatus {
        if self.sender.is_closed() {
            SinkStatus::Closed
        } else {
            SinkStatus::Open {
                capacity: self.sender.capacity(),
            }
        }
    }
}
