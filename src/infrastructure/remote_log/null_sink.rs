//! Sink used when remote shipping is disabled.

use async_trait::async_trait;
use tracing::debug;

use super::sink::{LogSink, SinkStatus, mirror_locally};
use crate::domain::log_event::LogEvent;

/// Mirrors events to the local subscriber and ships nothing.
pub struct NullLogSink;

impl NullLogSink {
    pub fn new() -> Self {
        debug!("Using NullLogSink (remote log shipping disabled)");
        Self
    }
}

impl Default for NullLogSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LogSink for NullLogSink {
    async fn send(&self, event: LogEvent) {
        mirror_locally(&event);
    }

    fn status(&self) -> SinkStatus {
        SinkStatus::Disabled
    }
}
