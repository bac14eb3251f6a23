//! Log sink trait and local mirroring.

use async_trait::async_trait;

use crate::domain::log_event::{Level, LogEvent};

/// Reported state of a sink, used by the health endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkStatus {
    /// Queue accepting events, with remaining free slots.
    Open { capacity: usize },
    /// Dispatcher has stopped; events are dropped.
    Closed,
    /// No remote collector configured.
    Disabled,
}

/// Destination for structured log events.
///
/// `send` never fails and never waits on the network. Handlers await it
/// before writing their response.
#[async_trait]
pub trait LogSink: Send + Sync {
    /// Records one event.
    async fn send(&self, event: LogEvent);

    /// Current state of the sink.
    fn status(&self) -> SinkStatus;
}

/// Writes the event to the local `tracing` subscriber at the matching level.
pub fn mirror_locally(event: &LogEvent) {
    let stack = event.stack.as_str();
    let package = event.package.as_str();
    let message = event.message.as_str();

    match event.level {
        Level::Debug => tracing::debug!(stack, package, "{message}"),
        Level::Info => tracing::info!(stack, package, "{message}"),
        Level::Warn => tracing::warn!(stack, package, "{message}"),
        Level::Error => tracing::error!(stack, package, "{message}"),
        Level::Fatal => tracing::error!(stack, package, fatal = true, "{message}"),
    }
}
