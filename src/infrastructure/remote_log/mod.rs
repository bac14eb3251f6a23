//! Remote log shipping.
//!
//! Provides a [`LogSink`] trait with two implementations:
//! - [`RemoteLogSink`] - Queues events for the background dispatcher
//! - [`NullLogSink`] - Local-only logging when no collector is configured
//!
//! [`run_log_dispatcher`] drains the queue and posts each event to the
//! collector with a [`LogShipper`]. Delivery failures only show up in metrics.

mod dispatcher;
mod null_sink;
mod remote_sink;
mod sink;

pub use dispatcher::{DeliveryOutcome, LogShipper, run_log_dispatcher};
pub use null_sink::NullLogSink;
pub use remote_sink::RemoteLogSink;
pub use sink::{LogSink, SinkStatus, mirror_locally};
