//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::domain::log_event::{Level, LogEvent, Package};
use crate::infrastructure::persistence::InMemoryLinkRepository;
use crate::infrastructure::remote_log::LogSink;

/// Link service backed by the in-memory store.
pub type AppLinkService = LinkService<InMemoryLinkRepository>;

/// Handler dependencies.
///
/// Each `AppState` owns its own store, so separate instances (e.g. one per
/// test) never share entries.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<AppLinkService>,
    pub log_sink: Arc<dyn LogSink>,
}

impl AppState {
    pub fn new(link_service: Arc<AppLinkService>, log_sink: Arc<dyn LogSink>) -> Self {
        Self {
            link_service,
            log_sink,
        }
    }

    /// Builds state around a fresh, empty store.
    pub fn with_empty_store(base_url: impl Into<String>, log_sink: Arc<dyn LogSink>) -> Self {
        let repository = Arc::new(InMemoryLinkRepository::new());
        Self::new(Arc::new(LinkService::new(repository, base_url)), log_sink)
    }

    /// Emits a backend log event through the configured sink.
    pub async fn log(&self, level: Level, package: Package, message: impl Into<String>) {
        self.log_sink
            .send(LogEvent::backend(level, package, message))
            .await;
    }
}
