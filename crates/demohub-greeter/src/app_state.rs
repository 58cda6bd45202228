//! Shared application state for the greeter.

use std::sync::Arc;

use demohub_core::obs::{Counter, ProcessCollector};

use crate::config::GreeterConfig;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: GreeterConfig,
    requests: Counter,
    process: ProcessCollector,
}

impl AppState {
    pub fn new(cfg: GreeterConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                requests: Counter::new("http_requests_total", "Total HTTP requests"),
                process: ProcessCollector::new(),
            }),
        }
    }

    pub fn cfg(&self) -> &GreeterConfig {
        &self.inner.cfg
    }

    /// Process-wide greeting counter. Starts at zero, never persisted.
    pub fn requests(&self) -> &Counter {
        &self.inner.requests
    }

    pub fn process(&self) -> &ProcessCollector {
        &self.inner.process
    }
}
