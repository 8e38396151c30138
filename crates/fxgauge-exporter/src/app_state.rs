//! Shared application state for the HTTP handlers.

use std::sync::Arc;

use crate::obs::metrics::ExporterMetrics;

#[derive(Clone, Default)]
pub struct AppState {
    metrics: Arc<ExporterMetrics>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle shared with the refresh pipeline, which writes into it.
    pub fn metrics(&self) -> Arc<ExporterMetrics> {
        Arc::clone(&self.metrics)
    }

    pub fn is_draining(&self) -> bool {
        self.metrics.is_draining()
    }

    pub fn set_draining(&self) {
        self.metrics.set_draining();
    }
}
