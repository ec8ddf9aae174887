//! # Application State
//!
//! Shared state for the Axum application: the analyzer (which owns the
//! registry and collaborator wiring) and the Prometheus render handle.

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;

use covenant_engine::ComplianceAnalyzer;

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    /// The analysis engine, shared across concurrent requests.
    pub analyzer: Arc<ComplianceAnalyzer>,
    /// Renders the Prometheus exposition text for `/metrics`; absent when
    /// no recorder was installed (e.g. in tests).
    pub metrics_handle: Option<PrometheusHandle>,
}

impl AppState {
    /// Create application state around an analyzer.
    pub fn new(analyzer: Arc<ComplianceAnalyzer>) -> Self {
        Self {
            analyzer,
            metrics_handle: None,
        }
    }

    /// Attach a Prometheus render handle.
    pub fn with_metrics_handle(mut self, handle: PrometheusHandle) -> Self {
        self.metrics_handle = Some(handle);
        self
    }
}
