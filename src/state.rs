//! Shared state injected into every handler.

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;

use crate::application::RedirectResolver;
use crate::domain::{DomainLookup, MetricsSink};

#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<RedirectResolver>,
    /// Same store the resolver reads from; used by the health check.
    pub lookup: Arc<dyn DomainLookup>,
    /// Present only when the Prometheus recorder is installed.
    pub metrics_handle: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(
        lookup: Arc<dyn DomainLookup>,
        metrics: Arc<dyn MetricsSink>,
        metrics_handle: Option<PrometheusHandle>,
    ) -> Self {
        Self {
            resolver: Arc::new(RedirectResolver::new(lookup.clone(), metrics)),
            lookup,
            metrics_handle,
        }
    }
}
