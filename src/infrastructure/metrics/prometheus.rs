//! Prometheus-backed metrics sink.

use crate::domain::MetricsSink;
use crate::domain::metrics::{REDIRECT_REQUESTS, REDIRECT_REQUESTS_UNKNOWN_DOMAIN};
use anyhow::Result;
use metrics::{counter, describe_counter};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing::info;

/// Installs the global Prometheus recorder and describes the redirect counters.
///
/// The returned handle renders the exposition text served on `/metrics`.
///
/// # Errors
///
/// Returns an error if a global recorder is already installed.
pub fn install_recorder() -> Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| anyhow::anyhow!("Failed to install Prometheus recorder: {}", e))?;

    describe();
    info!("Prometheus recorder installed");

    Ok(handle)
}

fn describe() {
    describe_counter!(REDIRECT_REQUESTS, "Redirect request counter by domain.");
    describe_counter!(
        REDIRECT_REQUESTS_UNKNOWN_DOMAIN,
        "The number of redirect requests for unknown domains"
    );
}

/// Metrics sink writing to whichever `metrics` recorder is installed.
///
/// With no recorder installed (metrics listener disabled) every call is a no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrometheusMetrics;

impl PrometheusMetrics {
    pub fn new() -> Self {
        Self
    }
}

impl MetricsSink for PrometheusMetrics {
    fn record_redirect(&self, domain: &str) {
        counter!(REDIRECT_REQUESTS, "domain" => domain.to_string()).increment(1);
    }

    fn record_unknown_domain(&self) {
        counter!(REDIRECT_REQUESTS_UNKNOWN_DOMAIN).increment(1);
    }
}
