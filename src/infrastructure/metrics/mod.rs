//! Metrics sinks.
//!
//! - [`PrometheusMetrics`] - Records through the `metrics` facade into the Prometheus exporter
//! - [`CountingMetrics`] - Keeps counts in memory so tests can assert exact increments

mod counting;
mod prometheus;

pub use counting::CountingMetrics;
pub use prometheus::{PrometheusMetrics, install_recorder};
