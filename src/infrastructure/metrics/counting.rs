//! In-memory metrics sink.

use crate::domain::MetricsSink;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics sink that keeps its counts in memory.
///
/// Injected in place of [`PrometheusMetrics`](super::PrometheusMetrics) by
/// tests that need exact per-domain and unknown-domain counts.
#[derive(Debug, Default)]
pub struct CountingMetrics {
    redirects: Mutex<HashMap<String, u64>>,
    unknown_domain: AtomicU64,
}

impl CountingMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Redirects recorded for the source host `domain`.
    pub fn redirects_for(&self, domain: &str) -> u64 {
        let redirects = self.redirects.lock().unwrap_or_else(|e| e.into_inner());
        redirects.get(domain).copied().unwrap_or(0)
    }

    /// Redirects recorded across all source hosts.
    pub fn total_redirects(&self) -> u64 {
        let redirects = self.redirects.lock().unwrap_or_else(|e| e.into_inner());
        redirects.values().sum()
    }

    pub fn unknown_domain(&self) -> u64 {
        self.unknown_domain.load(Ordering::Relaxed)
    }
}

impl MetricsSink for CountingMetrics {
    fn record_redirect(&self, domain: &str) {
        let mut redirects = self.redirects.lock().unwrap_or_else(|e| e.into_inner());
        *redirects.entry(domain.to_string()).or_insert(0) += 1;
    }

    fn record_unknown_domain(&self) {
        self.unknown_domain.fetch_add(1, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_per_domain() {
        let metrics = CountingMetrics::new();
        metrics.record_redirect("a.example.com");
        metrics.record_redirect("a.example.com");
        metrics.record_redirect("b.example.com");

        assert_eq!(metrics.redirects_for("a.example.com"), 2);
        assert_eq!(metrics.redirects_for("b.example.com"), 1);
        assert_eq!(metrics.redirects_for("c.example.com"), 0);
        assert_eq!(metrics.total_redirects(), 3);
        assert_eq!(metrics.unknown_domain(), 0);
    }

    #[test]
    fn test_counts_unknown_domain() {
        let metrics = CountingMetrics::new();
        metrics.record_unknown_domain();

        assert_eq!(metrics.unknown_domain(), 1);
        assert_eq!(metrics.total_redirects(), 0);
    }
}
