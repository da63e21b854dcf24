//! Port for redirect hit/miss counters.

/// Counter name for successful redirects, labeled by source domain.
pub const REDIRECT_REQUESTS: &str = "redirect_requests";

/// Counter name for requests whose host is not registered.
pub const REDIRECT_REQUESTS_UNKNOWN_DOMAIN: &str = "redirect_requests_unknown_domain";

/// Observer notified once per resolved request.
///
/// Both operations are fire-and-forget: they return nothing and must not
/// block or fail in a way the request path can see.
#[cfg_attr(test, mockall::automock)]
pub trait MetricsSink: Send + Sync {
    /// Counts a redirect served for the *source* host `domain`.
    fn record_redirect(&self, domain: &str);

    /// Counts a request for a host with no mapping.
    fn record_unknown_domain(&self);
}
