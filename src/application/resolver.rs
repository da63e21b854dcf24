//! Host-to-destination redirect resolution.

use std::sync::Arc;

use axum::http::HeaderValue;
use tracing::{info, warn};

use crate::domain::{DomainLookup, MetricsSink, RedirectDecision, compose_destination, redirect_key};

/// Parts of an inbound request the resolver looks at.
#[derive(Debug, Clone, Copy)]
pub struct RedirectRequest<'a> {
    /// Source host; `None` when the request carried no usable host.
    pub host: Option<&'a str>,
    pub path: &'a str,
    /// Raw query string, without the leading `?`.
    pub query: Option<&'a str>,
    /// Client address, for logging only.
    pub client_ip: Option<&'a str>,
}

/// Maps one inbound request to one redirect decision.
///
/// Holds shared handles to the mapping store and the metrics sink and no
/// other state, so a single instance serves all requests concurrently.
///
/// # Request flow
///
/// 1. Derive the key `{host}:redirect`
/// 2. Read it once from the store
/// 3. Hit: compose `https://<destination><path>[?<query>]`, count a redirect for the source host
/// 4. Miss: count an unknown-domain request
///
/// Every request increments exactly one counter. A store failure is
/// indistinguishable from a miss here; the store client logs it.
pub struct RedirectResolver {
    lookup: Arc<dyn DomainLookup>,
    metrics: Arc<dyn MetricsSink>,
}

impl RedirectResolver {
    pub fn new(lookup: Arc<dyn DomainLookup>, metrics: Arc<dyn MetricsSink>) -> Self {
        Self { lookup, metrics }
    }

    /// Resolves `request` against the current store contents.
    pub async fn resolve(&self, request: RedirectRequest<'_>) -> RedirectDecision {
        let client_ip = request.client_ip.unwrap_or("-");
        let query = request.query.unwrap_or("");

        let Some(host) = request.host else {
            info!(client_ip, path = request.path, query, "Request without host");
            return self.not_found();
        };

        let key = redirect_key(host);

        let Some(destination_domain) = self.lookup.get(&key).await else {
            info!(client_ip, host, path = request.path, query, "Not registered: {}", host);
            return self.not_found();
        };

        let destination = compose_destination(&destination_domain, request.path, request.query);

        let location = match HeaderValue::from_str(&destination) {
            Ok(location) => location,
            Err(_) => {
                warn!(
                    host,
                    destination = %destination_domain,
                    "Stored destination is not a valid Location header, treating as unregistered"
                );
                return self.not_found();
            }
        };

        self.metrics.record_redirect(host);

        info!(client_ip, host, path = request.path, query, destination, "Redirect");

        RedirectDecision::Redirect { location }
    }

    fn not_found(&self) -> RedirectDecision {
        self.metrics.record_unknown_domain();
        RedirectDecision::NotFound
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MockDomainLookup, MockMetricsSink};
    use mockall::predicate::eq;

    fn request<'a>(host: &'a str, path: &'a str, query: Option<&'a str>) -> RedirectRequest<'a> {
        RedirectRequest {
            host: Some(host),
            path,
            query,
            client_ip: None,
        }
    }

    #[tokio::test]
    async fn test_resolve_hit_redirects_to_https_destination() {
        let mut lookup = MockDomainLookup::new();
        lookup
            .expect_get()
            .with(eq("{blog.example.org}:redirect"))
            .times(1)
            .returning(|_| Some("site.example.io".to_string()));

        let mut metrics = MockMetricsSink::new();
        metrics
            .expect_record_redirect()
            .with(eq("blog.example.org"))
            .times(1)
            .return_const(());
        metrics.expect_record_unknown_domain().times(0);

        let resolver = RedirectResolver::new(Arc::new(lookup), Arc::new(metrics));

        let decision = resolver
            .resolve(request("blog.example.org", "/a/b.html", Some("x=1&y=2")))
            .await;

        assert_eq!(
            decision.location(),
            Some("https://site.example.io/a/b.html?x=1&y=2")
        );
    }

    #[tokio::test]
    async fn test_resolve_miss_counts_unknown_domain_once() {
        let mut lookup = MockDomainLookup::new();
        lookup
            .expect_get()
            .with(eq("{unknown.example.com}:redirect"))
            .times(1)
            .returning(|_| None);

        let mut metrics = MockMetricsSink::new();
        metrics.expect_record_redirect().times(0);
        metrics
            .expect_record_unknown_domain()
            .times(1)
            .return_const(());

        let resolver = RedirectResolver::new(Arc::new(lookup), Arc::new(metrics));

        let decision = resolver
            .resolve(request("unknown.example.com", "/pixel.gif", Some("uid=1")))
            .await;

        assert_eq!(decision, RedirectDecision::NotFound);
    }

    #[tokio::test]
    async fn test_resolve_without_host_skips_lookup() {
        let mut lookup = MockDomainLookup::new();
        lookup.expect_get().times(0);

        let mut metrics = MockMetricsSink::new();
        metrics.expect_record_redirect().times(0);
        metrics
            .expect_record_unknown_domain()
            .times(1)
            .return_const(());

        let resolver = RedirectResolver::new(Arc::new(lookup), Arc::new(metrics));

        let decision = resolver
            .resolve(RedirectRequest {
                host: None,
                path: "/",
                query: None,
                client_ip: None,
            })
            .await;

        assert_eq!(decision, RedirectDecision::NotFound);
    }

    #[tokio::test]
    async fn test_resolve_invalid_stored_destination_fails_closed() {
        let mut lookup = MockDomainLookup::new();
        lookup
            .expect_get()
            .times(1)
            .returning(|_| Some("bad\ndestination".to_string()));

        let mut metrics = MockMetricsSink::new();
        metrics.expect_record_redirect().times(0);
        metrics
            .expect_record_unknown_domain()
            .times(1)
            .return_const(());

        let resolver = RedirectResolver::new(Arc::new(lookup), Arc::new(metrics));

        let decision = resolver.resolve(request("blog.example.org", "/", None)).await;

        assert_eq!(decision, RedirectDecision::NotFound);
    }

    #[tokio::test]
    async fn test_resolve_counts_source_host_not_destination() {
        let mut lookup = MockDomainLookup::new();
        lookup
            .expect_get()
            .returning(|_| Some("canonical.example.io".to_string()));

        let mut metrics = MockMetricsSink::new();
        metrics
            .expect_record_redirect()
            .withf(|domain| domain == "legacy.example.net")
            .times(1)
            .return_const(());

        let resolver = RedirectResolver::new(Arc::new(lookup), Arc::new(metrics));

        let decision = resolver
            .resolve(request("legacy.example.net", "/", None))
            .await;

        assert_eq!(decision.location(), Some("https://canonical.example.io/"));
    }
}
