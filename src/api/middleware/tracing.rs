//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Creates a tracing middleware for HTTP requests.
///
/// Opens an `INFO` span per request (method, URI, version) and logs the
/// response status and latency in milliseconds when it completes.
///
/// # Example Logs
///
/// ```text
/// INFO request{method=GET uri=/a/b.html?x=1 version=HTTP/1.1}: Redirect host="blog.example.org" ...
/// INFO request{method=GET uri=/a/b.html?x=1 version=HTTP/1.1}: finished processing request latency=0 ms status=307
/// ```
pub fn layer()
-> TraceLayer<tower_http::classify::SharedClassifier<tower_http::classify::ServerErrorsAsFailures>>
{
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}
