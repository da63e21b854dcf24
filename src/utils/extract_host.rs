//! Source host and client address extraction from HTTP requests.

use axum::extract::ConnectInfo;
use axum::http::{Extensions, HeaderMap, Uri, header};
use std::net::SocketAddr;

/// Extracts the source host a request was addressed to.
///
/// Prefers the request URI authority, which is set for absolute-form requests
/// and HTTP/2 `:authority`; a `Host` header on such a request is ignored.
/// Otherwise reads the `Host` header verbatim, port included, since the store
/// is keyed by exactly what clients send.
///
/// Returns `None` when neither is present or the header is not valid UTF-8.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "example.com:8080".parse().unwrap());
///
/// let host = extract_host(&headers, &"/".parse().unwrap());
/// assert_eq!(host, Some("example.com:8080"));
/// ```
pub fn extract_host<'a>(headers: &'a HeaderMap, uri: &'a Uri) -> Option<&'a str> {
    if let Some(authority) = uri.authority() {
        let authority = authority.as_str();
        return Some(authority.rsplit_once('@').map_or(authority, |(_, host)| host));
    }

    headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .filter(|h| !h.is_empty())
}

/// Returns the client address for logging.
///
/// Prefers `X-Forwarded-For` (set by the load balancer in front of the
/// service), then the peer address recorded by `ConnectInfo`.
pub fn client_ip(headers: &HeaderMap, extensions: &Extensions) -> Option<String> {
    if let Some(forwarded) = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
    {
        return Some(forwarded.to_string());
    }

    extensions
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
}
