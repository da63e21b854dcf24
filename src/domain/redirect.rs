//! Redirect records and per-request redirect decisions.

use axum::{
    body::Body,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

/// Suffix identifying the redirect record class in the shared store.
pub const REDIRECT_KEY_SUFFIX: &str = ":redirect";

/// Builds the store key holding the destination for `host`.
///
/// The host is wrapped in braces so other record classes for the same host
/// (with different suffixes) never collide by prefix.
///
/// # Examples
///
/// ```
/// use redirector::domain::redirect_key;
///
/// assert_eq!(redirect_key("blog.example.org"), "{blog.example.org}:redirect");
/// ```
pub fn redirect_key(host: &str) -> String {
    format!("{{{host}}}{REDIRECT_KEY_SUFFIX}")
}

/// Recovers the source host from a redirect key, if `key` is one.
pub fn host_from_key(key: &str) -> Option<&str> {
    key.strip_suffix(REDIRECT_KEY_SUFFIX)?
        .strip_prefix('{')?
        .strip_suffix('}')
}

/// Composes the absolute destination URL for a redirect.
///
/// The scheme is always `https`. `path` and `query` are copied byte for byte;
/// an empty path stays empty and the `?` separator is only added for a
/// non-empty query.
pub fn compose_destination(destination_domain: &str, path: &str, query: Option<&str>) -> String {
    let query = query.filter(|q| !q.is_empty());

    let mut location = String::with_capacity(
        "https://".len() + destination_domain.len() + path.len() + query.map_or(0, |q| q.len() + 1),
    );
    location.push_str("https://");
    location.push_str(destination_domain);
    location.push_str(path);
    if let Some(q) = query {
        location.push('?');
        location.push_str(q);
    }
    location
}

/// Outcome of resolving one request. Lives only as long as the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectDecision {
    /// Registered host: answer with 307 and this `Location`.
    Redirect { location: HeaderValue },
    /// Unregistered host, or the store could not answer.
    NotFound,
}

impl RedirectDecision {
    /// Returns the redirect target, if any.
    pub fn location(&self) -> Option<&str> {
        match self {
            Self::Redirect { location } => location.to_str().ok(),
            Self::NotFound => None,
        }
    }

    /// Returns the response status: 307 for a redirect, 404 otherwise.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Redirect { .. } => StatusCode::TEMPORARY_REDIRECT,
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for RedirectDecision {
    fn into_response(self) -> Response {
        let status = self.status();
        let mut response = Response::new(Body::empty());
        *response.status_mut() = status;

        if let Self::Redirect { location } = self {
            response.headers_mut().insert(header::LOCATION, location);
        }

        response
    }
}
