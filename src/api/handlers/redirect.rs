//! Catch-all redirect handler.

use axum::{
    extract::{Request, State},
    response::IntoResponse,
};

use crate::application::RedirectRequest;
use crate::state::AppState;
use crate::utils::extract_host::{client_ip, extract_host};

/// Redirects any request to the destination registered for its host.
///
/// # Endpoint
///
/// Mounted as the router fallback, so it answers every method and path.
///
/// # Responses
///
/// - **307 Temporary Redirect**: `Location: https://<destination><path>[?<query>]`, empty body
/// - **404 Not Found**: host not registered or store unavailable, empty body
///
/// The request body is never read.
pub async fn redirect_handler(State(state): State<AppState>, request: Request) -> impl IntoResponse {
    let (parts, _body) = request.into_parts();
    let client_ip = client_ip(&parts.headers, &parts.extensions);

    state
        .resolver
        .resolve(RedirectRequest {
            host: extract_host(&parts.headers, &parts.uri),
            path: parts.uri.path(),
            query: parts.uri.query(),
            client_ip: client_ip.as_deref(),
        })
        .await
}
