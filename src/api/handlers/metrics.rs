//! Prometheus scrape endpoint.

use axum::{
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::state::AppState;

/// Renders all recorded metrics in Prometheus text format.
///
/// # Endpoint
///
/// `GET /metrics` on the operations listener
///
/// Returns 404 when no Prometheus recorder is installed.
pub async fn metrics_handler(State(state): State<AppState>) -> Response {
    match &state.metrics_handle {
        Some(handle) => (
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            handle.render(),
        )
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
