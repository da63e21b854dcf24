//! Router configuration for the two listeners.
//!
//! # Public listener
//!
//! - `ANY /*` - Host-based redirect (catch-all fallback, no other routes)
//!
//! # Operations listener
//!
//! - `GET /metrics` - Prometheus exposition
//! - `GET /health`  - Store connectivity check
//!
//! Operations endpoints live on their own listener so that no path on the
//! public listener is reserved.

use crate::api::handlers::{health_handler, metrics_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;

/// Constructs the public redirect router.
///
/// Every request, whatever its method or path, goes to [`redirect_handler`].
/// No path normalization is applied; the handler sees the URI exactly as sent.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .fallback(redirect_handler)
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the operations router serving metrics and health.
pub fn ops_router(state: AppState) -> Router {
    Router::new()
        .route("/metrics", get(metrics_handler))
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(tracing::layer())
}
