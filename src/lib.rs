//! # Redirector
//!
//! Host-based HTTP redirect service. Each request's `Host` is looked up in
//! Redis under `{host}:redirect`; a hit is answered with
//! `307 Temporary Redirect` to `https://<destination><path>[?<query>]`, a miss
//! with `404 Not Found`.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Redirect keys, decisions, and the store/metrics traits
//! - **Application Layer** ([`application`]) - The redirect resolver
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis and in-memory stores, metrics sinks
//! - **API Layer** ([`api`]) - Axum handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export REDIS_URL="redis://localhost:6379"
//! export METRICS_LISTEN="0.0.0.0:9090"  # Optional
//!
//! # Register a mapping
//! cargo run --bin redirector-admin -- set blog.example.org site.example.io
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::StoreError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::{RedirectRequest, RedirectResolver};
    pub use crate::domain::{DomainLookup, MetricsSink, RedirectDecision};
    pub use crate::error::StoreError;
    pub use crate::infrastructure::metrics::{CountingMetrics, PrometheusMetrics};
    pub use crate::infrastructure::store::{InMemoryStore, RedisStore};
    pub use crate::state::AppState;
}
