//! Infrastructure layer for external integrations.
//!
//! Implements the ports defined by the domain layer.
//!
//! # Modules
//!
//! - [`store`] - Mapping store clients (Redis and in-memory)
//! - [`metrics`] - Metrics sinks (Prometheus and in-memory counting)

pub mod metrics;
pub mod store;
