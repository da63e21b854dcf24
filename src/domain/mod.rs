//! Domain layer: redirect records, decisions, and the ports the resolver
//! depends on.
//!
//! Nothing in here talks to Redis or Prometheus; concrete implementations of
//! the traits live in [`crate::infrastructure`].
//!
//! # Modules
//!
//! - [`redirect`] - Key derivation, destination composition, and the per-request decision
//! - [`lookup`] - [`DomainLookup`] trait for point reads against the mapping store
//! - [`metrics`] - [`MetricsSink`] trait for redirect hit/miss counters

pub mod lookup;
pub mod metrics;
pub mod redirect;

pub use lookup::DomainLookup;
pub use self::metrics::MetricsSink;
pub use redirect::{RedirectDecision, compose_destination, redirect_key};

#[cfg(test)]
pub use lookup::MockDomainLookup;
#[cfg(test)]
pub use self::metrics::MockMetricsSink;
