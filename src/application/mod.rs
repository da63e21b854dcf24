//! Application layer.
//!
//! [`resolver::RedirectResolver`] is the request-handling core: it turns a
//! request's host, path, and query into a [`crate::domain::RedirectDecision`]
//! using the [`crate::domain::DomainLookup`] and [`crate::domain::MetricsSink`]
//! it was constructed with.

pub mod resolver;

pub use resolver::{RedirectRequest, RedirectResolver};
