//! HTTP layer.
//!
//! # Modules
//!
//! - [`dto`] - Response bodies for the operations endpoints
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing

pub mod dto;
pub mod handlers;
pub mod middleware;
