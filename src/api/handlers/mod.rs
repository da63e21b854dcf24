//! HTTP request handlers.
//!
//! [`redirect`] serves the public listener; [`health`] and [`metrics`] serve
//! the operations listener.

pub mod health;
pub mod metrics;
pub mod redirect;

pub use health::health_handler;
pub use self::metrics::metrics_handler;
pub use redirect::redirect_handler;
