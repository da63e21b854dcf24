//! Error types for the mapping store.
//!
//! The redirect path never sees these: [`crate::domain::DomainLookup::get`]
//! folds them into "not registered". They surface at startup (where a dead
//! store is fatal) and from the admin write operations.

use thiserror::Error;

/// Errors raised while talking to the mapping store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The client could not be created, connected, or failed its PING.
    #[error("store connection error: {0}")]
    Connection(String),

    /// A command was sent but the store rejected it or the connection broke.
    #[error("store operation error: {0}")]
    Operation(String),

    /// The destination value is not a bare hostname.
    #[error("invalid destination '{value}': {reason}")]
    InvalidDestination { value: String, reason: &'static str },
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

impl From<redis::RedisError> for StoreError {
    fn from(e: redis::RedisError) -> Self {
        Self::Operation(e.to_string())
    }
}
