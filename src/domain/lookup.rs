//! Port for point reads against the redirect mapping store.

use async_trait::async_trait;

/// Read side of the key-value store holding redirect mappings.
///
/// Implementations are shared by every in-flight request and must be safe to
/// call concurrently.
///
/// # Failure semantics
///
/// `get` has no error channel. An implementation that fails to reach its
/// backend must log the failure itself and return `None`, so callers treat it
/// exactly like an unregistered key.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::RedisStore`] - Redis-backed store
/// - [`crate::infrastructure::store::InMemoryStore`] - In-process map for tests and local runs
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DomainLookup: Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// # Returns
    ///
    /// - `Some(value)` when the key exists
    /// - `None` when it doesn't, or when the store could not be queried
    async fn get(&self, key: &str) -> Option<String>;

    /// Checks whether the backing store answers.
    ///
    /// Used by the health endpoint only; never called on the redirect path.
    async fn health_check(&self) -> bool;
}
