//! Mapping store clients.
//!
//! Provides two [`DomainLookup`](crate::domain::DomainLookup) implementations:
//! - [`RedisStore`] - Production Redis-backed store
//! - [`InMemoryStore`] - Process-local map for tests and local development

mod memory_store;
mod redis_store;

pub use memory_store::InMemoryStore;
pub use redis_store::RedisStore;
