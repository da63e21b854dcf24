//! In-process mapping store.

use crate::domain::DomainLookup;
use crate::domain::redirect::redirect_key;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

/// A mapping store held in process memory.
///
/// Stands in for Redis in tests and local runs. Keys use the same
/// `{host}:redirect` layout as [`RedisStore`](super::RedisStore), so
/// [`DomainLookup::get`] behaves identically. A store created with
/// [`InMemoryStore::unavailable`] answers every read with `None` and fails
/// its health check, like a Redis that has gone away.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: RwLock<HashMap<String, String>>,
    unavailable: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that behaves like an unreachable backend.
    pub fn unavailable() -> Self {
        Self {
            entries: RwLock::default(),
            unavailable: true,
        }
    }

    /// Registers or replaces the destination for `source`. Last write wins.
    pub fn set_destination(&self, source: &str, destination: &str) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.insert(redirect_key(source), destination.to_string());
    }

    /// Removes the mapping for `source`. Returns whether a mapping existed.
    pub fn remove_destination(&self, source: &str) -> bool {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.remove(&redirect_key(source)).is_some()
    }

    /// Stores a raw key/value pair, bypassing the redirect key layout.
    pub fn insert_raw(&self, key: &str, value: &str) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), value.to_string());
    }
}

#[async_trait]
impl DomainLookup for InMemoryStore {
    async fn get(&self, key: &str) -> Option<String> {
        if self.unavailable {
            return None;
        }

        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.get(key).cloned()
    }

    async fn health_check(&self) -> bool {
        !self.unavailable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_registered() {
        let store = InMemoryStore::new();
        store.set_destination("blog.example.org", "site.example.io");

        assert_eq!(
            store.get("{blog.example.org}:redirect").await,
            Some("site.example.io".to_string())
        );
    }

    #[tokio::test]
    async fn test_get_missing() {
        let store = InMemoryStore::new();

        assert_eq!(store.get("{nobody.example.com}:redirect").await, None);
    }

    #[tokio::test]
    async fn test_last_write_wins() {
        let store = InMemoryStore::new();
        store.set_destination("blog.example.org", "old.example.io");
        store.set_destination("blog.example.org", "new.example.io");

        assert_eq!(
            store.get("{blog.example.org}:redirect").await,
            Some("new.example.io".to_string())
        );
    }

    #[tokio::test]
    async fn test_other_record_classes_do_not_collide() {
        let store = InMemoryStore::new();
        store.insert_raw("{blog.example.org}:alias", "elsewhere.example.io");

        assert_eq!(store.get("{blog.example.org}:redirect").await, None);
    }

    #[tokio::test]
    async fn test_remove_destination() {
        let store = InMemoryStore::new();
        store.set_destination("blog.example.org", "site.example.io");

        assert!(store.remove_destination("blog.example.org"));
        assert!(!store.remove_destination("blog.example.org"));
        assert_eq!(store.get("{blog.example.org}:redirect").await, None);
    }

    #[tokio::test]
    async fn test_unavailable_store_reads_as_missing() {
        let store = InMemoryStore::unavailable();
        store.set_destination("blog.example.org", "site.example.io");

        assert_eq!(store.get("{blog.example.org}:redirect").await, None);
        assert!(!store.health_check().await);
    }
}
