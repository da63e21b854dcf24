//! Redis-backed mapping store.

use crate::domain::redirect::{REDIRECT_KEY_SUFFIX, host_from_key, redirect_key};
use crate::domain::DomainLookup;
use crate::error::{StoreError, StoreResult};
use crate::utils::destination::validate_destination;
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, error, info};

/// Redis client for redirect mappings.
///
/// Uses `ConnectionManager` so one multiplexed connection is shared by every
/// request. Reads fail closed: any Redis error during [`DomainLookup::get`] is
/// logged here and reported to the caller as a missing key.
#[derive(Clone)]
pub struct RedisStore {
    client: ConnectionManager,
}

impl RedisStore {
    /// Connects to Redis and verifies the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379/0"`)
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connection`] if the URL is invalid, the connection cannot
    /// be established, or the PING fails. Callers at startup treat this as fatal.
    pub async fn connect(redis_url: &str) -> StoreResult<Self> {
        let client = Client::open(redis_url).map_err(|e| {
            StoreError::Connection(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            StoreError::Connection(format!("Failed to connect to Redis: {}", e))
        })?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| StoreError::Connection(format!("Redis PING failed: {}", e)))?;

        info!("Connected to Redis");

        Ok(Self { client: manager })
    }

    /// Reads the destination registered for `source`, surfacing errors.
    ///
    /// Unlike [`DomainLookup::get`], this distinguishes "not registered" from
    /// "store failed" and is meant for tooling, not the redirect path.
    pub async fn destination(&self, source: &str) -> StoreResult<Option<String>> {
        let mut conn = self.client.clone();
        let destination = conn
            .get::<_, Option<String>>(redirect_key(source))
            .await?;
        Ok(destination)
    }

    /// Registers or replaces the destination for `source`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidDestination`] if `destination` is not a bare
    /// hostname, or [`StoreError::Operation`] if the write fails.
    pub async fn set_destination(&self, source: &str, destination: &str) -> StoreResult<()> {
        validate_destination(destination)?;

        let key = redirect_key(source);
        let mut conn = self.client.clone();
        conn.set::<_, _, ()>(&key, destination).await?;

        debug!("Store SET: {} -> {}", key, destination);
        Ok(())
    }

    /// Removes the mapping for `source`. Returns whether a mapping existed.
    pub async fn remove_destination(&self, source: &str) -> StoreResult<bool> {
        let key = redirect_key(source);
        let mut conn = self.client.clone();
        let deleted = conn.del::<_, i32>(&key).await?;

        debug!("Store DEL: {} (deleted: {})", key, deleted);
        Ok(deleted > 0)
    }

    /// Lists every registered mapping as `(source, destination)` pairs, sorted by source.
    ///
    /// Uses `KEYS`, which blocks Redis while it runs; intended for the admin CLI.
    pub async fn mappings(&self) -> StoreResult<Vec<(String, String)>> {
        let mut conn = self.client.clone();
        let keys = conn
            .keys::<_, Vec<String>>(format!("{{*}}{REDIRECT_KEY_SUFFIX}"))
            .await?;

        let mut mappings = Vec::with_capacity(keys.len());
        for key in keys {
            let Some(source) = host_from_key(&key) else {
                continue;
            };
            if let Some(destination) = conn.get::<_, Option<String>>(&key).await? {
                mappings.push((source.to_string(), destination));
            }
        }

        mappings.sort();
        Ok(mappings)
    }
}

#[async_trait]
impl DomainLookup for RedisStore {
    async fn get(&self, key: &str) -> Option<String> {
        let mut conn = self.client.clone();

        match conn.get::<_, Option<String>>(key).await {
            Ok(Some(value)) => {
                debug!("Store HIT: {} -> {}", key, value);
                Some(value)
            }
            Ok(None) => {
                debug!("Store MISS: {}", key);
                None
            }
            Err(e) => {
                error!(key, error = %e, "Redis GET failed, treating key as unregistered");
                None
            }
        }
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}
