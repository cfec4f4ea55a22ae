//! Redis-backed verification code store

use async_trait::async_trait;
use tracing::debug;

use vg_core::errors::StoreError;
use vg_core::services::registry::CodeStore;

use crate::cache::RedisClient;

/// Production [`CodeStore`] over Redis
///
/// Keys arrive already namespaced as `{PURPOSE}:{code}`; an optional
/// deployment prefix is applied on top so several environments can share
/// one Redis database.
#[derive(Clone)]
pub struct RedisCodeStore {
    /// Redis client for store operations
    client: RedisClient,
    /// Optional deployment-wide key prefix
    prefix: Option<String>,
}

impl RedisCodeStore {
    /// Create a new store over a Redis client
    pub fn new(client: RedisClient) -> Self {
        Self {
            client,
            prefix: None,
        }
    }

    /// Apply a deployment-wide key prefix
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    fn format_key(&self, key: &str) -> String {
        format_key(self.prefix.as_deref(), key)
    }
}

/// Build the physical Redis key from an optional deployment prefix
fn format_key(prefix: Option<&str>, key: &str) -> String {
    match prefix {
        Some(prefix) => format!("{}:{}", prefix, key),
        None => key.to_string(),
    }
}

#[async_trait]
impl CodeStore for RedisCodeStore {
    async fn put_with_ttl(
        &self,
        key: &str,
        value: &str,
        ttl_seconds: u64,
    ) -> Result<(), StoreError> {
        let key = self.format_key(key);
        debug!("Storing verification entry under '{}' ({}s TTL)", key, ttl_seconds);

        self.client
            .set_with_expiry(&key, value, ttl_seconds)
            .await
            .map_err(|e| StoreError::new(e.to_string()))
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.client
            .get(&self.format_key(key))
            .await
            .map_err(|e| StoreError::new(e.to_string()))
    }

    async fn take(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.client
            .get_del(&self.format_key(key))
            .await
            .map_err(|e| StoreError::new(e.to_string()))
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.client
            .delete(&self.format_key(key))
            .await
            .map(|_| ())
            .map_err(|e| StoreError::new(e.to_string()))
    }
}
