//! Key-value store interface for verification codes

use async_trait::async_trait;

use crate::errors::StoreError;

/// Key-value store with per-key TTL, atomic at the single-key level
///
/// Implementations must surface connection failures as [`StoreError`],
/// never as an absent value: the registry relies on that distinction to
/// keep "store down" from reading as "invalid code".
#[async_trait]
pub trait CodeStore: Send + Sync {
    /// Store `value` under `key` with an expiry, overwriting any previous
    /// value (last write wins)
    async fn put_with_ttl(&self, key: &str, value: &str, ttl_seconds: u64)
        -> Result<(), StoreError>;

    /// Read the value under `key`; `None` when absent or expired
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Atomically read and delete the value under `key`
    ///
    /// Must be a single atomic operation: when several callers race on one
    /// key, at most one may observe the value.
    async fn take(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Delete `key`; deleting an absent key is not an error
    async fn remove(&self, key: &str) -> Result<(), StoreError>;
}
