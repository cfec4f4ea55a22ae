//! In-memory verification code store
//!
//! Deadline-based store for development and tests. Semantics match the
//! Redis store: per-key TTL, last write wins, atomic take.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use async_trait::async_trait;

use vg_core::errors::StoreError;
use vg_core::services::registry::CodeStore;

/// In-process [`CodeStore`] with real expiry
///
/// All operations run under one mutex, which gives `take` the same
/// single-winner guarantee `GETDEL` provides on Redis.
#[derive(Default)]
pub struct MemoryCodeStore {
    entries: Mutex<HashMap<String, (String, Instant)>>,
}

impl MemoryCodeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live (non-expired) entries
    pub fn len(&self) -> usize {
        let now = Instant::now();
        self.entries
            .lock()
            .unwrap()
            .values()
            .filter(|(_, deadline)| *deadline > now)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl CodeStore for MemoryCodeStore {
    async fn put_with_ttl(
        &self,
        key: &str,
        value: &str,
        ttl_seconds: u64,
    ) -> Result<(), StoreError> {
        let deadline = Instant::now() + Duration::from_secs(ttl_seconds);
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), (value.to_string(), deadline));
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut entries = self.entries.lock().unwrap();
        match entries.get(key) {
            Some((_, deadline)) if Instant::now() >= *deadline => {
                entries.remove(key);
                Ok(None)
            }
            Some((value, _)) => Ok(Some(value.clone())),
            None => Ok(None),
        }
    }

    async fn take(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut entries = self.entries.lock().unwrap();
        match entries.remove(key) {
            Some((_, deadline)) if Instant::now() >= deadline => Ok(None),
            Some((value, _)) => Ok(Some(value)),
            None => Ok(None),
        }
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}
