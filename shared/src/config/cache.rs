//! Redis cache configuration module

use serde::{Deserialize, Serialize};

/// Redis cache configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Redis connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Connection timeout in seconds
    pub connection_timeout: u64,

    /// Response timeout in seconds
    pub response_timeout: u64,

    /// Optional prefix applied to every cache key
    #[serde(default)]
    pub key_prefix: Option<String>,

    /// Redis database number (0-15)
    #[serde(default)]
    pub database: u8,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            url: String::from("redis://localhost:6379"),
            max_connections: 10,
            connection_timeout: 5,
            response_timeout: 5,
            key_prefix: None,
            database: 0,
        }
    }
}

impl CacheConfig {
    /// Create from environment variables
    ///
    /// `REDIS_URL` wins when set; otherwise the URL is assembled from the
    /// split variables `REDIS_SERVER`, `REDIS_PORT`, `REDIS_PASSWORD` and
    /// `REDIS_APP_DB`.
    pub fn from_env() -> Self {
        let url = std::env::var("REDIS_URL").unwrap_or_else(|_| {
            let server = std::env::var("REDIS_SERVER")
                .unwrap_or_else(|_| "localhost".to_string());
            let port = std::env::var("REDIS_PORT")
                .unwrap_or_else(|_| "6379".to_string());
            let db = std::env::var("REDIS_APP_DB")
                .unwrap_or_else(|_| "0".to_string());
            match std::env::var("REDIS_PASSWORD") {
                Ok(password) if !password.is_empty() => {
                    format!("redis://:{}@{}:{}/{}", password, server, port, db)
                }
                _ => format!("redis://{}:{}/{}", server, port, db),
            }
        });
        let max_connections = std::env::var("REDIS_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .unwrap_or(10);

        Self {
            url,
            max_connections,
            ..Default::default()
        }
    }

    /// Create a new cache configuration with URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Set the key prefix for all cache keys
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = Some(prefix.into());
        self
    }

    /// Set the database number
    pub fn with_database(mut self, db: u8) -> Self {
        self.database = db.min(15);
        self
    }

    /// Generate a cache key with prefix
    pub fn make_key(&self, key: &str) -> String {
        match &self.key_prefix {
            Some(prefix) => format!("{}:{}", prefix, key),
            None => key.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_config_default() {
        let config = CacheConfig::default();
        assert_eq!(config.url, "redis://localhost:6379");
        assert_eq!(config.database, 0);
        assert_eq!(config.max_connections, 10);
    }

    #[test]
    fn test_cache_config_with_prefix() {
        let config = CacheConfig::new("redis://cache:6379")
            .with_prefix("verigate")
            .with_database(2);

        assert_eq!(config.make_key("VERIFY_EMAIL:A1B2C3"), "verigate:VERIFY_EMAIL:A1B2C3");
        assert_eq!(config.database, 2);
    }

    #[test]
    fn test_cache_key_without_prefix() {
        let config = CacheConfig::default();
        assert_eq!(config.make_key("RESET_PASSWORD:XY99ZZ"), "RESET_PASSWORD:XY99ZZ");
    }
}
