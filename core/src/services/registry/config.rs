//! Configuration for the verification code registry

use vg_shared::config::verification::VerificationConfig;

use crate::domain::entities::verification_code::CODE_LENGTH;

/// Default code time-to-live in seconds (1 hour)
pub const DEFAULT_TTL_SECONDS: u64 = 3600;

/// Configuration for the verification code registry
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Number of characters drawn per code
    pub code_length: usize,
    /// Seconds until an issued code expires
    pub ttl_seconds: u64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            code_length: CODE_LENGTH,
            ttl_seconds: DEFAULT_TTL_SECONDS,
        }
    }
}

impl From<&VerificationConfig> for RegistryConfig {
    fn from(config: &VerificationConfig) -> Self {
        Self {
            code_length: config.code_length,
            ttl_seconds: config.code_ttl_seconds,
        }
    }
}
