//! Verification code configuration module

use serde::{Deserialize, Serialize};

/// Default length of generated verification codes
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Default time-to-live for verification codes in seconds (1 hour)
pub const DEFAULT_CODE_TTL_SECONDS: u64 = 3600;

/// Verification code configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerificationConfig {
    /// Number of characters in a generated code
    #[serde(default = "default_code_length")]
    pub code_length: usize,

    /// Seconds until an issued code expires
    #[serde(default = "default_code_ttl")]
    pub code_ttl_seconds: u64,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            code_length: default_code_length(),
            code_ttl_seconds: default_code_ttl(),
        }
    }
}

impl VerificationConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let code_length = std::env::var("VERIFICATION_CODE_LENGTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_code_length);
        let code_ttl_seconds = std::env::var("RESET_CODE_EXPIRE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_code_ttl);

        Self {
            code_length,
            code_ttl_seconds,
        }
    }
}

fn default_code_length() -> usize {
    DEFAULT_CODE_LENGTH
}

fn default_code_ttl() -> u64 {
    DEFAULT_CODE_TTL_SECONDS
}
