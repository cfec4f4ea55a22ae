//! Shared utilities and common types for Verigate server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Validation utilities (password policy, email/phone format)

pub mod config;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, Environment, LoggingConfig,
    CacheConfig, MailConfig, VerificationConfig,
};
pub use utils::validation;
