//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `cache` - Redis connection configuration
//! - `environment` - Environment detection and logging configuration
//! - `mail` - Transactional mail identity and frontend links
//! - `verification` - Verification code length and expiry

pub mod cache;
pub mod environment;
pub mod mail;
pub mod verification;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use cache::CacheConfig;
pub use environment::{Environment, LoggingConfig};
pub use mail::MailConfig;
pub use verification::VerificationConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    #[serde(default)]
    pub environment: Environment,

    /// Redis cache configuration
    #[serde(default)]
    pub cache: CacheConfig,

    /// Verification code configuration
    #[serde(default)]
    pub verification: VerificationConfig,

    /// Transactional mail configuration
    #[serde(default)]
    pub mail: MailConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            cache: CacheConfig::default(),
            verification: VerificationConfig::default(),
            mail: MailConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from layered sources
    ///
    /// Order of precedence (later wins):
    /// 1. Built-in defaults
    /// 2. `config.{environment}.toml` if present
    /// 3. Environment variables prefixed with `VERIGATE_` (e.g.
    ///    `VERIGATE_CACHE__URL` overrides `cache.url`)
    ///
    /// A `.env` file is loaded first if one exists.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        let environment = Environment::from_env();

        let builder = config::Config::builder()
            .add_source(config::Config::try_from(&AppConfig::default())?)
            .add_source(
                config::File::with_name(environment.config_file()).required(false),
            )
            .add_source(
                config::Environment::with_prefix("VERIGATE").separator("__"),
            );

        let mut app_config: AppConfig = builder.build()?.try_deserialize()?;
        app_config.environment = environment;
        Ok(app_config)
    }

    /// Build configuration purely from process environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            environment: Environment::from_env(),
            cache: CacheConfig::from_env(),
            verification: VerificationConfig::from_env(),
            mail: MailConfig::from_env(),
            logging: LoggingConfig::default(),
        }
    }
}
