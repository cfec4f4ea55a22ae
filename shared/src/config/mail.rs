//! Transactional mail configuration module

use serde::{Deserialize, Serialize};

/// Transactional mail configuration
///
/// Holds the sender identity and the frontend links substituted into
/// mail templates.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MailConfig {
    /// Project name shown in subjects and the From header
    pub project_name: String,

    /// Default From address
    pub from_address: String,

    /// Base URL of the frontend (used for unsubscribe links)
    pub frontend_url: String,

    /// Frontend URL the verify-email template links to
    pub verify_email_url: String,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            project_name: String::from("Verigate"),
            from_address: String::from("no-reply@verigate.app"),
            frontend_url: String::from("http://localhost:3000"),
            verify_email_url: String::from("http://localhost:3000/verify-email"),
        }
    }
}

impl MailConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            project_name: std::env::var("PROJECT_NAME")
                .unwrap_or(defaults.project_name),
            from_address: std::env::var("DEFAULT_EMAIL_FROM")
                .unwrap_or(defaults.from_address),
            frontend_url: std::env::var("FRONTEND_URL")
                .unwrap_or(defaults.frontend_url),
            verify_email_url: std::env::var("FRONTEND_VERIFY_EMAIL_URL")
                .unwrap_or(defaults.verify_email_url),
        }
    }

    /// From header value, `Project <address>` form
    pub fn from_header(&self) -> String {
        format!("{} <{}>", self.project_name, self.from_address)
    }

    /// Unsubscribe link for a recipient address
    pub fn unsubscribe_url(&self, email: &str) -> String {
        format!("{}/unsubscribe/{}", self.frontend_url, email)
    }
}
