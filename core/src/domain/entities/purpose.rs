//! Workflow tags for verification codes.

use serde::{Deserialize, Serialize};

/// Workflow a verification code belongs to
///
/// The tag is part of the storage key, so two workflows may issue the same
/// code string without colliding. The set is closed on purpose: free-form
/// tags would silently create new keyspaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Purpose {
    /// Email ownership verification
    VerifyEmail,
    /// Password reset requested by an unauthenticated user
    ResetPassword,
    /// Password refresh requested by an authenticated user
    RefreshPassword,
}

impl Purpose {
    /// Tag used in storage keys and task payloads
    pub fn as_tag(&self) -> &'static str {
        match self {
            Purpose::VerifyEmail => "VERIFY_EMAIL",
            Purpose::ResetPassword => "RESET_PASSWORD",
            Purpose::RefreshPassword => "REFRESH_PASSWORD",
        }
    }

    /// Storage key for a code issued under this purpose
    pub fn storage_key(&self, code: &str) -> String {
        format!("{}:{}", self.as_tag(), code)
    }
}

impl std::fmt::Display for Purpose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl std::str::FromStr for Purpose {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "VERIFY_EMAIL" => Ok(Purpose::VerifyEmail),
            "RESET_PASSWORD" => Ok(Purpose::ResetPassword),
            "REFRESH_PASSWORD" => Ok(Purpose::RefreshPassword),
            _ => Err(format!("Unknown verification purpose: {}", s)),
        }
    }
}
