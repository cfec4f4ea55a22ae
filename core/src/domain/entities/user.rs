//! Account record as seen by the workflow services.

use serde::{Deserialize, Serialize};

/// Account record
///
/// Owned by the account directory; services read it and request mutations
/// through the [`UserDirectory`](crate::repositories::UserDirectory) trait.
/// Credentials never appear here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Primary key in the account directory
    pub id: i64,

    /// Email address, if the account registered with one
    pub email: Option<String>,

    /// Phone number, if the account registered with one
    pub phone: Option<String>,

    /// Given name
    #[serde(default)]
    pub name: String,

    /// Family name
    #[serde(default)]
    pub surname: String,

    /// Whether the email address has been verified
    pub is_email_verified: bool,

    /// Whether the phone number has been verified
    pub is_phone_verified: bool,

    /// Whether a phone-verified password reset is currently allowed
    pub is_password_reset_allowed: bool,
}

impl User {
    /// Display name used in mail recipients, `"{name} {surname}"`
    ///
    /// Empty when neither part is set, so senders can fall back to the
    /// bare address.
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.name, self.surname);
        full.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: 1,
            email: Some("user@example.com".to_string()),
            phone: None,
            name: "Ada".to_string(),
            surname: "Lovelace".to_string(),
            is_email_verified: false,
            is_phone_verified: false,
            is_password_reset_allowed: false,
        }
    }

    #[test]
    fn test_display_name() {
        assert_eq!(user().display_name(), "Ada Lovelace");
    }

    #[test]
    fn test_display_name_empty() {
        let mut u = user();
        u.name.clear();
        u.surname.clear();
        assert_eq!(u.display_name(), "");
    }
}
