//! Common validation utilities
//!
//! Field-level checks used by the account workflows: password policy,
//! email format, phone format.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9-.]+$")
        .expect("email regex must compile")
});

static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?1?\d{9,15}$").expect("phone regex must compile")
});

/// Minimum accepted password length
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Validation error with field-level details
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a password candidate against the account password policy
///
/// A password must be at least 8 symbols long, contain at least one digit
/// and at least one letter in lowercase or uppercase.
pub fn validate_password(candidate: &str) -> Result<(), ValidationError> {
    if candidate.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::new(
            "password",
            "Password must be at least 8 symbols",
        ));
    }
    if !candidate.chars().any(|c| c.is_ascii_digit()) {
        return Err(ValidationError::new(
            "password",
            "Password must have at least 1 digit",
        ));
    }
    if !candidate.chars().any(|c| c.is_ascii_alphabetic()) {
        return Err(ValidationError::new(
            "password",
            "Password must have at least 1 character in lowercase or uppercase",
        ));
    }
    Ok(())
}

/// Validate an email address format
pub fn validate_email(candidate: &str) -> Result<(), ValidationError> {
    if EMAIL_REGEX.is_match(candidate) {
        Ok(())
    } else {
        Err(ValidationError::new("email", "Invalid email format"))
    }
}

/// Validate a phone number format (digits with optional leading `+`)
pub fn validate_phone(candidate: &str) -> Result<(), ValidationError> {
    if PHONE_REGEX.is_match(candidate) {
        Ok(())
    } else {
        Err(ValidationError::new("phone", "Invalid phone number format"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_too_short() {
        let result = validate_password("a1b2c3");
        assert!(result.is_err());
        assert!(result.unwrap_err().message.contains("at least 8 symbols"));
    }

    #[test]
    fn test_password_missing_digit() {
        let result = validate_password("abcdefgh");
        assert!(result.is_err());
        assert!(result.unwrap_err().message.contains("1 digit"));
    }

    #[test]
    fn test_password_missing_letter() {
        let result = validate_password("12345678");
        assert!(result.is_err());
        assert!(result.unwrap_err().message.contains("lowercase or uppercase"));
    }

    #[test]
    fn test_password_accepted() {
        assert!(validate_password("Sup3rsecret").is_ok());
        assert!(validate_password("lower1case").is_ok());
    }

    #[test]
    fn test_email_format() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("user.name+tag@sub-domain.io").is_ok());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("missing@tld").is_err());
    }

    #[test]
    fn test_phone_format() {
        assert!(validate_phone("+61412345678").is_ok());
        assert!(validate_phone("61412345678").is_ok());
        assert!(validate_phone("12345").is_err());
        assert!(validate_phone("+0 123").is_err());
    }
}
