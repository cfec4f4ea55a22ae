//! Domain-specific error types and error handling.
//!
//! Two layers of errors exist here:
//!
//! - [`RegistryError`] for the verification code registry. A missing or
//!   expired code is `NotFound`; an unreachable store is `StoreUnavailable`.
//!   The two are never conflated: a failed store round trip must not be
//!   reported to a user as "invalid code".
//! - [`DomainError`] for the account workflow services. The presentation
//!   layer maps these onto user-visible messages; `InvalidCode` covers
//!   unissued, redeemed, and expired codes alike so callers cannot probe
//!   which case applies.

use thiserror::Error;

use vg_shared::validation::ValidationError as FieldValidationError;

/// Error raised by [`CodeStore`](crate::services::registry::CodeStore)
/// implementations when the underlying store cannot be reached
#[derive(Error, Debug, Clone)]
#[error("{0}")]
pub struct StoreError(pub String);

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Verification code registry errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Code absent, already redeemed, or expired
    #[error("Verification code not found")]
    NotFound,

    /// Underlying key-value store unreachable
    #[error("Verification store unavailable: {message}")]
    StoreUnavailable { message: String },
}

impl From<StoreError> for RegistryError {
    fn from(err: StoreError) -> Self {
        RegistryError::StoreUnavailable { message: err.0 }
    }
}

pub type RegistryResult<T> = Result<T, RegistryError>;

/// Core domain errors for the account workflows
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("User not found")]
    UserNotFound,

    #[error("Email already verified")]
    EmailAlreadyVerified,

    /// Invalid or expired verification code. Deliberately covers the
    /// never-issued, already-redeemed, and expired cases.
    #[error("Invalid or expired verification code")]
    InvalidCode,

    #[error("SMS service failure")]
    SmsServiceFailure,

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to registry errors; workflows map NotFound to InvalidCode
    // before this conversion applies
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

impl From<FieldValidationError> for DomainError {
    fn from(err: FieldValidationError) -> Self {
        DomainError::Validation {
            message: err.message,
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
