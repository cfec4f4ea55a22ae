//! Business services containing domain logic and use cases.

pub mod account;
pub mod registry;

// Re-export commonly used types
pub use account::{
    EmailVerificationService, PasswordResetService, PhoneVerificationService, SmsVerifier,
};
pub use registry::{CodeRegistry, CodeStore, RegistryConfig};
