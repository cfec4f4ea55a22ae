//! Traits for provider-side verification integration

use async_trait::async_trait;

/// Provider-side SMS verification
///
/// The provider both delivers and checks phone codes; they never pass
/// through the local registry.
#[async_trait]
pub trait SmsVerifier: Send + Sync {
    /// Ask the provider to deliver a verification code to `phone`
    async fn start_verification(&self, phone: &str) -> Result<(), String>;

    /// Check a user-supplied code with the provider
    async fn check_code(&self, phone: &str, code: &str) -> Result<bool, String>;
}
