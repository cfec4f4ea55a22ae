//! Phone verification workflow

use std::sync::Arc;

use tracing::{info, warn};

use vg_shared::validation;

use crate::domain::entities::user::User;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::UserDirectory;
use crate::services::account::traits::SmsVerifier;

/// Phone number verification through a hosted verify service
///
/// The provider issues and checks the codes itself; this service only
/// orchestrates the account lookups and flag updates around it.
pub struct PhoneVerificationService<D, V>
where
    D: UserDirectory,
    V: SmsVerifier,
{
    directory: Arc<D>,
    verifier: Arc<V>,
}

impl<D, V> PhoneVerificationService<D, V>
where
    D: UserDirectory,
    V: SmsVerifier,
{
    pub fn new(directory: Arc<D>, verifier: Arc<V>) -> Self {
        Self {
            directory,
            verifier,
        }
    }

    /// Ask the provider to send a verification code to the account's phone
    pub async fn request_code(&self, phone: &str) -> DomainResult<()> {
        validation::validate_phone(phone)?;

        let user = self
            .directory
            .find_by_phone(phone)
            .await?
            .ok_or(DomainError::UserNotFound)?;

        self.verifier
            .start_verification(phone)
            .await
            .map_err(|e| {
                warn!(
                    user_id = user.id,
                    error = %e,
                    event = "sms_verification_send_failed",
                    "Could not send verification SMS"
                );
                DomainError::SmsServiceFailure
            })?;

        info!(
            user_id = user.id,
            event = "sms_verification_requested",
            "Requested SMS verification"
        );

        Ok(())
    }

    /// Check a code and mark the phone verified
    pub async fn confirm_phone(&self, phone: &str, code: &str) -> DomainResult<()> {
        let user = self.check(phone, code).await?;
        self.directory.mark_phone_verified(user.id).await?;

        info!(
            user_id = user.id,
            event = "phone_verified",
            "Phone number verified"
        );

        Ok(())
    }

    /// Check a code and unlock password reset for the account
    pub async fn confirm_for_password_reset(&self, phone: &str, code: &str) -> DomainResult<()> {
        let user = self.check(phone, code).await?;
        self.directory.allow_password_reset(user.id).await?;

        info!(
            user_id = user.id,
            event = "password_reset_allowed",
            "Phone verified, password reset unlocked"
        );

        Ok(())
    }

    async fn check(&self, phone: &str, code: &str) -> DomainResult<User> {
        validation::validate_phone(phone)?;

        let user = self
            .directory
            .find_by_phone(phone)
            .await?
            .ok_or(DomainError::UserNotFound)?;

        let valid = self
            .verifier
            .check_code(phone, code)
            .await
            .map_err(|e| {
                warn!(
                    user_id = user.id,
                    error = %e,
                    event = "sms_verification_check_failed",
                    "Could not check verification SMS code"
                );
                DomainError::SmsServiceFailure
            })?;

        if !valid {
            return Err(DomainError::InvalidCode);
        }

        Ok(user)
    }
}
