//! Password reset workflow

use std::sync::Arc;

use tracing::{info, warn};

use vg_shared::validation;

use crate::domain::entities::purpose::Purpose;
use crate::errors::{DomainError, DomainResult, RegistryError};
use crate::repositories::UserDirectory;
use crate::services::registry::{CodeRegistry, CodeStore};
use crate::tasks::{Task, TaskDispatcher};

/// Password reset by emailed code
///
/// Three steps: `request_reset` issues a `RESET_PASSWORD` code and
/// enqueues the reset mail; `check_code` validates a code without
/// consuming it (so a frontend can gate the new-password form);
/// `submit` changes the password and revokes the spent code.
pub struct PasswordResetService<S, D, Q>
where
    S: CodeStore,
    D: UserDirectory,
    Q: TaskDispatcher,
{
    registry: Arc<CodeRegistry<S>>,
    directory: Arc<D>,
    dispatcher: Arc<Q>,
}

impl<S, D, Q> PasswordResetService<S, D, Q>
where
    S: CodeStore,
    D: UserDirectory,
    Q: TaskDispatcher,
{
    pub fn new(registry: Arc<CodeRegistry<S>>, directory: Arc<D>, dispatcher: Arc<Q>) -> Self {
        Self {
            registry,
            directory,
            dispatcher,
        }
    }

    /// Issue a reset code for the account and enqueue the reset mail
    pub async fn request_reset(&self, email: &str) -> DomainResult<()> {
        validation::validate_email(email)?;

        let user = self
            .directory
            .find_by_email(email)
            .await?
            .ok_or(DomainError::UserNotFound)?;

        let issued = self.registry.issue(Purpose::ResetPassword, user.id).await?;

        if let Err(e) = self
            .dispatcher
            .dispatch(Task::SendPasswordResetEmail {
                user_id: user.id,
                code: issued.code,
            })
            .await
        {
            warn!(
                user_id = user.id,
                error = %e,
                event = "reset_email_dispatch_failed",
                "Failed to enqueue password reset email"
            );
        }

        Ok(())
    }

    /// Validate a reset code for an account without consuming it
    ///
    /// A code bound to a different account reads as invalid; nothing in
    /// the answer reveals whether the code ever existed.
    pub async fn check_code(&self, email: &str, code: &str) -> DomainResult<()> {
        let user = self
            .directory
            .find_by_email(email)
            .await?
            .ok_or(DomainError::UserNotFound)?;

        let subject_id = match self.registry.peek(Purpose::ResetPassword, code).await {
            Ok(subject_id) => subject_id,
            Err(RegistryError::NotFound) => return Err(DomainError::InvalidCode),
            Err(e) => return Err(e.into()),
        };

        if subject_id != user.id {
            return Err(DomainError::InvalidCode);
        }

        Ok(())
    }

    /// Set a new password for the account the code was issued to
    ///
    /// The code stays redeemable until the directory accepts the new
    /// password; only then is it revoked. Reusing the current password is
    /// rejected.
    pub async fn submit(&self, code: &str, new_password: &str) -> DomainResult<()> {
        validation::validate_password(new_password)?;

        let subject_id = match self.registry.peek(Purpose::ResetPassword, code).await {
            Ok(subject_id) => subject_id,
            Err(RegistryError::NotFound) => return Err(DomainError::InvalidCode),
            Err(e) => return Err(e.into()),
        };

        let user = self
            .directory
            .find_by_id(subject_id)
            .await?
            .ok_or(DomainError::UserNotFound)?;

        if self.directory.password_matches(user.id, new_password).await? {
            return Err(DomainError::Validation {
                message: "Old password can't be used as new password".to_string(),
            });
        }

        self.directory.set_password(user.id, new_password).await?;

        // The password is already changed; a failed revoke only leaves the
        // code to expire by TTL
        if let Err(e) = self.registry.revoke(Purpose::ResetPassword, code).await {
            warn!(
                user_id = user.id,
                error = %e,
                event = "reset_code_revoke_failed",
                "Failed to revoke spent reset code"
            );
        }

        info!(
            user_id = user.id,
            event = "password_reset",
            "Password updated via reset code"
        );

        Ok(())
    }
}
