//! Email verification workflow

use std::sync::Arc;

use tracing::{info, warn};

use vg_shared::validation;

use crate::domain::entities::purpose::Purpose;
use crate::errors::{DomainError, DomainResult, RegistryError};
use crate::repositories::UserDirectory;
use crate::services::registry::{CodeRegistry, CodeStore};
use crate::tasks::{Task, TaskDispatcher};

/// Email ownership verification
///
/// `request_verification` issues a `VERIFY_EMAIL` code and enqueues the
/// verification mail; `confirm` redeems the code and marks the account's
/// email verified.
pub struct EmailVerificationService<S, D, Q>
where
    S: CodeStore,
    D: UserDirectory,
    Q: TaskDispatcher,
{
    registry: Arc<CodeRegistry<S>>,
    directory: Arc<D>,
    dispatcher: Arc<Q>,
}

impl<S, D, Q> EmailVerificationService<S, D, Q>
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

    /// Issue a verification code for the account and enqueue the mail
    ///
    /// The code is durably stored before the task is dispatched; a failed
    /// store write surfaces as an error instead of a false "code sent".
    /// A failed enqueue is logged and not propagated — delivery is
    /// fire-and-forget.
    pub async fn request_verification(&self, email: &str) -> DomainResult<()> {
        validation::validate_email(email)?;

        let user = self
            .directory
            .find_by_email(email)
            .await?
            .ok_or(DomainError::UserNotFound)?;

        if user.is_email_verified {
            return Err(DomainError::EmailAlreadyVerified);
        }

        let issued = self.registry.issue(Purpose::VerifyEmail, user.id).await?;

        if let Err(e) = self
            .dispatcher
            .dispatch(Task::SendVerifyEmail {
                user_id: user.id,
                code: issued.code,
            })
            .await
        {
            warn!(
                user_id = user.id,
                error = %e,
                event = "verify_email_dispatch_failed",
                "Failed to enqueue verification email"
            );
        }

        Ok(())
    }

    /// Redeem a verification code and mark the email verified
    ///
    /// The code is consumed atomically before anything else happens, so a
    /// replayed confirm can never succeed twice. A code issued for a
    /// different account fails with the same `InvalidCode` the caller
    /// would see for an expired or unissued code.
    pub async fn confirm(&self, email: &str, code: &str) -> DomainResult<()> {
        let subject_id = match self.registry.redeem(Purpose::VerifyEmail, code).await {
            Ok(subject_id) => subject_id,
            Err(RegistryError::NotFound) => return Err(DomainError::InvalidCode),
            Err(e) => return Err(e.into()),
        };

        let user = self
            .directory
            .find_by_email(email)
            .await?
            .ok_or(DomainError::UserNotFound)?;

        if subject_id != user.id {
            return Err(DomainError::InvalidCode);
        }

        self.directory.mark_email_verified(user.id).await?;

        info!(
            user_id = user.id,
            event = "email_verified",
            "Email address verified"
        );

        Ok(())
    }
}
