//! Verification code registry implementation

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::entities::purpose::Purpose;
use crate::domain::entities::verification_code::VerificationCode;
use crate::errors::{RegistryError, RegistryResult};

use super::config::RegistryConfig;
use super::traits::CodeStore;

/// Registry for single-use, time-boxed verification codes
///
/// Each operation is one round trip to the injected store. The registry
/// holds no state of its own, so one instance can be shared freely between
/// concurrent request handlers and workers.
///
/// Per-code lifecycle: `ISSUED -> (REDEEMED | EXPIRED)`, both terminal.
/// Redemption is atomic; expiry is enforced by the store TTL.
pub struct CodeRegistry<S: CodeStore> {
    /// Key-value store holding `(purpose, code) -> subject` mappings
    store: Arc<S>,
    /// Registry configuration
    config: RegistryConfig,
}

impl<S: CodeStore> CodeRegistry<S> {
    /// Create a new registry over a store handle
    pub fn new(store: Arc<S>, config: RegistryConfig) -> Self {
        Self { store, config }
    }

    /// Issue a new code for an account
    ///
    /// Generates a random code, stores the `(purpose, code) -> subject_id`
    /// mapping with the configured TTL, and returns the code. A colliding
    /// key silently overwrites the previous mapping; with a 36^6 keyspace
    /// that tradeoff is accepted rather than probed for.
    ///
    /// A store failure is returned as `StoreUnavailable` so the caller
    /// never reports "code sent" for a code that was not durably stored.
    pub async fn issue(
        &self,
        purpose: Purpose,
        subject_id: i64,
    ) -> RegistryResult<VerificationCode> {
        let verification_code = VerificationCode::generate(
            purpose,
            subject_id,
            self.config.code_length,
            self.config.ttl_seconds,
        );

        self.store
            .put_with_ttl(
                &verification_code.storage_key(),
                &subject_id.to_string(),
                self.config.ttl_seconds,
            )
            .await
            .map_err(|e| {
                warn!(
                    purpose = %purpose,
                    subject_id = subject_id,
                    error = %e,
                    event = "code_issue_failed",
                    "Failed to store verification code"
                );
                RegistryError::from(e)
            })?;

        info!(
            purpose = %purpose,
            subject_id = subject_id,
            ttl_seconds = self.config.ttl_seconds,
            event = "code_issued",
            "Issued verification code"
        );

        Ok(verification_code)
    }

    /// Look up a code without consuming it
    ///
    /// Returns the subject the code was issued for, or `NotFound` when the
    /// key is absent or expired. Used to validate a code before the next
    /// step of a multi-step flow.
    pub async fn peek(&self, purpose: Purpose, code: &str) -> RegistryResult<i64> {
        let value = self.store.get(&purpose.storage_key(code)).await?;
        Self::decode_subject(purpose, value)
    }

    /// Redeem a code: read and invalidate as one atomic operation
    ///
    /// Once a call returns a subject, every concurrent or subsequent call
    /// with the same `(purpose, code)` returns `NotFound`. Exactly-once
    /// redemption rests on the store's atomic take.
    pub async fn redeem(&self, purpose: Purpose, code: &str) -> RegistryResult<i64> {
        let value = self.store.take(&purpose.storage_key(code)).await?;
        let subject_id = Self::decode_subject(purpose, value)?;

        info!(
            purpose = %purpose,
            subject_id = subject_id,
            event = "code_redeemed",
            "Redeemed verification code"
        );

        Ok(subject_id)
    }

    /// Delete a code unconditionally
    ///
    /// Idempotent; used to garbage-collect a code after its value has been
    /// consumed by an outer workflow.
    pub async fn revoke(&self, purpose: Purpose, code: &str) -> RegistryResult<()> {
        self.store.remove(&purpose.storage_key(code)).await?;

        info!(
            purpose = %purpose,
            event = "code_revoked",
            "Revoked verification code"
        );

        Ok(())
    }

    /// Decode a stored subject id, mapping an absent value to `NotFound`
    fn decode_subject(purpose: Purpose, value: Option<String>) -> RegistryResult<i64> {
        let raw = value.ok_or(RegistryError::NotFound)?;
        raw.parse::<i64>().map_err(|_| {
            warn!(
                purpose = %purpose,
                event = "code_entry_corrupt",
                "Stored subject id is not an integer"
            );
            RegistryError::StoreUnavailable {
                message: "corrupt subject entry".to_string(),
            }
        })
    }
}
