//! Account directory interface.

use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::errors::DomainResult;

/// Account directory consumed by the workflow services
///
/// Lookup and mutation of account records live behind this trait; password
/// storage and comparison are black boxes of the implementation, so no
/// hashing scheme leaks into the domain layer.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Find an account by primary key
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<User>>;

    /// Find an account by email address
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>>;

    /// Find an account by phone number
    async fn find_by_phone(&self, phone: &str) -> DomainResult<Option<User>>;

    /// Mark the account's email address as verified
    async fn mark_email_verified(&self, id: i64) -> DomainResult<()>;

    /// Mark the account's phone number as verified
    async fn mark_phone_verified(&self, id: i64) -> DomainResult<()>;

    /// Allow the account to set a new password after phone verification
    async fn allow_password_reset(&self, id: i64) -> DomainResult<()>;

    /// Replace the account's password
    async fn set_password(&self, id: i64, password: &str) -> DomainResult<()>;

    /// Check a password candidate against the stored credential
    async fn password_matches(&self, id: i64, candidate: &str) -> DomainResult<bool>;
}
