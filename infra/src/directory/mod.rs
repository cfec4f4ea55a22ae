//! In-memory account directory
//!
//! Reference [`UserDirectory`] implementation for development and tests.
//! The real directory lives in another service; passwords here are plain
//! strings and must never leave a test or a local sandbox.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use vg_core::domain::entities::user::User;
use vg_core::errors::{DomainError, DomainResult};
use vg_core::repositories::UserDirectory;

/// In-memory [`UserDirectory`]
#[derive(Default)]
pub struct MemoryUserDirectory {
    users: Mutex<HashMap<i64, User>>,
    passwords: Mutex<HashMap<i64, String>>,
}

impl MemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an account with its password
    pub fn add_user(&self, user: User, password: &str) {
        self.passwords
            .lock()
            .unwrap()
            .insert(user.id, password.to_string());
        self.users.lock().unwrap().insert(user.id, user);
    }

    /// Current state of an account
    pub fn get(&self, id: i64) -> Option<User> {
        self.users.lock().unwrap().get(&id).cloned()
    }
}

#[async_trait]
impl UserDirectory for MemoryUserDirectory {
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<User>> {
        Ok(self.users.lock().unwrap().get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.email.as_deref() == Some(email))
            .cloned())
    }

    async fn find_by_phone(&self, phone: &str) -> DomainResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.phone.as_deref() == Some(phone))
            .cloned())
    }

    async fn mark_email_verified(&self, id: i64) -> DomainResult<()> {
        self.update(id, |user| user.is_email_verified = true)
    }

    async fn mark_phone_verified(&self, id: i64) -> DomainResult<()> {
        self.update(id, |user| user.is_phone_verified = true)
    }

    async fn allow_password_reset(&self, id: i64) -> DomainResult<()> {
        self.update(id, |user| user.is_password_reset_allowed = true)
    }

    async fn set_password(&self, id: i64, password: &str) -> DomainResult<()> {
        if !self.users.lock().unwrap().contains_key(&id) {
            return Err(DomainError::UserNotFound);
        }
        self.passwords
            .lock()
            .unwrap()
            .insert(id, password.to_string());
        Ok(())
    }

    async fn password_matches(&self, id: i64, candidate: &str) -> DomainResult<bool> {
        Ok(self
            .passwords
            .lock()
            .unwrap()
            .get(&id)
            .map(|stored| stored == candidate)
            .unwrap_or(false))
    }
}

impl MemoryUserDirectory {
    fn update(&self, id: i64, apply: impl FnOnce(&mut User)) -> DomainResult<()> {
        let mut users = self.users.lock().unwrap();
        let user = users.get_mut(&id).ok_or(DomainError::UserNotFound)?;
        apply(user);
        Ok(())
    }
}
