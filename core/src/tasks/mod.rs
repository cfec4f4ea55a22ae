//! Fire-and-forget task dispatch boundary.
//!
//! Workflow services never talk to mail or push providers directly. They
//! enqueue a named [`Task`] through a [`TaskDispatcher`] and return as soon
//! as the verification code is durably stored; an independent worker
//! delivers the message with at-least-once semantics. Delivery failures are
//! logged by the worker and never roll back code issuance.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::DomainResult;

/// Default push action injected when the payload carries none
pub const DEFAULT_CLICK_ACTION: &str = "FLUTTER_NOTIFICATION_CLICK";

/// Push notification payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushMessage {
    /// Device registration token
    pub push_id: String,

    /// Notification title
    pub title: String,

    /// Notification body
    pub body: String,

    /// Opaque data payload delivered with the notification
    #[serde(default)]
    pub data: HashMap<String, String>,
}

impl PushMessage {
    /// Fill in the default `click_action` when the payload has none
    pub fn ensure_click_action(&mut self) {
        self.data
            .entry("click_action".to_string())
            .or_insert_with(|| DEFAULT_CLICK_ACTION.to_string());
    }
}

/// Named unit of background work
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "task", rename_all = "snake_case")]
pub enum Task {
    /// Send an email-verification mail carrying a fresh code
    SendVerifyEmail { user_id: i64, code: String },

    /// Send a password-reset mail carrying a fresh code
    SendPasswordResetEmail { user_id: i64, code: String },

    /// Deliver a push notification
    SendFirePush { message: PushMessage },
}

impl Task {
    /// Stable task name, used for routing and logging
    pub fn name(&self) -> &'static str {
        match self {
            Task::SendVerifyEmail { .. } => "send_verify_email",
            Task::SendPasswordResetEmail { .. } => "send_password_reset_request_email",
            Task::SendFirePush { .. } => "send_fire_push",
        }
    }
}

/// Fire-and-forget task dispatch
///
/// `dispatch` returns once the task is enqueued; no delivery result is
/// observed by the caller.
#[async_trait]
pub trait TaskDispatcher: Send + Sync {
    async fn dispatch(&self, task: Task) -> DomainResult<()>;
}
