//! Push notification module

use std::sync::Mutex;

use async_trait::async_trait;
use tracing::info;

use vg_core::tasks::PushMessage;

use crate::InfrastructureError;

/// Single "send to device" operation
#[async_trait]
pub trait PushSender: Send + Sync {
    async fn send(&self, message: &PushMessage) -> Result<(), InfrastructureError>;
}

/// Sender that only logs, for development environments without a provider
pub struct TracingPushSender;

#[async_trait]
impl PushSender for TracingPushSender {
    async fn send(&self, message: &PushMessage) -> Result<(), InfrastructureError> {
        info!(
            title = %message.title,
            event = "push_logged",
            "Push delivery skipped (tracing sender)"
        );
        Ok(())
    }
}

/// Recording sender for tests
#[derive(Default)]
pub struct MockPushSender {
    pub sent: Mutex<Vec<PushMessage>>,
}

impl MockPushSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<PushMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl PushSender for MockPushSender {
    async fn send(&self, message: &PushMessage) -> Result<(), InfrastructureError> {
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}
