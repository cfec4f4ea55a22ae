//! Mail sender trait and development implementations

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use crate::InfrastructureError;

/// A fully rendered mail ready for delivery
#[derive(Debug, Clone)]
pub struct OutboundMail {
    /// Message id assigned at render time
    pub id: Uuid,
    /// Subject line
    pub subject: String,
    /// Rendered HTML body
    pub body: String,
    /// Recipient address
    pub to: String,
    /// Recipient display name; empty means address only
    pub to_name: String,
    /// From header, `Project <address>` form
    pub from: String,
    /// List-Unsubscribe header value
    pub unsubscribe_url: String,
    /// Render timestamp
    pub created_at: DateTime<Utc>,
}

impl OutboundMail {
    /// RFC 5322 recipient, `Name <address>` when a display name is set
    pub fn recipient(&self) -> String {
        if self.to_name.is_empty() {
            self.to.clone()
        } else {
            format!("{} <{}>", self.to_name, self.to)
        }
    }
}

/// Single "send to recipient" operation
///
/// Implementations report success or failure; the dispatch worker logs
/// failures and never rolls back the code issuance that preceded them.
#[async_trait]
pub trait MailSender: Send + Sync {
    async fn send(&self, mail: &OutboundMail) -> Result<(), InfrastructureError>;
}

/// Sender that only logs, for development environments without a provider
pub struct TracingMailSender;

#[async_trait]
impl MailSender for TracingMailSender {
    async fn send(&self, mail: &OutboundMail) -> Result<(), InfrastructureError> {
        info!(
            message_id = %mail.id,
            recipient = %mask_email(&mail.to),
            subject = %mail.subject,
            event = "mail_logged",
            "Mail delivery skipped (tracing sender)"
        );
        Ok(())
    }
}

/// Recording sender for tests
pub struct MockMailSender {
    /// Every mail handed to the sender, delivered or not
    pub attempted: Mutex<Vec<OutboundMail>>,
    pub should_fail: bool,
}

impl MockMailSender {
    pub fn new(should_fail: bool) -> Self {
        Self {
            attempted: Mutex::new(Vec::new()),
            should_fail,
        }
    }

    pub fn sent(&self) -> Vec<OutboundMail> {
        self.attempted.lock().unwrap().clone()
    }
}

#[async_trait]
impl MailSender for MockMailSender {
    async fn send(&self, mail: &OutboundMail) -> Result<(), InfrastructureError> {
        self.attempted.lock().unwrap().push(mail.clone());
        if self.should_fail {
            return Err(InfrastructureError::Mail("provider rejected".to_string()));
        }
        Ok(())
    }
}

/// Mask a recipient address for logging
pub(crate) fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) if local.len() > 1 => {
            format!("{}***@{}", &local[..1], domain)
        }
        Some((_, domain)) => format!("***@{}", domain),
        None => "***".to_string(),
    }
}
