//! Handlers for the transactional mails
//!
//! One handler per message kind: load the template, substitute the
//! variables, build the subject from the configured project name, send.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use vg_core::domain::entities::user::User;
use vg_shared::config::mail::MailConfig;

use crate::mail::sender::{mask_email, MailSender, OutboundMail};
use crate::InfrastructureError;

const VERIFY_EMAIL_TEMPLATE: &str = include_str!("templates/verify_email.html");
const RESET_PASSWORD_TEMPLATE: &str = include_str!("templates/reset_password.html");

/// Renders and sends the verification and reset mails
pub struct MailHandlers<M: MailSender> {
    sender: Arc<M>,
    config: MailConfig,
}

impl<M: MailSender> MailHandlers<M> {
    pub fn new(sender: Arc<M>, config: MailConfig) -> Self {
        Self { sender, config }
    }

    /// Send the email-verification mail carrying `code`
    pub async fn verify_email(&self, user: &User, code: &str) -> Result<(), InfrastructureError> {
        let subject = format!("Verify your email for {}", self.config.project_name);
        let body = render(
            VERIFY_EMAIL_TEMPLATE,
            &[("{{code}}", code), ("{{url}}", &self.config.verify_email_url)],
        );

        self.deliver(user, subject, body).await
    }

    /// Send the password-reset mail carrying `code`
    pub async fn password_reset_request(
        &self,
        user: &User,
        code: &str,
    ) -> Result<(), InfrastructureError> {
        let subject = format!("Reset your password for {}", self.config.project_name);
        let body = render(
            RESET_PASSWORD_TEMPLATE,
            &[("{{code}}", code), ("{{url}}", &self.config.verify_email_url)],
        );

        self.deliver(user, subject, body).await
    }

    async fn deliver(
        &self,
        user: &User,
        subject: String,
        body: String,
    ) -> Result<(), InfrastructureError> {
        let to = user
            .email
            .as_deref()
            .ok_or_else(|| InfrastructureError::Mail("account has no email address".to_string()))?;

        let mail = OutboundMail {
            id: Uuid::new_v4(),
            subject,
            body,
            to: to.to_string(),
            to_name: user.display_name(),
            from: self.config.from_header(),
            unsubscribe_url: self.config.unsubscribe_url(to),
            created_at: Utc::now(),
        };

        self.sender.send(&mail).await?;

        info!(
            message_id = %mail.id,
            recipient = %mask_email(to),
            event = "mail_sent",
            "Transactional mail handed to sender"
        );

        Ok(())
    }
}

/// Replace template variables in a body
pub(crate) fn render(template: &str, variables: &[(&str, &str)]) -> String {
    let mut body = template.to_string();
    for (key, value) in variables {
        body = body.replace(key, value);
    }
    body
}
