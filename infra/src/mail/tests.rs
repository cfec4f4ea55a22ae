//! Tests for mail rendering and handlers

use std::sync::Arc;

use vg_core::domain::entities::user::User;
use vg_shared::config::mail::MailConfig;

use crate::mail::handlers::{render, MailHandlers};
use crate::mail::sender::{mask_email, MockMailSender};
use crate::InfrastructureError;

fn mail_user() -> User {
    User {
        id: 42,
        email: Some("ada@example.com".to_string()),
        phone: None,
        name: "Ada".to_string(),
        surname: "Lovelace".to_string(),
        is_email_verified: false,
        is_phone_verified: false,
        is_password_reset_allowed: false,
    }
}

#[test]
fn test_render_replaces_all_variables() {
    let template = "Code {{code}}, open {{url}} ({{code}} again)";
    let body = render(template, &[("{{code}}", "A1B2C3"), ("{{url}}", "https://x")]);

    assert_eq!(body, "Code A1B2C3, open https://x (A1B2C3 again)");
    assert!(!body.contains("{{"));
}

#[test]
fn test_render_leaves_unknown_placeholders() {
    let body = render("Hello {{name}}", &[("{{code}}", "A1B2C3")]);
    assert_eq!(body, "Hello {{name}}");
}

#[test]
fn test_mask_email() {
    assert_eq!(mask_email("ada@example.com"), "a***@example.com");
    assert_eq!(mask_email("a@example.com"), "***@example.com");
    assert_eq!(mask_email("not-an-address"), "***");
}

#[tokio::test]
async fn test_verify_email_renders_code_and_recipient() {
    let sender = Arc::new(MockMailSender::new(false));
    let handlers = MailHandlers::new(sender.clone(), MailConfig::default());

    handlers.verify_email(&mail_user(), "A1B2C3").await.unwrap();

    let sent = sender.sent();
    assert_eq!(sent.len(), 1);
    let mail = &sent[0];
    assert_eq!(mail.to, "ada@example.com");
    assert_eq!(mail.recipient(), "Ada Lovelace <ada@example.com>");
    assert!(mail.subject.contains("Verify your email"));
    assert!(mail.body.contains("A1B2C3"));
    assert!(!mail.body.contains("{{code}}"));
    assert!(mail.body.contains(&MailConfig::default().verify_email_url));
}

#[tokio::test]
async fn test_password_reset_mail_subject() {
    let sender = Arc::new(MockMailSender::new(false));
    let handlers = MailHandlers::new(sender.clone(), MailConfig::default());

    handlers
        .password_reset_request(&mail_user(), "ZZTOP1")
        .await
        .unwrap();

    let sent = sender.sent();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].subject.contains("Reset your password"));
    assert!(sent[0].body.contains("ZZTOP1"));
}

#[tokio::test]
async fn test_user_without_email_is_an_error() {
    let sender = Arc::new(MockMailSender::new(false));
    let handlers = MailHandlers::new(sender.clone(), MailConfig::default());

    let mut user = mail_user();
    user.email = None;

    let result = handlers.verify_email(&user, "A1B2C3").await;
    assert!(matches!(result, Err(InfrastructureError::Mail(_))));
    assert!(sender.sent().is_empty());
}

#[tokio::test]
async fn test_sender_failure_propagates_to_handler_caller() {
    let sender = Arc::new(MockMailSender::new(true));
    let handlers = MailHandlers::new(sender.clone(), MailConfig::default());

    let result = handlers.verify_email(&mail_user(), "A1B2C3").await;
    assert!(matches!(result, Err(InfrastructureError::Mail(_))));
    // The attempt was still recorded
    assert_eq!(sender.sent().len(), 1);
}
