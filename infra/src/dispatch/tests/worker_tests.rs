//! Unit tests for the dispatch worker

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use vg_core::domain::entities::user::User;
use vg_core::tasks::{PushMessage, Task, TaskDispatcher, DEFAULT_CLICK_ACTION};
use vg_shared::config::mail::MailConfig;

use crate::dispatch::task_queue;
use crate::directory::MemoryUserDirectory;
use crate::mail::{MailHandlers, MockMailSender};
use crate::push::MockPushSender;

fn seeded_directory() -> Arc<MemoryUserDirectory> {
    let directory = Arc::new(MemoryUserDirectory::new());
    directory.add_user(
        User {
            id: 42,
            email: Some("ada@example.com".to_string()),
            phone: None,
            name: "Ada".to_string(),
            surname: "Lovelace".to_string(),
            is_email_verified: false,
            is_phone_verified: false,
            is_password_reset_allowed: false,
        },
        "passw0rd",
    );
    directory
}

async fn drain(worker_handle: tokio::task::JoinHandle<()>) {
    tokio::time::timeout(Duration::from_secs(5), worker_handle)
        .await
        .expect("worker should stop once dispatchers are dropped")
        .unwrap();
}

#[tokio::test]
async fn test_mail_task_is_rendered_and_sent() {
    let sender = Arc::new(MockMailSender::new(false));
    let push = Arc::new(MockPushSender::new());
    let directory = seeded_directory();
    let handlers = MailHandlers::new(sender.clone(), MailConfig::default());

    let (dispatcher, worker) = task_queue(handlers, push, directory);
    let worker_handle = tokio::spawn(worker.run());

    dispatcher
        .dispatch(Task::SendVerifyEmail {
            user_id: 42,
            code: "A1B2C3".to_string(),
        })
        .await
        .unwrap();

    drop(dispatcher);
    drain(worker_handle).await;

    let sent = sender.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "ada@example.com");
    assert!(sent[0].body.contains("A1B2C3"));
}

#[tokio::test]
async fn test_task_for_missing_account_is_dropped() {
    let sender = Arc::new(MockMailSender::new(false));
    let push = Arc::new(MockPushSender::new());
    let directory = Arc::new(MemoryUserDirectory::new());
    let handlers = MailHandlers::new(sender.clone(), MailConfig::default());

    let (dispatcher, worker) = task_queue(handlers, push, directory);
    let worker_handle = tokio::spawn(worker.run());

    dispatcher
        .dispatch(Task::SendPasswordResetEmail {
            user_id: 99,
            code: "A1B2C3".to_string(),
        })
        .await
        .unwrap();

    drop(dispatcher);
    drain(worker_handle).await;

    assert!(sender.sent().is_empty());
}

#[tokio::test]
async fn test_failing_sender_does_not_stop_the_worker() {
    let sender = Arc::new(MockMailSender::new(true));
    let push = Arc::new(MockPushSender::new());
    let directory = seeded_directory();
    let handlers = MailHandlers::new(sender.clone(), MailConfig::default());

    let (dispatcher, worker) = task_queue(handlers, push, directory);
    let worker_handle = tokio::spawn(worker.run());

    for _ in 0..2 {
        dispatcher
            .dispatch(Task::SendVerifyEmail {
                user_id: 42,
                code: "A1B2C3".to_string(),
            })
            .await
            .unwrap();
    }

    drop(dispatcher);
    drain(worker_handle).await;

    // Both tasks reached the sender despite each delivery failing
    assert_eq!(sender.sent().len(), 2);
}

#[tokio::test]
async fn test_push_task_gets_default_click_action() {
    let sender = Arc::new(MockMailSender::new(false));
    let push = Arc::new(MockPushSender::new());
    let directory = seeded_directory();
    let handlers = MailHandlers::new(sender, MailConfig::default());

    let (dispatcher, worker) = task_queue(handlers, push.clone(), directory);
    let worker_handle = tokio::spawn(worker.run());

    dispatcher
        .dispatch(Task::SendFirePush {
            message: PushMessage {
                push_id: "device-token".to_string(),
                title: "Hello".to_string(),
                body: "World".to_string(),
                data: HashMap::new(),
            },
        })
        .await
        .unwrap();

    drop(dispatcher);
    drain(worker_handle).await;

    let messages = push.messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(
        messages[0].data.get("click_action").map(String::as_str),
        Some(DEFAULT_CLICK_ACTION)
    );
}

#[tokio::test]
async fn test_dispatch_after_worker_gone_is_an_error() {
    let sender = Arc::new(MockMailSender::new(false));
    let push = Arc::new(MockPushSender::new());
    let directory = seeded_directory();
    let handlers = MailHandlers::new(sender, MailConfig::default());

    let (dispatcher, worker) = task_queue(handlers, push, directory);
    drop(worker);

    let result = dispatcher
        .dispatch(Task::SendVerifyEmail {
            user_id: 42,
            code: "A1B2C3".to_string(),
        })
        .await;
    assert!(result.is_err());
}
