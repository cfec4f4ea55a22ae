//! Unit tests for the email verification workflow

use std::sync::Arc;

use crate::errors::DomainError;
use crate::services::account::EmailVerificationService;
use crate::services::registry::{CodeRegistry, RegistryConfig};
use crate::tasks::Task;

use super::mocks::{email_user, MockCodeStore, MockDispatcher, MockUserDirectory};

fn service(
    store: Arc<MockCodeStore>,
    directory: Arc<MockUserDirectory>,
    dispatcher: Arc<MockDispatcher>,
) -> EmailVerificationService<MockCodeStore, MockUserDirectory, MockDispatcher> {
    let registry = Arc::new(CodeRegistry::new(store, RegistryConfig::default()));
    EmailVerificationService::new(registry, directory, dispatcher)
}

#[tokio::test]
async fn test_request_dispatches_mail_task() {
    let store = Arc::new(MockCodeStore::new(false));
    let directory = Arc::new(MockUserDirectory::new());
    let dispatcher = Arc::new(MockDispatcher::new(false));
    directory.add_user(email_user(42, "user@example.com"), "passw0rd");

    let service = service(store, directory, dispatcher.clone());
    service.request_verification("user@example.com").await.unwrap();

    let tasks = dispatcher.tasks();
    assert_eq!(tasks.len(), 1);
    match &tasks[0] {
        Task::SendVerifyEmail { user_id, code } => {
            assert_eq!(*user_id, 42);
            assert_eq!(code.len(), 6);
        }
        other => panic!("Unexpected task: {:?}", other),
    }
}

#[tokio::test]
async fn test_request_for_unknown_email_fails() {
    let store = Arc::new(MockCodeStore::new(false));
    let directory = Arc::new(MockUserDirectory::new());
    let dispatcher = Arc::new(MockDispatcher::new(false));

    let service = service(store, directory, dispatcher);
    let result = service.request_verification("ghost@example.com").await;
    assert!(matches!(result, Err(DomainError::UserNotFound)));
}

#[tokio::test]
async fn test_request_for_verified_email_fails() {
    let store = Arc::new(MockCodeStore::new(false));
    let directory = Arc::new(MockUserDirectory::new());
    let dispatcher = Arc::new(MockDispatcher::new(false));
    let mut user = email_user(42, "user@example.com");
    user.is_email_verified = true;
    directory.add_user(user, "passw0rd");

    let service = service(store, directory, dispatcher);
    let result = service.request_verification("user@example.com").await;
    assert!(matches!(result, Err(DomainError::EmailAlreadyVerified)));
}

#[tokio::test]
async fn test_request_with_malformed_email_fails_validation() {
    let store = Arc::new(MockCodeStore::new(false));
    let directory = Arc::new(MockUserDirectory::new());
    let dispatcher = Arc::new(MockDispatcher::new(false));

    let service = service(store, directory, dispatcher.clone());
    let result = service.request_verification("not-an-email").await;
    assert!(matches!(result, Err(DomainError::Validation { .. })));
    assert!(dispatcher.tasks().is_empty());
}

#[tokio::test]
async fn test_store_failure_surfaces_instead_of_code_sent() {
    let store = Arc::new(MockCodeStore::new(true));
    let directory = Arc::new(MockUserDirectory::new());
    let dispatcher = Arc::new(MockDispatcher::new(false));
    directory.add_user(email_user(42, "user@example.com"), "passw0rd");

    let service = service(store, directory, dispatcher.clone());
    let result = service.request_verification("user@example.com").await;

    assert!(matches!(result, Err(DomainError::Registry(_))));
    assert!(dispatcher.tasks().is_empty());
}

#[tokio::test]
async fn test_dispatch_failure_does_not_fail_request() {
    let store = Arc::new(MockCodeStore::new(false));
    let directory = Arc::new(MockUserDirectory::new());
    let dispatcher = Arc::new(MockDispatcher::new(true));
    directory.add_user(email_user(42, "user@example.com"), "passw0rd");

    let service = service(store, directory, dispatcher);
    assert!(service.request_verification("user@example.com").await.is_ok());
}

#[tokio::test]
async fn test_confirm_marks_email_verified_and_consumes_code() {
    let store = Arc::new(MockCodeStore::new(false));
    let directory = Arc::new(MockUserDirectory::new());
    let dispatcher = Arc::new(MockDispatcher::new(false));
    directory.add_user(email_user(42, "user@example.com"), "passw0rd");

    let service = service(store, directory.clone(), dispatcher.clone());
    service.request_verification("user@example.com").await.unwrap();
    let code = dispatcher.last_code().unwrap();

    service.confirm("user@example.com", &code).await.unwrap();
    assert!(directory.get(42).unwrap().is_email_verified);

    // Replay of the same code fails
    let replay = service.confirm("user@example.com", &code).await;
    assert!(matches!(replay, Err(DomainError::InvalidCode)));
}

#[tokio::test]
async fn test_confirm_with_wrong_code_fails() {
    let store = Arc::new(MockCodeStore::new(false));
    let directory = Arc::new(MockUserDirectory::new());
    let dispatcher = Arc::new(MockDispatcher::new(false));
    directory.add_user(email_user(42, "user@example.com"), "passw0rd");

    let service = service(store, directory.clone(), dispatcher);
    let result = service.confirm("user@example.com", "WRONG1").await;
    assert!(matches!(result, Err(DomainError::InvalidCode)));
    assert!(!directory.get(42).unwrap().is_email_verified);
}

#[tokio::test]
async fn test_confirm_with_code_of_other_account_fails() {
    let store = Arc::new(MockCodeStore::new(false));
    let directory = Arc::new(MockUserDirectory::new());
    let dispatcher = Arc::new(MockDispatcher::new(false));
    directory.add_user(email_user(1, "one@example.com"), "passw0rd");
    directory.add_user(email_user(2, "two@example.com"), "passw0rd");

    let service = service(store, directory.clone(), dispatcher.clone());
    service.request_verification("one@example.com").await.unwrap();
    let code = dispatcher.last_code().unwrap();

    let result = service.confirm("two@example.com", &code).await;
    assert!(matches!(result, Err(DomainError::InvalidCode)));
    assert!(!directory.get(2).unwrap().is_email_verified);
}
