//! Unit tests for Redis client helpers

use crate::cache::redis_client::{is_retriable_error, mask_url};

#[test]
fn test_mask_url_with_credentials() {
    let url = "redis://:secretpassword@cache.internal:6379/0";
    let masked = mask_url(url);

    assert!(!masked.contains("secretpassword"));
    assert!(masked.starts_with("redis://"));
    assert!(masked.contains("@cache.internal:6379/0"));
}

#[test]
fn test_mask_url_without_credentials() {
    let url = "redis://localhost:6379";
    assert_eq!(mask_url(url), url);
}

#[test]
fn test_retriable_error_kinds() {
    let io_err = redis::RedisError::from(std::io::Error::new(
        std::io::ErrorKind::ConnectionRefused,
        "connection refused",
    ));
    assert!(is_retriable_error(&io_err));

    let type_err =
        redis::RedisError::from((redis::ErrorKind::TypeError, "unexpected value type"));
    assert!(!is_retriable_error(&type_err));
}
