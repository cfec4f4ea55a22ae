//! # Infrastructure Layer
//!
//! Concrete implementations of the collaborator traits defined in
//! `vg_core`:
//!
//! - **Cache**: Redis client and the Redis-backed verification code store,
//!   plus an in-memory store for development and tests
//! - **Mail**: template rendering and mail senders
//! - **SMS**: provider-side verification doubles
//! - **Push**: push notification senders
//! - **Dispatch**: task queue and the worker that delivers mail and push
//! - **Directory**: in-memory account directory for development and tests

pub mod cache;
pub mod directory;
pub mod dispatch;
pub mod mail;
pub mod push;
pub mod sms;

use thiserror::Error;

/// Infrastructure-specific error types
#[derive(Debug, Error)]
pub enum InfrastructureError {
    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Mail delivery error
    #[error("Mail error: {0}")]
    Mail(String),

    /// SMS service error
    #[error("SMS service error: {0}")]
    Sms(String),

    /// General infrastructure error
    #[error("Infrastructure error: {0}")]
    General(String),
}
