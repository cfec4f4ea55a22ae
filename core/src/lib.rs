//! # Verigate Core
//!
//! Core business logic and domain layer for the Verigate backend.
//! This crate contains domain entities, the verification code registry,
//! account workflow services, repository interfaces, the task-dispatch
//! boundary, and error types.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;
pub mod tasks;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
pub use tasks::{PushMessage, Task, TaskDispatcher};
