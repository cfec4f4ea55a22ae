//! Transactional mail module
//!
//! Renders the verification and password-reset mails and hands them to a
//! [`MailSender`]. Provider SDKs stay outside; the shipped senders are a
//! recording mock and a tracing-backed sender for development.

pub mod handlers;
pub mod sender;

#[cfg(test)]
mod tests;

pub use handlers::MailHandlers;
pub use sender::{MailSender, MockMailSender, OutboundMail, TracingMailSender};
