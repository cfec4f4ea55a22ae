//! Task queue and delivery worker
//!
//! The message-passing boundary behind [`TaskDispatcher`]: services push
//! named tasks into an unbounded channel and return immediately; a single
//! async worker drains the channel and routes each task to the mail or
//! push handler. A handler failure is logged and dropped — delivery is
//! at-least-once from the queue's point of view and never rolls back the
//! code issuance that preceded it.
//!
//! [`TaskDispatcher`]: vg_core::tasks::TaskDispatcher

mod queue;
mod worker;

#[cfg(test)]
mod tests;

pub use queue::{task_queue, QueueDispatcher};
pub use worker::TaskWorker;
