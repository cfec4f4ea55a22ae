//! Queue half of the dispatch boundary

use async_trait::async_trait;
use tokio::sync::mpsc;
use tracing::debug;

use vg_core::errors::{DomainError, DomainResult};
use vg_core::repositories::UserDirectory;
use vg_core::tasks::{Task, TaskDispatcher};

use crate::mail::{MailHandlers, MailSender};
use crate::push::PushSender;

use super::worker::TaskWorker;

/// Create a connected dispatcher/worker pair
///
/// The worker owns the receiving end; run it with
/// [`TaskWorker::run`], typically on a spawned task. Dropping every
/// dispatcher clone shuts the worker down once the queue drains.
pub fn task_queue<M, P, D>(
    handlers: MailHandlers<M>,
    push_sender: std::sync::Arc<P>,
    directory: std::sync::Arc<D>,
) -> (QueueDispatcher, TaskWorker<M, P, D>)
where
    M: MailSender,
    P: PushSender,
    D: UserDirectory,
{
    let (sender, receiver) = mpsc::unbounded_channel();
    let dispatcher = QueueDispatcher { sender };
    let worker = TaskWorker::new(receiver, handlers, push_sender, directory);
    (dispatcher, worker)
}

/// Sending half of the task queue
///
/// Cloneable; every workflow service holds one.
#[derive(Clone)]
pub struct QueueDispatcher {
    sender: mpsc::UnboundedSender<Task>,
}

#[async_trait]
impl TaskDispatcher for QueueDispatcher {
    async fn dispatch(&self, task: Task) -> DomainResult<()> {
        debug!(task = task.name(), "Enqueuing task");
        self.sender.send(task).map_err(|e| DomainError::Internal {
            message: format!("Task queue closed: {}", e),
        })
    }
}
