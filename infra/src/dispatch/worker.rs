//! Worker half of the dispatch boundary

use std::sync::Arc;

use anyhow::Context;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

use vg_core::repositories::UserDirectory;
use vg_core::tasks::Task;

use crate::mail::{MailHandlers, MailSender};
use crate::push::PushSender;

/// Single consumer of the task queue
///
/// Resolves the account for mail tasks, renders and sends through the
/// handlers, applies push payload defaults. One failed task never stops
/// the loop.
pub struct TaskWorker<M, P, D>
where
    M: MailSender,
    P: PushSender,
    D: UserDirectory,
{
    receiver: mpsc::UnboundedReceiver<Task>,
    handlers: MailHandlers<M>,
    push_sender: Arc<P>,
    directory: Arc<D>,
}

impl<M, P, D> TaskWorker<M, P, D>
where
    M: MailSender,
    P: PushSender,
    D: UserDirectory,
{
    pub(super) fn new(
        receiver: mpsc::UnboundedReceiver<Task>,
        handlers: MailHandlers<M>,
        push_sender: Arc<P>,
        directory: Arc<D>,
    ) -> Self {
        Self {
            receiver,
            handlers,
            push_sender,
            directory,
        }
    }

    /// Drain the queue until every dispatcher is dropped
    pub async fn run(mut self) {
        info!(event = "task_worker_started", "Task worker started");

        while let Some(task) = self.receiver.recv().await {
            let name = task.name();
            if let Err(e) = self.handle(task).await {
                error!(
                    task = name,
                    error = %format!("{:#}", e),
                    event = "task_failed",
                    "Task handler failed"
                );
            }
        }

        info!(event = "task_worker_stopped", "Task queue closed, worker stopping");
    }

    async fn handle(&self, task: Task) -> anyhow::Result<()> {
        match task {
            Task::SendVerifyEmail { user_id, code } => {
                let Some(user) = self
                    .directory
                    .find_by_id(user_id)
                    .await
                    .context("account lookup failed")?
                else {
                    warn!(user_id, event = "task_skipped", "Account gone, dropping mail task");
                    return Ok(());
                };
                self.handlers
                    .verify_email(&user, &code)
                    .await
                    .context("verify email delivery failed")?;
            }
            Task::SendPasswordResetEmail { user_id, code } => {
                let Some(user) = self
                    .directory
                    .find_by_id(user_id)
                    .await
                    .context("account lookup failed")?
                else {
                    warn!(user_id, event = "task_skipped", "Account gone, dropping mail task");
                    return Ok(());
                };
                self.handlers
                    .password_reset_request(&user, &code)
                    .await
                    .context("reset email delivery failed")?;
            }
            Task::SendFirePush { mut message } => {
                message.ensure_click_action();
                self.push_sender
                    .send(&message)
                    .await
                    .context("push delivery failed")?;
            }
        }

        Ok(())
    }
}
