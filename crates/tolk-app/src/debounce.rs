use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

struct Pending {
    cancel: CancellationToken,
    hurry: CancellationToken,
    handle: JoinHandle<()>,
}

/// Runs only the last of a burst of scheduled tasks.
///
/// Scheduling cancels whatever is still waiting out its quiet period. Once a
/// task has started running it is no longer affected by later schedules.
pub struct Debouncer {
    delay: Duration,
    pending: Option<Pending>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Replace the pending task, returning a token that cancels the new one
    pub fn schedule<F>(&mut self, task: F) -> CancellationToken
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();

        let cancel = CancellationToken::new();
        let hurry = CancellationToken::new();
        let delay = self.delay;

        let handle = tokio::spawn({
            let cancel = cancel.clone();
            let hurry = hurry.clone();
            async move {
                tokio::select! {
                    _ = cancel.cancelled() => {
                        tracing::trace!("Debounced task cancelled");
                        return;
                    }
                    _ = hurry.cancelled() => {}
                    _ = tokio::time::sleep(delay) => {}
                }
                task.await;
            }
        });

        self.pending = Some(Pending {
            cancel: cancel.clone(),
            hurry,
            handle,
        });
        cancel
    }

    /// Drop the pending task, if any
    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.cancel.cancel();
        }
    }

    /// Skip the rest of the quiet period; the handle completes when the task does
    pub fn flush(&mut self) -> Option<JoinHandle<()>> {
        let pending = self.pending.take()?;
        pending.hurry.cancel();
        Some(pending.handle)
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
