//! Bounded worker pool for batches.
//!
//! Every batch becomes its own tokio task, but a task is only spawned once
//! it holds a semaphore permit, so no more than `max_concurrency` batches
//! are ever in flight. The pool is always drained before `execute` returns.

use crate::scanner::batch::Batch;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

/// Counters describing how a dispatch went.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchSummary {
    /// Batches handed to a worker.
    pub submitted: usize,
    /// Workers that ran to completion.
    pub completed: usize,
    /// Workers that panicked. Their batch is lost but the run continues.
    pub panicked: usize,
    /// Batches never submitted because the run was cancelled.
    pub skipped: usize,
}

/// Dispatches batches to at most `max_concurrency` concurrent workers.
#[derive(Debug, Clone)]
pub struct ScanScheduler {
    max_concurrency: usize,
    cancel: CancellationToken,
}

impl ScanScheduler {
    /// Create a scheduler. A cap of zero is treated as one.
    pub fn new(max_concurrency: usize) -> Self {
        Self {
            max_concurrency: max_concurrency.max(1),
            cancel: CancellationToken::new(),
        }
    }

    /// Stop submitting new batches once `cancel` fires.
    pub fn with_cancel(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn max_concurrency(&self) -> usize {
        self.max_concurrency
    }

    /// Run `worker` once per batch and wait for all of them.
    ///
    /// Batches are submitted in order but may complete in any order. Does
    /// not return until every submitted worker has finished, including
    /// after cancellation.
    pub async fn execute<F, Fut>(&self, batches: Vec<Batch>, worker: F) -> DispatchSummary
    where
        F: Fn(Batch) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let total = batches.len();
        let semaphore = Arc::new(Semaphore::new(self.max_concurrency));
        let mut workers = JoinSet::new();
        let mut summary = DispatchSummary::default();

        tracing::debug!(
            batches = total,
            max_concurrency = self.max_concurrency,
            "dispatching batches"
        );

        for batch in batches {
            let permit = tokio::select! {
                biased;
                _ = self.cancel.cancelled() => break,
                permit = Arc::clone(&semaphore).acquire_owned() => match permit {
                    Ok(permit) => permit,
                    Err(_) => break,
                },
            };

            let job = worker(batch);
            workers.spawn(async move {
                let _permit = permit;
                job.await;
            });
            summary.submitted += 1;
        }
        summary.skipped = total - summary.submitted;

        while let Some(joined) = workers.join_next().await {
            match joined {
                Ok(()) => summary.completed += 1,
                Err(e) => {
                    summary.panicked += 1;
                    tracing::error!(error = %e, "scan worker failed");
                }
            }
        }

        tracing::debug!(?summary, "worker pool drained");
        summary
    }
}
