//! Shared server state: the job registry and the priority queue.

use crate::{Job, JobRegistry};
use mathcast_core::VideoRequest;
use mathcast_error::{MathcastResult, SchedulingError};
use mathcast_scheduler::RequestQueue;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, Notify};
use uuid::Uuid;

/// State shared between the HTTP handlers and the pipeline worker.
///
/// Handlers enqueue; a single worker task dequeues, preserving the queue's
/// single-consumer discipline. The registry itself is append-only.
#[derive(Clone, Default)]
pub struct ServerState {
    registry: JobRegistry,
    queue: Arc<Mutex<RequestQueue>>,
    pending: Arc<Mutex<HashMap<u64, Uuid>>>,
    wake: Arc<Notify>,
}

impl ServerState {
    /// Creates empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// The job registry.
    pub fn registry(&self) -> &JobRegistry {
        &self.registry
    }

    /// Registers a job for a validated request and queues it by priority.
    ///
    /// The id mapping is registered under the queue lock, so the worker can
    /// never dequeue an entry whose job is not yet known. Both here and in
    /// [`Self::next_job`] the queue lock is taken before the pending lock.
    pub async fn submit(&self, request: VideoRequest) -> Job {
        let job = self.registry.insert(request.clone()).await;
        {
            let mut queue = self.queue.lock().await;
            let queue_id = queue.enqueue(request);
            self.pending.lock().await.insert(queue_id, job.id);
            tracing::info!(job_id = %job.id, queue_id, priority = *job.request.priority(), "job queued");
        }
        self.wake.notify_one();
        job
    }

    /// Takes the highest-priority pending job, if any.
    ///
    /// # Errors
    ///
    /// Returns a [`SchedulingError`] when a dequeued entry has no registered
    /// job. That mapping is maintained under the queue lock, so a miss means
    /// the queue state is corrupt and the entry cannot be run.
    pub async fn next_job(&self) -> MathcastResult<Option<(Uuid, VideoRequest)>> {
        let mut queue = self.queue.lock().await;
        let Some(queued) = queue.dequeue() else {
            return Ok(None);
        };
        let Some(job_id) = self.pending.lock().await.remove(queued.id()) else {
            return Err(SchedulingError::new(format!(
                "dequeued request {} has no registered job",
                queued.id()
            )))?;
        };
        Ok(Some((job_id, queued.request().clone())))
    }

    /// Waits until a new job may be available.
    pub async fn wait_for_work(&self) {
        self.wake.notified().await;
    }
}
