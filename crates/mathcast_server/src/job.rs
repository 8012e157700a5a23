//! Job records and the process-wide registry.

use chrono::{DateTime, Utc};
use mathcast_core::VideoRequest;
use mathcast_pipeline::RunMetrics;
use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Lifecycle state of a generation job.
///
/// Transitions are monotonic: queued, processing, then exactly one of
/// completed or failed. Completed is set only after assembly succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum JobState {
    /// Waiting in the priority queue
    Queued,
    /// A pipeline worker is running the request
    Processing,
    /// The final video exists on disk
    Completed,
    /// The run ended in an error
    Failed,
}

impl JobState {
    fn permits(self, next: JobState) -> bool {
        matches!(
            (self, next),
            (JobState::Queued, JobState::Processing)
                | (JobState::Processing, JobState::Completed)
                | (JobState::Processing, JobState::Failed)
        )
    }
}

/// One video generation job.
#[derive(Debug, Clone, Serialize)]
pub struct Job {
    /// Unique job identifier
    pub id: Uuid,
    /// The validated request this job runs
    pub request: VideoRequest,
    /// Current lifecycle state
    pub state: JobState,
    /// When the job was accepted
    pub created_at: DateTime<Utc>,
    /// When the job last changed state
    pub updated_at: DateTime<Utc>,
    /// Coarse completion estimate, 0 to 100
    pub progress: u8,
    /// Human-readable description of the current state
    pub message: String,
    /// Final video path, present once completed
    pub video_path: Option<PathBuf>,
    /// Run metrics, present once completed
    pub metrics: Option<RunMetrics>,
    /// Error message, present once failed
    pub error: Option<String>,
}

impl Job {
    fn new(request: VideoRequest) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            request,
            state: JobState::Queued,
            created_at: now,
            updated_at: now,
            progress: 0,
            message: "waiting for a worker".to_string(),
            video_path: None,
            metrics: None,
            error: None,
        }
    }
}

/// Process-wide, append-only registry of jobs.
///
/// Jobs are never removed: a failed or completed job stays queryable for
/// the lifetime of the process.
#[derive(Debug, Clone, Default)]
pub struct JobRegistry {
    jobs: Arc<RwLock<HashMap<Uuid, Job>>>,
}

impl JobRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new queued job for the request.
    pub async fn insert(&self, request: VideoRequest) -> Job {
        let job = Job::new(request);
        self.jobs.write().await.insert(job.id, job.clone());
        job
    }

    /// Looks up a job by id.
    pub async fn get(&self, id: Uuid) -> Option<Job> {
        self.jobs.read().await.get(&id).cloned()
    }

    /// Number of jobs ever registered.
    pub async fn len(&self) -> usize {
        self.jobs.read().await.len()
    }

    /// Whether the registry holds no jobs.
    pub async fn is_empty(&self) -> bool {
        self.jobs.read().await.is_empty()
    }

    /// Marks a queued job as picked up by a worker.
    pub async fn mark_processing(&self, id: Uuid) {
        self.transition(id, JobState::Processing, |job| {
            job.progress = 10;
            job.message = "generating video".to_string();
        })
        .await;
    }

    /// Records a successful run.
    pub async fn complete(&self, id: Uuid, video_path: PathBuf, metrics: RunMetrics) {
        self.transition(id, JobState::Completed, |job| {
            job.progress = 100;
            job.message = "video ready".to_string();
            job.video_path = Some(video_path);
            job.metrics = Some(metrics);
        })
        .await;
    }

    /// Records a failed run. The job stays queryable.
    pub async fn fail(&self, id: Uuid, error: String) {
        self.transition(id, JobState::Failed, |job| {
            job.message = "generation failed".to_string();
            job.error = Some(error);
        })
        .await;
    }

    async fn transition(&self, id: Uuid, next: JobState, apply: impl FnOnce(&mut Job)) {
        let mut jobs = self.jobs.write().await;
        let Some(job) = jobs.get_mut(&id) else {
            tracing::warn!(%id, "transition for unknown job");
            return;
        };
        if !job.state.permits(next) {
            tracing::warn!(%id, from = %job.state, to = %next, "rejected job transition");
            return;
        }
        job.state = next;
        job.updated_at = Utc::now();
        apply(job);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mathcast_core::VideoRequest;

    fn request() -> VideoRequest {
        VideoRequest::builder("Explain the chain rule").build().unwrap()
    }

    #[tokio::test]
    async fn jobs_start_queued() {
        let registry = JobRegistry::new();
        let job = registry.insert(request()).await;
        assert_eq!(job.state, JobState::Queued);
        assert_eq!(registry.get(job.id).await.unwrap().state, JobState::Queued);
    }

    #[tokio::test]
    async fn transitions_are_monotonic() {
        let registry = JobRegistry::new();
        let job = registry.insert(request()).await;

        registry.mark_processing(job.id).await;
        assert_eq!(
            registry.get(job.id).await.unwrap().state,
            JobState::Processing
        );

        registry.fail(job.id, "render exploded".to_string()).await;
        let failed = registry.get(job.id).await.unwrap();
        assert_eq!(failed.state, JobState::Failed);
        assert_eq!(failed.error.as_deref(), Some("render exploded"));

        // A terminal job cannot move again.
        registry.mark_processing(job.id).await;
        assert_eq!(registry.get(job.id).await.unwrap().state, JobState::Failed);
    }

    #[tokio::test]
    async fn completion_requires_processing() {
        let registry = JobRegistry::new();
        let job = registry.insert(request()).await;

        // Queued jobs cannot jump straight to completed.
        registry
            .complete(job.id, PathBuf::from("out.mp4"), sample_metrics())
            .await;
        assert_eq!(registry.get(job.id).await.unwrap().state, JobState::Queued);

        registry.mark_processing(job.id).await;
        registry
            .complete(job.id, PathBuf::from("out.mp4"), sample_metrics())
            .await;
        let done = registry.get(job.id).await.unwrap();
        assert_eq!(done.state, JobState::Completed);
        assert_eq!(done.video_path.as_deref(), Some(Path::new("out.mp4")));
    }

    #[tokio::test]
    async fn failed_jobs_are_not_deleted() {
        let registry = JobRegistry::new();
        let job = registry.insert(request()).await;
        registry.mark_processing(job.id).await;
        registry.fail(job.id, "boom".to_string()).await;
        assert_eq!(registry.len().await, 1);
        assert!(registry.get(job.id).await.is_some());
    }

    use std::path::Path;

    fn sample_metrics() -> RunMetrics {
        RunMetrics::finalize(Utc::now(), Default::default(), Default::default(), None)
    }
}
