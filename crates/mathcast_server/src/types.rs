//! API request and response bodies.

use crate::{Job, JobState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body of `POST /generate`.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    /// The mathematical query to explain
    pub query: String,
    /// Optional content category (theorem, problem, concept, definition, proof)
    pub category: Option<String>,
    /// Optional difficulty level
    pub difficulty: Option<String>,
    /// Optional duration ceiling in seconds (30-600)
    pub max_duration: Option<u32>,
    /// Specific areas to focus on
    #[serde(default)]
    pub focus_areas: Vec<String>,
    /// Scheduling priority (0-10)
    #[serde(default)]
    pub priority: u8,
}

/// Response to an accepted generation request.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateResponse {
    /// Identifier to poll with
    pub job_id: Uuid,
    /// Initial job state, always queued
    pub status: JobState,
}

/// Response of `GET /status/{id}`.
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    /// Job identifier
    pub job_id: Uuid,
    /// Current lifecycle state
    pub status: JobState,
    /// When the job was accepted
    pub created_at: DateTime<Utc>,
    /// When the job last changed state
    pub updated_at: DateTime<Utc>,
    /// Coarse completion estimate, 0 to 100
    pub progress: u8,
    /// Human-readable description of the current state
    pub message: String,
    /// Whether the video endpoint will serve a file
    pub video_ready: bool,
    /// Error message for failed jobs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&Job> for StatusResponse {
    fn from(job: &Job) -> Self {
        Self {
            job_id: job.id,
            status: job.state,
            created_at: job.created_at,
            updated_at: job.updated_at,
            progress: job.progress,
            message: job.message.clone(),
            video_ready: job.state == JobState::Completed,
            error: job.error.clone(),
        }
    }
}

/// Error body returned by every failing endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    /// Human-readable error message
    pub error: String,
}

/// Response of `GET /`.
#[derive(Debug, Clone, Serialize)]
pub struct BannerResponse {
    /// Service name
    pub service: &'static str,
    /// Crate version
    pub version: &'static str,
    /// Available endpoints
    pub endpoints: &'static [&'static str],
}
