//! HTTP job server error types.

/// Kinds of server errors.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ServerErrorKind {
    /// No job with the given identifier exists
    #[display("Job {} not found", _0)]
    JobNotFound(String),
    /// The job exists but has not completed yet
    #[display("Job {} is not completed yet (current status: {})", job_id, status)]
    JobNotCompleted {
        /// Identifier of the job
        job_id: String,
        /// Current status of the job
        status: String,
    },
    /// The job completed but its artifact is missing on disk
    #[display("Artifact missing for job {}", _0)]
    ArtifactMissing(String),
    /// Failed to bind or serve the listening socket
    #[display("Server bind failed: {}", _0)]
    Bind(String),
}

/// Server error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Server error: {} at line {} in {}", kind, line, file)]
pub struct ServerError {
    /// The kind of error that occurred
    pub kind: ServerErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ServerError {
    /// Create a new server error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ServerErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
