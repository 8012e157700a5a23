//! Animation rendering error types.

/// Kinds of rendering errors.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum RenderErrorKind {
    /// The render process exited with a non-zero status
    #[display("Render process failed with exit code {}: {}", exit_code, stderr)]
    Failed {
        /// Exit code reported by the render process
        exit_code: i32,
        /// Captured standard error output
        stderr: String,
    },
    /// The render process exited cleanly but produced no discoverable artifact.
    ///
    /// Treated as a render failure for retry purposes.
    #[display("No rendered video found under {}", _0)]
    ArtifactNotFound(String),
    /// Failed to spawn or communicate with the render process
    #[display("Render I/O error: {}", _0)]
    Io(String),
}

impl RenderErrorKind {
    /// Whether this failure is eligible for an AI-assisted repair cycle.
    ///
    /// Both process failures and missing artifacts are repairable; I/O errors
    /// (the renderer itself could not be started) are not.
    pub fn is_repairable(&self) -> bool {
        !matches!(self, RenderErrorKind::Io(_))
    }
}

/// Rendering error with location tracking.
///
/// # Examples
///
/// ```
/// use mathcast_error::{RenderError, RenderErrorKind};
///
/// let err = RenderError::new(RenderErrorKind::ArtifactNotFound("/tmp/media".to_string()));
/// assert!(err.kind.is_repairable());
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Render error: {} at line {} in {}", kind, line, file)]
pub struct RenderError {
    /// The kind of error that occurred
    pub kind: RenderErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl RenderError {
    /// Create a new render error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: RenderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
