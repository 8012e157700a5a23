//! Audio/video synchronization error types.

/// Kinds of synchronization errors.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SynchronizationErrorKind {
    /// Failed to probe the duration of a media file
    #[display("Duration probe failed for {}: {}", path, message)]
    Probe {
        /// Path of the media file being probed
        path: String,
        /// Probe failure description
        message: String,
    },
    /// Failed to extract the final frame of the video
    #[display("Frame extraction failed: {}", _0)]
    FrameExtraction(String),
    /// Failed to materialize the held-frame still clip
    #[display("Still clip creation failed: {}", _0)]
    StillClip(String),
    /// Failed to concatenate or mux the streams
    #[display("Mux failed: {}", _0)]
    Mux(String),
}

/// Synchronization error with location tracking.
///
/// Synchronization failures are not retried; they fail the scene.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Synchronization error: {} at line {} in {}", kind, line, file)]
pub struct SynchronizationError {
    /// The kind of error that occurred
    pub kind: SynchronizationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl SynchronizationError {
    /// Create a new synchronization error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SynchronizationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
