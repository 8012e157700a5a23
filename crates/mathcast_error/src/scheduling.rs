//! Scheduler error types.

/// Queue invariant violation in the priority scheduler.
///
/// This indicates a bug rather than a recoverable condition; callers should
/// treat it as fatal.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Scheduling error: {} at line {} in {}", message, line, file)]
pub struct SchedulingError {
    /// The underlying error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl SchedulingError {
    /// Create a new SchedulingError with the given message at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
