//! Request validation error types.

/// Validation error raised before any external call is made.
///
/// Validation failures are never retried; the request is rejected as-is.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Invalid query: {} at line {} in {}", message, line, file)]
pub struct ValidationError {
    /// The underlying error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new ValidationError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use mathcast_error::ValidationError;
    ///
    /// let err = ValidationError::new("query too long");
    /// assert!(err.message.contains("too long"));
    /// ```
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
