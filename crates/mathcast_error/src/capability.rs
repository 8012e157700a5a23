//! Errors from the external AI model capabilities.

/// Kinds of capability errors.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum CapabilityErrorKind {
    /// The explanation capability failed
    #[display("Explanation failed: {}", _0)]
    Explain(String),
    /// The plan-drafting capability failed
    #[display("Plan drafting failed: {}", _0)]
    Plan(String),
    /// The content-generation capability failed
    #[display("Content generation failed: {}", _0)]
    ContentGeneration(String),
    /// The code-repair capability failed (distinct from a refusal)
    #[display("Code repair failed: {}", _0)]
    Repair(String),
    /// The model endpoint returned a non-success status
    #[display("Model API error (status {}): {}", status, message)]
    Api {
        /// HTTP status code from the model endpoint
        status: u16,
        /// Response body or error description
        message: String,
    },
    /// The model response could not be parsed into the expected shape
    #[display("Malformed model response: {}", _0)]
    MalformedResponse(String),
}

/// Error from one of the consumed AI capabilities, with location tracking.
///
/// These surface immediately to the caller; only render failures get the
/// AI-assisted repair cycle, and that is driven by [`crate::RenderError`].
///
/// # Examples
///
/// ```
/// use mathcast_error::{CapabilityError, CapabilityErrorKind};
///
/// let err = CapabilityError::new(CapabilityErrorKind::Explain("timeout".to_string()));
/// assert!(format!("{}", err).contains("Explanation failed"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Capability error: {} at line {} in {}", kind, line, file)]
pub struct CapabilityError {
    /// The kind of error that occurred
    pub kind: CapabilityErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl CapabilityError {
    /// Create a new capability error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CapabilityErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
