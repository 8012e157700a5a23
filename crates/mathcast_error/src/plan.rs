//! Animation plan error types.

/// Kinds of plan errors.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum PlanErrorKind {
    /// The plan contains no sections after enhancement
    #[display("Plan has no sections")]
    Empty,
    /// A section still violates the duration invariant after correction
    #[display("Section '{}' duration {}s does not match element sum {}s", section_id, declared, computed)]
    DurationMismatch {
        /// Section that failed reconciliation
        section_id: String,
        /// Declared section duration
        declared: String,
        /// Sum of its visual element durations
        computed: String,
    },
    /// The plan draft could not be interpreted
    #[display("Invalid plan draft: {}", _0)]
    InvalidDraft(String),
}

/// Plan validation error with location tracking.
///
/// Given the self-healing duration corrections this should not occur in
/// practice; treat it as an assertion rather than a recoverable path.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Plan error: {} at line {} in {}", kind, line, file)]
pub struct PlanError {
    /// The kind of error that occurred
    pub kind: PlanErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl PlanError {
    /// Create a new plan error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PlanErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
