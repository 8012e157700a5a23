//! Final assembly error types.

/// Kinds of assembly errors.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum AssemblyErrorKind {
    /// A segment's video file was missing at combine time.
    ///
    /// Fatal for the run: it indicates an earlier silent scene failure that
    /// was not degraded to a placeholder.
    #[display("Segment file missing for section '{}': {}", section_id, path)]
    MissingSegment {
        /// Section whose clip is missing
        section_id: String,
        /// Expected path of the missing clip
        path: String,
    },
    /// No segments were available to combine
    #[display("No segments to combine")]
    NoSegments,
    /// The concatenation step failed
    #[display("Concatenation failed: {}", _0)]
    Concat(String),
    /// Failed to write the metadata sidecar
    #[display("Metadata write failed: {}", _0)]
    Metadata(String),
}

/// Assembly error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Assembly error: {} at line {} in {}", kind, line, file)]
pub struct AssemblyError {
    /// The kind of error that occurred
    pub kind: AssemblyErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl AssemblyError {
    /// Create a new assembly error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: AssemblyErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
