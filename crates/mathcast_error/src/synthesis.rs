//! Voice synthesis error types.

/// Kinds of synthesis errors.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SynthesisErrorKind {
    /// The speech engine reported a failure
    #[display("Speech engine failed: {}", _0)]
    Engine(String),
    /// Failed to read or write the synthesis cache
    #[display("Synthesis cache error: {}", _0)]
    Cache(String),
    /// Failed to spawn or communicate with the synthesis process
    #[display("Synthesis I/O error: {}", _0)]
    Io(String),
}

/// Voice synthesis error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Synthesis error: {} at line {} in {}", kind, line, file)]
pub struct SynthesisError {
    /// The kind of error that occurred
    pub kind: SynthesisErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl SynthesisError {
    /// Create a new synthesis error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SynthesisErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
