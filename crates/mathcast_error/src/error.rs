//! Top-level error wrapper types.

use crate::{
    AssemblyError, CapabilityError, ConfigError, HttpError, JsonError, PlanError, RenderError,
    SchedulingError, ServerError, SynchronizationError, SynthesisError, ValidationError,
};

/// The foundation error enum covering every failure category in the pipeline.
///
/// # Examples
///
/// ```
/// use mathcast_error::{MathcastError, ValidationError};
///
/// let validation = ValidationError::new("query too short");
/// let err: MathcastError = validation.into();
/// assert!(format!("{}", err).contains("Invalid query"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum MathcastErrorKind {
    /// Bad request shape, rejected before any external call
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Queue invariant violation
    #[from(SchedulingError)]
    Scheduling(SchedulingError),
    /// External AI capability failure
    #[from(CapabilityError)]
    Capability(CapabilityError),
    /// Animation rendering failure
    #[from(RenderError)]
    Render(RenderError),
    /// Voice synthesis failure
    #[from(SynthesisError)]
    Synthesis(SynthesisError),
    /// Audio/video synchronization failure
    #[from(SynchronizationError)]
    Synchronization(SynchronizationError),
    /// Final assembly failure
    #[from(AssemblyError)]
    Assembly(AssemblyError),
    /// Animation plan validation failure
    #[from(PlanError)]
    Plan(PlanError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// Job server error
    #[from(ServerError)]
    Server(ServerError),
}

/// MathCast error with kind discrimination.
///
/// # Examples
///
/// ```
/// use mathcast_error::{MathcastResult, ConfigError};
///
/// fn might_fail() -> MathcastResult<()> {
///     Err(ConfigError::new("MATHCAST_MODEL_URL not set"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("ok"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("MathCast Error: {}", _0)]
pub struct MathcastError(Box<MathcastErrorKind>);

impl MathcastError {
    /// Create a new error from a kind.
    pub fn new(kind: MathcastErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &MathcastErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to MathcastErrorKind
impl<T> From<T> for MathcastError
where
    T: Into<MathcastErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for MathCast operations.
pub type MathcastResult<T> = std::result::Result<T, MathcastError>;
