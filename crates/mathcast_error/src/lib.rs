//! Error types for the MathCast pipeline.
//!
//! This crate provides the foundation error types used throughout the MathCast
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use mathcast_error::{MathcastResult, ValidationError};
//!
//! fn check_query() -> MathcastResult<String> {
//!     Err(ValidationError::new("query too short"))?
//! }
//!
//! match check_query() {
//!     Ok(text) => println!("valid: {}", text),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod assembly;
mod capability;
mod config;
mod error;
mod http;
mod json;
mod plan;
mod render;
mod scheduling;
mod server;
mod sync;
mod synthesis;
mod validation;

pub use assembly::{AssemblyError, AssemblyErrorKind};
pub use capability::{CapabilityError, CapabilityErrorKind};
pub use config::ConfigError;
pub use error::{MathcastError, MathcastErrorKind, MathcastResult};
pub use http::HttpError;
pub use json::JsonError;
pub use plan::{PlanError, PlanErrorKind};
pub use render::{RenderError, RenderErrorKind};
pub use scheduling::SchedulingError;
pub use server::{ServerError, ServerErrorKind};
pub use sync::{SynchronizationError, SynchronizationErrorKind};
pub use synthesis::{SynthesisError, SynthesisErrorKind};
pub use validation::ValidationError;
