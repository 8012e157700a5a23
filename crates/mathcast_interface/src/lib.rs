//! Trait definitions for the external capabilities MathCast depends on.
//!
//! The pipeline is generic over three seams: an AI model that explains,
//! plans, writes, and repairs ([`MathModel`]), a scene renderer that turns
//! animation source into video ([`Renderer`]), and a speech engine that
//! narrates scripts ([`VoiceSynthesizer`]). Production implementations live
//! in `mathcast_models` and `mathcast_media`; tests substitute mocks.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::{MathModel, Renderer, VoiceSynthesizer};
pub use types::{GeneratedContent, ModelUsage, PlanDraft, RepairContext, SectionDraft};
