//! Plan synthesis: scene breakdown, timing estimation, and enrichment.
//!
//! The model produces a rough plan draft; this crate turns drafts into
//! renderable [`mathcast_core::AnimationPlan`]s by splitting explanations
//! into sections, filling in template visual elements, and replacing the
//! model's timing guesses with word-count and animation-type estimates.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod breakdown;
mod planner;
mod templates;
mod timing;

pub use breakdown::{breakdown_explanation, RawSection, MAX_SECTIONS};
pub use planner::PlanSynthesizer;
pub use templates::template_for;
pub use timing::{
    estimate_animation_duration, estimate_narration_duration, estimate_section_duration,
};
