//! Core data types for the MathCast video generation pipeline.
//!
//! This crate provides the foundation data types used across all MathCast
//! components: validated requests, animation plans, media segments, and the
//! retry budget for the render-repair cycle.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod plan;
mod request;
mod retry;
mod segment;

pub use plan::{AnimationPlan, Section, VisualElement, VisualStyle};
pub use request::{Category, Difficulty, RequestBuilder, VideoRequest};
pub use retry::RetryBudget;
pub use segment::MediaSegment;
