//! End-to-end orchestration: the six-stage video generation pipeline.
//!
//! Stages run strictly in order (input processing, problem solving,
//! animation planning, content generation, intermediate archival, media
//! production), each timed by a [`StageTracker`] whether it succeeds or
//! fails. Within the media stage, scenes fan out concurrently.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod archive;
mod config;
mod metrics;
mod pipeline;
mod stages;

pub use archive::RunArchive;
pub use config::PipelineConfig;
pub use metrics::RunMetrics;
pub use pipeline::{RunOutput, VideoPipeline};
pub use stages::{Stage, StageSummary, StageTracker};
