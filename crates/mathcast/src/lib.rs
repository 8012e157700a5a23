//! MathCast - AI-narrated mathematical animation videos.
//!
//! MathCast turns a natural-language mathematical query into a finished
//! video: an AI model explains the topic and drafts an animation plan, scene
//! code is rendered with Manim, narration is synthesized and synchronized
//! per scene, and the segments are assembled into one mp4.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use mathcast::{
//!     CachedSynthesizer, ChatClient, KokoroEngine, ManimRenderer, PipelineConfig,
//!     VideoPipeline, VideoRequest,
//! };
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PipelineConfig::from_env();
//!     let model = Arc::new(ChatClient::from_env()?);
//!     let renderer = Arc::new(ManimRenderer::from_env());
//!     let synthesizer = Arc::new(CachedSynthesizer::new(
//!         KokoroEngine::from_env()?,
//!         config.output_dir.join("tts_cache"),
//!     ));
//!     let pipeline = VideoPipeline::new(model, renderer, synthesizer, config);
//!
//!     let output = pipeline
//!         .generate(VideoRequest::builder("Explain the Pythagorean theorem"))
//!         .await?;
//!     println!("Video: {}", output.video_path.display());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! MathCast is organized as a workspace with focused crates:
//!
//! - `mathcast_core` - Requests, plans, segments, retry budgets
//! - `mathcast_error` - Error types
//! - `mathcast_interface` - Model, renderer, and synthesizer seams
//! - `mathcast_scheduler` - Priority queue for pending requests
//! - `mathcast_planner` - Deterministic plan synthesis and timing
//! - `mathcast_media` - Manim rendering, TTS, synchronization, assembly
//! - `mathcast_models` - OpenAI-compatible chat backend
//! - `mathcast_pipeline` - The six-stage orchestrator
//! - `mathcast_server` - HTTP job API
//!
//! This crate (`mathcast`) re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use mathcast_core::{
    AnimationPlan, Category, Difficulty, MediaSegment, RequestBuilder, RetryBudget, Section,
    VideoRequest, VisualElement, VisualStyle,
};
pub use mathcast_error::{MathcastError, MathcastErrorKind, MathcastResult};
pub use mathcast_interface::{
    GeneratedContent, MathModel, ModelUsage, PlanDraft, Renderer, RepairContext, SectionDraft,
    VoiceSynthesizer,
};
pub use mathcast_media::{
    CachedSynthesizer, Ffmpeg, KokoroEngine, ManimRenderer, ScenePipeline, SpeechEngine,
    SyncPlan, Synchronizer, VideoAssembler, WorkDir,
};
pub use mathcast_models::{ChatClient, ChatConfig, UsageTracker};
pub use mathcast_pipeline::{
    PipelineConfig, RunArchive, RunMetrics, RunOutput, Stage, StageSummary, StageTracker,
    VideoPipeline,
};
pub use mathcast_planner::{breakdown_explanation, PlanSynthesizer};
pub use mathcast_scheduler::{QueuedRequest, RequestQueue};
pub use mathcast_server::{Job, JobRegistry, JobState, ServerState};
