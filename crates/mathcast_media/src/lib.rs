//! Media production for MathCast: rendering, voice synthesis, audio/video
//! synchronization, and final assembly.
//!
//! The crate wraps two subprocess tools (Manim for rendering, ffmpeg for
//! everything audio/video) behind the `mathcast_interface` seams, and adds
//! the per-scene pipeline that ties them together: render and narrate
//! concurrently, synchronize the results, and degrade failed renders to a
//! placeholder scene after the repair cycle runs out.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod assembler;
mod ffmpeg;
mod placeholder;
mod renderer;
mod scene;
mod sync;
mod voice;
mod workdir;

pub use assembler::VideoAssembler;
pub use ffmpeg::{Ffmpeg, FfmpegFailure};
pub use placeholder::placeholder_scene;
pub use renderer::ManimRenderer;
pub use scene::ScenePipeline;
pub use sync::{SyncPlan, Synchronizer};
pub use voice::{CachedSynthesizer, KokoroEngine, SpeechEngine};
pub use workdir::WorkDir;
