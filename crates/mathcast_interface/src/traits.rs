//! Capability traits for AI, rendering, and speech backends.

use crate::{GeneratedContent, ModelUsage, PlanDraft, RepairContext};
use async_trait::async_trait;
use mathcast_core::{AnimationPlan, VideoRequest};
use mathcast_error::MathcastResult;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// AI model capable of explaining, planning, writing, and repairing.
///
/// All four operations are fallible network calls; implementations retry
/// transient failures internally and surface a `CapabilityError` otherwise.
#[async_trait]
pub trait MathModel: Send + Sync {
    /// Produce a pedagogical explanation of the validated query.
    async fn explain(&self, request: &VideoRequest) -> MathcastResult<String>;

    /// Structure an explanation into a sectioned animation plan draft.
    async fn plan(&self, request: &VideoRequest, explanation: &str) -> MathcastResult<PlanDraft>;

    /// Produce narration scripts and scene source for every plan section.
    async fn generate_content(&self, plan: &AnimationPlan) -> MathcastResult<GeneratedContent>;

    /// Attempt to repair scene source that failed to render.
    ///
    /// Returns `Ok(None)` when the model declines to propose a fix, which
    /// ends the repair cycle even under an unbounded retry budget.
    async fn fix_code(&self, context: &RepairContext) -> MathcastResult<Option<String>>;

    /// Model identifier (e.g. "gpt-4o-mini").
    fn model_name(&self) -> &str;

    /// Accumulated usage per operation, for the run metrics.
    ///
    /// Backends without accounting report nothing.
    fn usage(&self) -> HashMap<String, ModelUsage> {
        HashMap::new()
    }
}

/// Renders animation source for one scene into a video file.
#[async_trait]
pub trait Renderer: Send + Sync {
    /// Render `code` inside `workdir` and return the produced video path.
    ///
    /// A failed render reports a `RenderError` carrying the renderer's
    /// stderr so the repair cycle can feed it back to the model.
    async fn render(
        &self,
        section_id: &str,
        code: &str,
        workdir: &Path,
    ) -> MathcastResult<PathBuf>;
}

/// Synthesizes narration audio from a script.
#[async_trait]
pub trait VoiceSynthesizer: Send + Sync {
    /// Synthesize `text` into an audio file and return its path.
    async fn synthesize(&self, text: &str) -> MathcastResult<PathBuf>;

    /// Engine identifier used in cache keys (e.g. "kokoro").
    fn service(&self) -> &str;

    /// Voice identifier used in cache keys (e.g. "af_heart").
    fn voice(&self) -> &str;
}
