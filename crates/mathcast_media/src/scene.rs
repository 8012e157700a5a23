//! Per-scene production: concurrent render and narration, repair cycle,
//! synchronization, and the placeholder fallback.

use crate::{placeholder_scene, Synchronizer};
use mathcast_core::{MediaSegment, RetryBudget, Section};
use mathcast_error::{MathcastError, MathcastErrorKind, MathcastResult};
use mathcast_interface::{MathModel, Renderer, RepairContext, VoiceSynthesizer};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Produces one synchronized media segment per plan section.
///
/// Rendering and narration for a scene run concurrently and are both awaited
/// before the scene is judged; a failed render goes through the AI repair
/// cycle and finally degrades to a placeholder scene, so a single bad scene
/// yields a degraded segment rather than sinking the whole video.
pub struct ScenePipeline<M, R, S> {
    model: Arc<M>,
    renderer: Arc<R>,
    synthesizer: Arc<S>,
    synchronizer: Synchronizer,
    budget: RetryBudget,
}

impl<M, R, S> ScenePipeline<M, R, S>
where
    M: MathModel,
    R: Renderer,
    S: VoiceSynthesizer,
{
    /// Creates a scene pipeline over the given backends.
    pub fn new(
        model: Arc<M>,
        renderer: Arc<R>,
        synthesizer: Arc<S>,
        synchronizer: Synchronizer,
        budget: RetryBudget,
    ) -> Self {
        Self {
            model,
            renderer,
            synthesizer,
            synchronizer,
            budget,
        }
    }

    /// Renders and narrates one section, returning its synchronized segment.
    #[tracing::instrument(skip_all, fields(section = %section.id))]
    pub async fn process_scene(
        &self,
        section: &Section,
        plan_title: &str,
        script: &str,
        code: &str,
        workdir: &Path,
    ) -> MathcastResult<MediaSegment> {
        let (video, audio) = tokio::join!(
            self.render_with_repair(section, plan_title, code, workdir),
            self.synthesizer.synthesize(script)
        );
        let audio = audio?;
        let video = match video {
            Ok(path) => path,
            Err(original) => self.render_placeholder(section, workdir, original).await?,
        };

        let output = workdir.join(format!("{}_synchronized.mp4", section.id));
        let duration = self
            .synchronizer
            .synchronize(&video, &audio, workdir, &output)
            .await?;

        Ok(MediaSegment::new(
            section.id.clone(),
            output,
            audio,
            script,
            duration,
        ))
    }

    /// Renders scene code, feeding failures back to the model for repair.
    ///
    /// The cycle ends on the first successful render, a non-repairable
    /// failure, an exhausted retry budget, or the model declining to propose
    /// a fix. The returned error is always the most recent render failure.
    pub async fn render_with_repair(
        &self,
        section: &Section,
        plan_title: &str,
        code: &str,
        workdir: &Path,
    ) -> MathcastResult<PathBuf> {
        let mut current = code.to_string();
        let mut repairs: u32 = 0;

        loop {
            let err = match self.renderer.render(&section.id, &current, workdir).await {
                Ok(path) => return Ok(path),
                Err(err) => err,
            };

            let repairable = matches!(
                err.kind(),
                MathcastErrorKind::Render(render) if render.kind.is_repairable()
            );
            if !repairable || !self.budget.permits_repair(repairs) {
                return Err(err);
            }

            let context =
                RepairContext::new(section, plan_title, current.clone(), err.to_string(), repairs);
            match self.model.fix_code(&context).await? {
                Some(fixed) => {
                    repairs += 1;
                    tracing::info!(section = %section.id, attempt = repairs, "model proposed a fix, retrying render");
                    current = fixed;
                }
                None => {
                    tracing::warn!(section = %section.id, "model declined to repair, giving up");
                    return Err(err);
                }
            }
        }
    }

    /// Renders the placeholder scene after the repair cycle failed.
    ///
    /// When even the placeholder cannot be rendered the original render
    /// error is surfaced, not the placeholder's.
    async fn render_placeholder(
        &self,
        section: &Section,
        workdir: &Path,
        original: MathcastError,
    ) -> MathcastResult<PathBuf> {
        tracing::warn!(section = %section.id, error = %original, "falling back to placeholder scene");
        let code = placeholder_scene(&section.id, &section.title);
        let placeholder_id = format!("{}_placeholder", section.id);
        match self.renderer.render(&placeholder_id, &code, workdir).await {
            Ok(path) => Ok(path),
            Err(placeholder_err) => {
                tracing::error!(section = %section.id, error = %placeholder_err, "placeholder render failed");
                Err(original)
            }
        }
    }
}
