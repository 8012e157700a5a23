//! The six-stage video generation pipeline.

use crate::{PipelineConfig, RunArchive, RunMetrics, Stage, StageTracker};
use futures::future::join_all;
use mathcast_core::{AnimationPlan, MediaSegment, RequestBuilder, Section, VideoRequest};
use mathcast_error::MathcastResult;
use mathcast_interface::{GeneratedContent, MathModel, Renderer, VoiceSynthesizer};
use mathcast_media::{
    placeholder_scene, Ffmpeg, ScenePipeline, Synchronizer, VideoAssembler, WorkDir,
};
use mathcast_planner::PlanSynthesizer;
use std::path::PathBuf;
use std::sync::Arc;

enum RequestSource {
    Raw(RequestBuilder),
    Validated(VideoRequest),
}

/// The product of a successful run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    /// Path of the final video
    pub video_path: PathBuf,
    /// Performance metrics for the run
    pub metrics: RunMetrics,
}

/// Orchestrates a full generation run over the three backend seams.
pub struct VideoPipeline<M, R, S> {
    model: Arc<M>,
    scenes: ScenePipeline<M, R, S>,
    planner: PlanSynthesizer,
    assembler: VideoAssembler,
    config: PipelineConfig,
}

impl<M, R, S> VideoPipeline<M, R, S>
where
    M: MathModel,
    R: Renderer,
    S: VoiceSynthesizer,
{
    /// Wires a pipeline from its backends and configuration.
    pub fn new(model: Arc<M>, renderer: Arc<R>, synthesizer: Arc<S>, config: PipelineConfig) -> Self {
        let ffmpeg = Ffmpeg::from_env();
        let scenes = ScenePipeline::new(
            model.clone(),
            renderer,
            synthesizer,
            Synchronizer::new(ffmpeg.clone()),
            config.retry_budget,
        );
        let assembler = VideoAssembler::new(ffmpeg, config.output_dir.clone());
        Self {
            model,
            scenes,
            planner: PlanSynthesizer::new(),
            assembler,
            config,
        }
    }

    /// Runs the full pipeline for a raw request.
    ///
    /// On failure the partial metrics (stage timings up to the failure and
    /// the error text) are emitted through the log before the error is
    /// returned.
    #[tracing::instrument(skip_all)]
    pub async fn generate(&self, builder: RequestBuilder) -> MathcastResult<RunOutput> {
        self.run(RequestSource::Raw(builder)).await
    }

    /// Runs the pipeline for a request that already passed validation.
    ///
    /// Used by callers that validate at intake time, like the job server;
    /// the input processing stage is still recorded for a uniform metrics
    /// shape.
    #[tracing::instrument(skip_all)]
    pub async fn generate_validated(&self, request: VideoRequest) -> MathcastResult<RunOutput> {
        self.run(RequestSource::Validated(request)).await
    }

    async fn run(&self, source: RequestSource) -> MathcastResult<RunOutput> {
        let started_at = chrono::Utc::now();
        let mut tracker = StageTracker::new();

        match self.run_stages(source, &mut tracker).await {
            Ok(video_path) => {
                let metrics = RunMetrics::finalize(
                    started_at,
                    tracker.summary(),
                    self.model.usage(),
                    None,
                );
                tracing::info!(
                    total_duration = metrics.total_duration,
                    video = %video_path.display(),
                    "video generation completed"
                );
                Ok(RunOutput {
                    video_path,
                    metrics,
                })
            }
            Err(e) => {
                let metrics = RunMetrics::finalize(
                    started_at,
                    tracker.summary(),
                    self.model.usage(),
                    Some(e.to_string()),
                );
                tracing::error!(
                    total_duration = metrics.total_duration,
                    error = %e,
                    "video generation failed"
                );
                Err(e)
            }
        }
    }

    async fn run_stages(
        &self,
        source: RequestSource,
        tracker: &mut StageTracker,
    ) -> MathcastResult<PathBuf> {
        tracker.start(Stage::InputProcessing);
        let request = match source {
            RequestSource::Raw(builder) => match builder.build() {
                Ok(request) => request,
                Err(e) => {
                    tracker.fail(Stage::InputProcessing);
                    return Err(e);
                }
            },
            RequestSource::Validated(request) => request,
        };
        tracker.end(Stage::InputProcessing);

        tracker.start(Stage::ProblemSolving);
        let explanation = match self.model.explain(&request).await {
            Ok(explanation) => explanation,
            Err(e) => {
                tracker.fail(Stage::ProblemSolving);
                return Err(e);
            }
        };
        tracker.end(Stage::ProblemSolving);

        tracker.start(Stage::AnimationPlanning);
        let plan = match self.make_plan(&request, &explanation).await {
            Ok(plan) => plan,
            Err(e) => {
                tracker.fail(Stage::AnimationPlanning);
                return Err(e);
            }
        };
        tracker.end(Stage::AnimationPlanning);

        tracker.start(Stage::ContentGeneration);
        let content = match self.model.generate_content(&plan).await {
            Ok(content) => content,
            Err(e) => {
                tracker.fail(Stage::ContentGeneration);
                return Err(e);
            }
        };
        tracker.end(Stage::ContentGeneration);

        tracker.start(Stage::IntermediateArchival);
        if self.config.archive_intermediates {
            if let Err(e) = self.archive(&request, &explanation, &plan, &content).await {
                tracker.fail(Stage::IntermediateArchival);
                return Err(e);
            }
        }
        tracker.end(Stage::IntermediateArchival);

        tracker.start(Stage::MediaProduction);
        let video_path = match self.produce_media(&request, &plan, &content, tracker).await {
            Ok(path) => path,
            Err(e) => {
                tracker.fail(Stage::MediaProduction);
                return Err(e);
            }
        };
        tracker.end(Stage::MediaProduction);

        Ok(video_path)
    }

    /// Drafts a plan with the model, falling back to the deterministic
    /// breakdown when the model cannot produce a usable draft.
    async fn make_plan(
        &self,
        request: &VideoRequest,
        explanation: &str,
    ) -> MathcastResult<AnimationPlan> {
        match self.model.plan(request, explanation).await {
            Ok(draft) => self.planner.enhance(draft, *request.category()),
            Err(e) => {
                tracing::warn!(error = %e, "model plan failed, building plan from explanation");
                self.planner
                    .plan_from_explanation(explanation, *request.category(), request.text())
            }
        }
    }

    async fn archive(
        &self,
        request: &VideoRequest,
        explanation: &str,
        plan: &AnimationPlan,
        content: &GeneratedContent,
    ) -> MathcastResult<()> {
        let archive = RunArchive::create(&self.config.output_dir).await?;
        archive.save(request, explanation, plan, content).await
    }

    /// Processes every scene and assembles the final video.
    ///
    /// Scenes fan out concurrently; an individual scene failure is logged
    /// and skipped rather than aborting the stage, and the assembler decides
    /// whether what remains is enough.
    async fn produce_media(
        &self,
        request: &VideoRequest,
        plan: &AnimationPlan,
        content: &GeneratedContent,
        tracker: &StageTracker,
    ) -> MathcastResult<PathBuf> {
        let workdir = WorkDir::create_temp()?;

        let futures = plan.sections.iter().map(|section| {
            let script = content
                .scripts
                .get(&section.id)
                .cloned()
                .unwrap_or_else(|| section.narration.clone());
            // A section the model produced no code for goes straight to the
            // placeholder scene.
            let code = content
                .manim_code
                .get(&section.id)
                .cloned()
                .unwrap_or_else(|| placeholder_scene(&section.id, &section.title));
            self.process_one(section, &plan.title, script, code, &workdir)
        });

        let mut segments: Vec<MediaSegment> = Vec::new();
        for (section, result) in plan.sections.iter().zip(join_all(futures).await) {
            match result {
                Ok(segment) => segments.push(segment),
                Err(e) => {
                    tracing::error!(section = %section.id, error = %e, "scene failed, continuing without it");
                }
            }
        }

        let metadata = serde_json::json!({
            "query": request,
            "animation_plan": plan,
            "generation_timestamp": chrono::Utc::now(),
            "performance_metrics": tracker.summary(),
        });

        self.assembler
            .combine(&segments, &plan.title, workdir.path(), Some(&metadata))
            .await
    }

    async fn process_one(
        &self,
        section: &Section,
        plan_title: &str,
        script: String,
        code: String,
        workdir: &WorkDir,
    ) -> MathcastResult<MediaSegment> {
        self.scenes
            .process_scene(section, plan_title, &script, &code, workdir.path())
            .await
    }
}
