use async_trait::async_trait;
use mathcast_core::{AnimationPlan, VideoRequest};
use mathcast_error::{
    CapabilityError, CapabilityErrorKind, MathcastErrorKind, MathcastResult,
};
use mathcast_interface::{
    GeneratedContent, MathModel, PlanDraft, Renderer, RepairContext, VoiceSynthesizer,
};
use mathcast_pipeline::{PipelineConfig, VideoPipeline};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Model stub that fails at a configurable stage and records the plan it
/// was asked to write content for.
struct StubModel {
    explanation: Option<String>,
    plan_fails: bool,
    received_plan: Mutex<Option<AnimationPlan>>,
}

impl StubModel {
    fn new(explanation: Option<&str>, plan_fails: bool) -> Self {
        Self {
            explanation: explanation.map(str::to_string),
            plan_fails,
            received_plan: Mutex::new(None),
        }
    }
}

#[async_trait]
impl MathModel for StubModel {
    async fn explain(&self, _request: &VideoRequest) -> MathcastResult<String> {
        match &self.explanation {
            Some(text) => Ok(text.clone()),
            None => Err(CapabilityError::new(CapabilityErrorKind::Explain(
                "model unavailable".to_string(),
            )))?,
        }
    }

    async fn plan(
        &self,
        _request: &VideoRequest,
        _explanation: &str,
    ) -> MathcastResult<PlanDraft> {
        assert!(self.plan_fails, "plan stub only models the failing path");
        Err(CapabilityError::new(CapabilityErrorKind::Plan(
            "draft was not valid JSON".to_string(),
        )))?
    }

    async fn generate_content(&self, plan: &AnimationPlan) -> MathcastResult<GeneratedContent> {
        *self.received_plan.lock().unwrap() = Some(plan.clone());
        Err(CapabilityError::new(CapabilityErrorKind::ContentGeneration(
            "stopping the run here".to_string(),
        )))?
    }

    async fn fix_code(&self, _context: &RepairContext) -> MathcastResult<Option<String>> {
        unreachable!("fix_code is never reached in these tests")
    }

    fn model_name(&self) -> &str {
        "stub"
    }
}

struct UnusedRenderer;

#[async_trait]
impl Renderer for UnusedRenderer {
    async fn render(
        &self,
        _section_id: &str,
        _code: &str,
        _workdir: &Path,
    ) -> MathcastResult<PathBuf> {
        unreachable!("rendering is never reached in these tests")
    }
}

struct UnusedSynthesizer;

#[async_trait]
impl VoiceSynthesizer for UnusedSynthesizer {
    async fn synthesize(&self, _text: &str) -> MathcastResult<PathBuf> {
        unreachable!("synthesis is never reached in these tests")
    }

    fn service(&self) -> &str {
        "stub"
    }

    fn voice(&self) -> &str {
        "stub"
    }
}

fn pipeline(model: Arc<StubModel>) -> VideoPipeline<StubModel, UnusedRenderer, UnusedSynthesizer> {
    let config = PipelineConfig {
        archive_intermediates: false,
        ..PipelineConfig::default()
    };
    VideoPipeline::new(
        model,
        Arc::new(UnusedRenderer),
        Arc::new(UnusedSynthesizer),
        config,
    )
}

#[tokio::test]
async fn invalid_queries_never_reach_the_model() {
    let model = Arc::new(StubModel::new(None, false));
    let pipeline = pipeline(model);

    let err = pipeline
        .generate(VideoRequest::builder("hi"))
        .await
        .unwrap_err();
    assert!(matches!(err.kind(), MathcastErrorKind::Validation(_)));
}

#[tokio::test]
async fn explanation_failure_aborts_the_run() {
    let model = Arc::new(StubModel::new(None, false));
    let pipeline = pipeline(model);

    let err = pipeline
        .generate(VideoRequest::builder("Explain the chain rule"))
        .await
        .unwrap_err();
    assert!(matches!(err.kind(), MathcastErrorKind::Capability(_)));
    assert!(err.to_string().contains("Explanation failed"));
}

#[tokio::test]
async fn failed_plan_draft_falls_back_to_the_explanation() {
    let explanation = "The chain rule composes derivatives.\n\n\
        Differentiate the outer function first.\n\n\
        Then multiply by the derivative of the inner function.";
    let model = Arc::new(StubModel::new(Some(explanation), true));
    let pipeline = pipeline(model.clone());

    let err = pipeline
        .generate(VideoRequest::builder("Explain the chain rule"))
        .await
        .unwrap_err();
    // The run stops at content generation, which means the fallback plan
    // made it through the planning stage.
    assert!(err.to_string().contains("Content generation failed"));

    let plan = model.received_plan.lock().unwrap().clone().unwrap();
    assert_eq!(plan.title, "Explain the chain rule");
    assert_eq!(plan.sections.len(), 3);
    assert!(plan.sections.iter().all(|s| s.id.starts_with("section")));
    assert!(plan.sections.iter().all(|s| !s.visual_elements.is_empty()));
    assert!(plan.estimated_duration > 0.0);
}
