//! Turning plan drafts and explanations into renderable plans.

use crate::{breakdown_explanation, estimate_section_duration, template_for};
use mathcast_core::{AnimationPlan, Category, Section};
use mathcast_error::{MathcastResult, PlanError, PlanErrorKind};
use mathcast_interface::PlanDraft;

/// Enriches model plan drafts into renderable animation plans.
///
/// Stateless; the type exists so the pipeline can hold one synthesizer and
/// so tests can exercise enrichment without a model.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlanSynthesizer;

impl PlanSynthesizer {
    /// Creates a synthesizer.
    pub fn new() -> Self {
        Self
    }

    /// Enriches a model-produced draft into a renderable plan.
    ///
    /// Sections lacking visual elements get the category template; every
    /// section duration is replaced by the word-count and animation-type
    /// estimate, and the plan total is recomputed from the sections. The
    /// result is reconciled so the duration invariants hold.
    ///
    /// # Errors
    ///
    /// Returns [`PlanErrorKind::Empty`] when the draft has no sections.
    #[tracing::instrument(skip(self, draft), fields(sections = draft.sections.len()))]
    pub fn enhance(
        &self,
        draft: PlanDraft,
        category: Option<Category>,
    ) -> MathcastResult<AnimationPlan> {
        if draft.sections.is_empty() {
            return Err(PlanError::new(PlanErrorKind::Empty))?;
        }

        let sections: Vec<Section> = draft
            .sections
            .into_iter()
            .enumerate()
            .map(|(i, s)| {
                let id = if s.id.is_empty() {
                    format!("section{}", i + 1)
                } else {
                    s.id
                };
                let visual_elements = if s.visual_elements.is_empty() {
                    template_for(category)
                } else {
                    s.visual_elements
                };
                let duration = estimate_section_duration(&s.narration, &visual_elements);
                Section {
                    id,
                    title: s.title,
                    duration,
                    narration: s.narration,
                    visual_elements,
                    manim_code: None,
                    audio_file: None,
                    video_file: None,
                }
            })
            .collect();

        let estimated_duration = sections.iter().map(|s| s.duration).sum();
        let mut plan = AnimationPlan {
            title: draft.title,
            sections,
            estimated_duration,
            visual_style: draft.visual_style,
        };
        plan.reconcile();
        tracing::info!(
            sections = plan.sections.len(),
            estimated_duration = plan.estimated_duration,
            "plan enriched"
        );
        Ok(plan)
    }

    /// Builds a complete plan directly from an explanation, bypassing the
    /// model's structuring step.
    ///
    /// Used as a fallback when the model cannot produce a usable draft: the
    /// explanation is broken into sections, each given the category template
    /// and an estimated duration.
    ///
    /// # Errors
    ///
    /// Returns [`PlanErrorKind::Empty`] when the explanation contains no
    /// non-blank paragraphs.
    #[tracing::instrument(skip(self, explanation))]
    pub fn plan_from_explanation(
        &self,
        explanation: &str,
        category: Option<Category>,
        title: &str,
    ) -> MathcastResult<AnimationPlan> {
        let raw = breakdown_explanation(explanation);
        if raw.is_empty() {
            return Err(PlanError::new(PlanErrorKind::Empty))?;
        }

        let sections: Vec<Section> = raw
            .into_iter()
            .map(|r| {
                let visual_elements = template_for(category);
                let duration = estimate_section_duration(&r.content, &visual_elements);
                Section {
                    id: r.id,
                    title: r.title,
                    duration,
                    narration: r.content,
                    visual_elements,
                    manim_code: None,
                    audio_file: None,
                    video_file: None,
                }
            })
            .collect();

        let estimated_duration = sections.iter().map(|s| s.duration).sum();
        let mut plan = AnimationPlan {
            title: title.to_string(),
            sections,
            estimated_duration,
            visual_style: Default::default(),
        };
        plan.reconcile();
        Ok(plan)
    }
}
