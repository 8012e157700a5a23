//! Transfer types exchanged across the capability seams.

use mathcast_core::{Section, VisualElement, VisualStyle};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An animation plan as produced by the model, before enrichment.
///
/// Drafts carry no file paths or generated code; the planner turns a draft
/// into a full [`mathcast_core::AnimationPlan`] by filling defaults,
/// recomputing timing, and reconciling durations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanDraft {
    /// Title of the video
    pub title: String,
    /// Ordered section drafts
    pub sections: Vec<SectionDraft>,
    /// Model-estimated total duration in seconds
    #[serde(default)]
    pub estimated_duration: f64,
    /// Visual style guidelines, defaulted when the model omits them
    #[serde(default)]
    pub visual_style: VisualStyle,
}

/// One section of a model-produced plan draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionDraft {
    /// Identifier within the plan (e.g. "section1")
    pub id: String,
    /// Title of the section
    pub title: String,
    /// Model-estimated duration in seconds
    #[serde(default)]
    pub duration: f64,
    /// Narration script for the section
    pub narration: String,
    /// Visual elements, possibly with missing or inconsistent durations
    #[serde(default)]
    pub visual_elements: Vec<VisualElement>,
}

/// Narration scripts and animation source produced for a plan.
///
/// Both maps are keyed by section id. Consumers degrade gracefully over
/// gaps: a missing script falls back to the section narration and missing
/// scene source becomes a placeholder scene.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneratedContent {
    /// Narration script per section id
    pub scripts: HashMap<String, String>,
    /// Manim scene source per section id
    pub manim_code: HashMap<String, String>,
}

/// Accumulated model usage for one capability operation.
///
/// Reported through [`crate::MathModel::usage`] and recorded in the run
/// metrics under `model_usage`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelUsage {
    /// Number of completed calls
    pub calls: u64,
    /// Prompt tokens consumed
    pub prompt_tokens: u64,
    /// Completion tokens consumed
    pub completion_tokens: u64,
}

/// Context handed to the model when asking it to repair failing scene code.
///
/// Carries the scene's place in the plan (titles and narration) alongside
/// the failing source, so the model can repair against what the scene is
/// supposed to show rather than the code alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct RepairContext {
    /// Section whose render failed
    section_id: String,
    /// Title of the failing section
    section_title: String,
    /// Narration the scene illustrates
    narration: String,
    /// Title of the plan the scene belongs to
    plan_title: String,
    /// The scene source that failed to render
    code: String,
    /// Renderer stderr or error description
    error: String,
    /// Zero-based repair attempt number
    attempt: u32,
}

impl RepairContext {
    /// Creates a repair context for a failed render attempt.
    pub fn new(
        section: &Section,
        plan_title: impl Into<String>,
        code: impl Into<String>,
        error: impl Into<String>,
        attempt: u32,
    ) -> Self {
        Self {
            section_id: section.id.clone(),
            section_title: section.title.clone(),
            narration: section.narration.clone(),
            plan_title: plan_title.into(),
            code: code.into(),
            error: error.into(),
            attempt,
        }
    }
}
