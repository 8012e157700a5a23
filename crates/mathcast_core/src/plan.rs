//! Animation plan structures.
//!
//! A plan is created once per request from the AI explanation and mutated
//! only by the enrichment step (duration and timing correction), never after
//! scene processing begins.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Tolerance for a section duration differing from its visual element sum.
const SECTION_TOLERANCE: f64 = 0.5;
/// Tolerance for the plan estimate differing from the section sum.
const PLAN_TOLERANCE: f64 = 1.0;

/// A visual element within an animation section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualElement {
    /// Type of visual element (text, equation, shape, graph, ...)
    #[serde(rename = "type")]
    pub element_type: String,
    /// Specific content to display
    pub content: String,
    /// Animation kind to use (FadeIn, Transform, ...)
    pub animation: String,
    /// Duration in seconds
    pub duration: f64,
    /// Narration text that should be spoken during this element
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync_with_narration: Option<String>,
}

impl VisualElement {
    /// Creates a visual element with no narration sync point.
    pub fn new(
        element_type: impl Into<String>,
        content: impl Into<String>,
        animation: impl Into<String>,
        duration: f64,
    ) -> Self {
        Self {
            element_type: element_type.into(),
            content: content.into(),
            animation: animation.into(),
            duration,
            sync_with_narration: None,
        }
    }
}

/// One narrated animated segment of the video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Unique identifier within the plan
    pub id: String,
    /// Title of the section
    pub title: String,
    /// Duration in seconds; reconciled against the visual element sum
    pub duration: f64,
    /// Narration script for the section
    pub narration: String,
    /// Visual elements shown during the section, in order
    pub visual_elements: Vec<VisualElement>,
    /// Renderable animation source for the section
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manim_code: Option<String>,
    /// Path to the synthesized narration audio
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_file: Option<PathBuf>,
    /// Path to the rendered (or synchronized) video
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_file: Option<PathBuf>,
}

impl Section {
    /// Sum of the visual element durations.
    pub fn element_duration(&self) -> f64 {
        self.visual_elements.iter().map(|e| e.duration).sum()
    }

    /// Reconciles the declared duration with the visual element sum.
    ///
    /// A declared duration differing from the computed sum by more than 0.5s
    /// is silently replaced by the sum rather than rejected. Returns whether
    /// a correction was applied.
    pub fn reconcile_duration(&mut self) -> bool {
        if self.visual_elements.is_empty() {
            return false;
        }
        let computed = self.element_duration();
        if (self.duration - computed).abs() > SECTION_TOLERANCE {
            tracing::warn!(
                section = %self.id,
                declared = self.duration,
                computed,
                "section duration does not match visual element sum, correcting"
            );
            self.duration = computed;
            return true;
        }
        false
    }
}

/// Visual style guidelines for the whole video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualStyle {
    /// Color theme (dark/light)
    pub color_theme: String,
    /// Font size (small/medium/large)
    pub font_size: String,
    /// Background color in hex format
    pub background_color: String,
    /// Accent color in hex format
    pub accent_color: String,
}

impl Default for VisualStyle {
    fn default() -> Self {
        Self {
            color_theme: "dark".to_string(),
            font_size: "medium".to_string(),
            background_color: "#1C1C1C".to_string(),
            accent_color: "#3B82F6".to_string(),
        }
    }
}

/// The complete animation plan for one video.
///
/// # Examples
///
/// ```
/// use mathcast_core::{AnimationPlan, Section, VisualElement};
///
/// let mut plan = AnimationPlan {
///     title: "Pythagorean Theorem".to_string(),
///     sections: vec![Section {
///         id: "section1".to_string(),
///         title: "Statement".to_string(),
///         duration: 10.0,
///         narration: "In a right triangle...".to_string(),
///         visual_elements: vec![
///             VisualElement::new("text", "a^2 + b^2 = c^2", "Write", 3.0),
///             VisualElement::new("graph", "triangle", "Create", 4.0),
///         ],
///         manim_code: None,
///         audio_file: None,
///         video_file: None,
///     }],
///     estimated_duration: 10.0,
///     visual_style: Default::default(),
/// };
///
/// // Declared 10.0s differs from the 7.0s element sum by more than the
/// // tolerance, so it is corrected, and the plan estimate follows.
/// plan.reconcile();
/// assert_eq!(plan.sections[0].duration, 7.0);
/// assert_eq!(plan.estimated_duration, 7.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationPlan {
    /// Title of the video
    pub title: String,
    /// Ordered sections of the animation
    pub sections: Vec<Section>,
    /// Estimated total duration in seconds
    pub estimated_duration: f64,
    /// Visual style guidelines
    #[serde(default)]
    pub visual_style: VisualStyle,
}

impl AnimationPlan {
    /// Sum of the section durations.
    pub fn section_duration(&self) -> f64 {
        self.sections.iter().map(|s| s.duration).sum()
    }

    /// Applies the self-healing duration corrections to every section and to
    /// the plan-level estimate.
    ///
    /// Section durations are reconciled against their element sums (0.5s
    /// tolerance) and the estimated duration against the section sum (1.0s
    /// tolerance).
    pub fn reconcile(&mut self) {
        for section in &mut self.sections {
            section.reconcile_duration();
        }
        let computed = self.section_duration();
        if !self.sections.is_empty() && (self.estimated_duration - computed).abs() > PLAN_TOLERANCE
        {
            tracing::warn!(
                declared = self.estimated_duration,
                computed,
                "plan estimate does not match section sum, correcting"
            );
            self.estimated_duration = computed;
        }
    }
}
