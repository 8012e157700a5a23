//! Duration estimation for narration and animations.

use mathcast_core::VisualElement;

/// Average narration reading speed in words per minute.
const READING_SPEED: f64 = 150.0;

/// Pause buffer: one extra second per this many narrated words.
const WORDS_PER_PAUSE_SECOND: f64 = 50.0;

/// Transition buffer added to every section in seconds.
const SECTION_BUFFER: f64 = 2.0;

/// Base duration in seconds for an animation kind.
fn base_animation_duration(animation: &str) -> f64 {
    match animation {
        "FadeIn" | "FadeOut" | "Indicate" | "CircleIndicate" | "ShowPassingFlash"
        | "ApplyMethod" => 1.0,
        "Write" | "DrawBorderThenFill" | "ShowCreationThenDestruction" => 2.0,
        "Transform" | "ReplacementTransform" | "Create" | "ShowCreation" => 1.5,
        _ => 1.5,
    }
}

/// Estimates how long narrating `text` takes.
///
/// Word count at the average reading speed, plus a pause buffer of one
/// second per fifty words.
///
/// # Examples
///
/// ```
/// use mathcast_planner::estimate_narration_duration;
///
/// // 150 words: one minute of reading plus a 3s pause buffer.
/// let text = "word ".repeat(150);
/// assert_eq!(estimate_narration_duration(&text), 63.0);
/// ```
pub fn estimate_narration_duration(text: &str) -> f64 {
    let words = text.split_whitespace().count() as f64;
    words / READING_SPEED * 60.0 + words / WORDS_PER_PAUSE_SECOND
}

/// Estimates how long one animated element takes.
///
/// Base duration per animation kind, scaled up for long content: 1.2x past
/// 50 characters, 1.5x past 100.
pub fn estimate_animation_duration(animation: &str, content: &str) -> f64 {
    let base = base_animation_duration(animation);
    let factor = match content.chars().count() {
        n if n > 100 => 1.5,
        n if n > 50 => 1.2,
        _ => 1.0,
    };
    base * factor
}

/// Estimates the duration of a whole section.
///
/// Narration and animation run concurrently, so the section takes the
/// longer of the two, plus a fixed transition buffer.
pub fn estimate_section_duration(narration: &str, elements: &[VisualElement]) -> f64 {
    let narration_duration = estimate_narration_duration(narration);
    let animation_duration: f64 = elements
        .iter()
        .map(|e| estimate_animation_duration(&e.animation, &e.content))
        .sum();
    narration_duration.max(animation_duration) + SECTION_BUFFER
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narration_scales_with_word_count() {
        let fifty = "word ".repeat(50);
        // 50 words: 20s reading + 1s pause buffer.
        assert!((estimate_narration_duration(&fifty) - 21.0).abs() < 1e-9);
        assert_eq!(estimate_narration_duration(""), 0.0);
    }

    #[test]
    fn animation_base_durations() {
        assert_eq!(estimate_animation_duration("FadeIn", "x"), 1.0);
        assert_eq!(estimate_animation_duration("Write", "x"), 2.0);
        assert_eq!(estimate_animation_duration("Transform", "x"), 1.5);
        // Unknown kinds use the default base.
        assert_eq!(estimate_animation_duration("Wobble", "x"), 1.5);
    }

    #[test]
    fn long_content_scales_the_base() {
        let medium = "c".repeat(60);
        let long = "c".repeat(120);
        assert!((estimate_animation_duration("FadeIn", &medium) - 1.2).abs() < 1e-9);
        assert!((estimate_animation_duration("FadeIn", &long) - 1.5).abs() < 1e-9);
    }

    #[test]
    fn section_takes_the_longer_track_plus_buffer() {
        let elements = vec![
            VisualElement::new("text", "a", "Write", 2.0),
            VisualElement::new("text", "b", "Write", 2.0),
        ];
        // Animations sum to 4.0 and dominate the empty narration.
        assert_eq!(estimate_section_duration("", &elements), 6.0);

        let narration = "word ".repeat(150);
        // Narration (63s) dominates the animations.
        assert_eq!(estimate_section_duration(&narration, &elements), 65.0);
    }
}
