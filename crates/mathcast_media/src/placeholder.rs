//! Deterministic fallback scene for failed renders.

/// Builds a minimal Manim scene showing the section title and a notice.
///
/// Used when a scene's code cannot be rendered after the repair cycle: the
/// video keeps its full section sequence with a visibly degraded scene
/// instead of a hole.
///
/// # Examples
///
/// ```
/// let code = mathcast_media::placeholder_scene("section2", "The Chain Rule");
/// assert!(code.contains("class Section2PlaceholderScene(Scene):"));
/// assert!(code.contains("The Chain Rule"));
/// ```
pub fn placeholder_scene(section_id: &str, title: &str) -> String {
    let class_name = format!("{}PlaceholderScene", capitalize(section_id));
    // Title lands inside a Python string literal.
    let safe_title = title.replace('\\', "").replace('"', "'");
    format!(
        r#"from manim import *

class {class_name}(Scene):
    def construct(self):
        title = Text("{safe_title}", font_size=40)
        self.play(Write(title))
        self.wait(2)

        subtitle = Text("Scene content replaced with simple animation", font_size=30, color=YELLOW)
        subtitle.next_to(title, DOWN, buff=0.5)
        self.play(FadeIn(subtitle))
        self.wait(3)

        self.play(FadeOut(title), FadeOut(subtitle))
        self.wait(1)
"#
    )
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_in_titles_cannot_break_the_literal() {
        let code = placeholder_scene("section1", r#"The "hard" case"#);
        assert!(code.contains(r#"Text("The 'hard' case", font_size=40)"#));
    }

    #[test]
    fn class_name_follows_the_section_id() {
        let code = placeholder_scene("intro", "Intro");
        assert!(code.contains("class IntroPlaceholderScene(Scene):"));
    }
}
