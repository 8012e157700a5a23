//! Splitting an explanation into logical sections.

/// Maximum number of sections a breakdown produces.
pub const MAX_SECTIONS: usize = 5;

/// A section of an explanation before any timing or visuals are attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSection {
    /// Identifier of the form "sectionN", 1-based
    pub id: String,
    /// Title taken from the content, or "Section N"
    pub title: String,
    /// Paragraph text belonging to the section
    pub content: String,
}

/// Breaks an explanation into at most [`MAX_SECTIONS`] sections.
///
/// Paragraphs are blank-line separated. Up to the maximum, each paragraph
/// becomes its own section; beyond it, paragraphs are grouped into
/// equal-sized runs (ceiling division) so the count never exceeds the
/// maximum.
///
/// # Examples
///
/// ```
/// use mathcast_planner::breakdown_explanation;
///
/// let sections = breakdown_explanation("First idea.\n\nSecond idea.");
/// assert_eq!(sections.len(), 2);
/// assert_eq!(sections[0].id, "section1");
/// ```
pub fn breakdown_explanation(explanation: &str) -> Vec<RawSection> {
    let paragraphs: Vec<&str> = explanation
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();

    if paragraphs.len() <= MAX_SECTIONS {
        return paragraphs
            .iter()
            .enumerate()
            .map(|(i, paragraph)| RawSection {
                id: format!("section{}", i + 1),
                title: extract_title(paragraph, i),
                content: paragraph.to_string(),
            })
            .collect();
    }

    let per_section = paragraphs.len().div_ceil(MAX_SECTIONS);
    paragraphs
        .chunks(per_section)
        .enumerate()
        .map(|(i, chunk)| RawSection {
            id: format!("section{}", i + 1),
            title: extract_title(chunk[0], i),
            content: chunk.join("\n\n"),
        })
        .collect()
}

/// Extracts a title from the first sentence or line of `text`.
///
/// A candidate is only accepted when it is 10 to 50 characters; otherwise
/// the fallback "Section N" is used.
fn extract_title(text: &str, fallback_index: usize) -> String {
    let head: String = text.chars().take(100).collect();

    if head.contains('.') {
        let first_sentence = text.split('.').next().unwrap_or("").trim();
        if (10..=50).contains(&first_sentence.chars().count()) {
            return first_sentence.to_string();
        }
    }

    if head.contains('\n') {
        let first_line = text.lines().next().unwrap_or("").trim();
        if (10..=50).contains(&first_line.chars().count()) {
            return first_line.to_string();
        }
    }

    format!("Section {}", fallback_index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn few_paragraphs_map_one_to_one() {
        let sections = breakdown_explanation("One idea here.\n\nAnother idea here.\n\nA third.");
        assert_eq!(sections.len(), 3);
        assert_eq!(sections[2].id, "section3");
        assert_eq!(sections[2].content, "A third.");
    }

    #[test]
    fn many_paragraphs_are_grouped() {
        let explanation = (1..=12)
            .map(|i| format!("Paragraph number {i} content."))
            .collect::<Vec<_>>()
            .join("\n\n");
        let sections = breakdown_explanation(&explanation);
        // ceil(12 / 5) = 3 paragraphs per section, so 4 sections.
        assert_eq!(sections.len(), 4);
        assert!(sections[0].content.contains("Paragraph number 1"));
        assert!(sections[0].content.contains("Paragraph number 3"));
        assert!(!sections[0].content.contains("Paragraph number 4"));
    }

    #[test]
    fn blank_paragraphs_are_skipped() {
        let sections = breakdown_explanation("First paragraph.\n\n   \n\nSecond paragraph.");
        assert_eq!(sections.len(), 2);
    }

    #[test]
    fn title_comes_from_a_fitting_first_sentence() {
        let sections = breakdown_explanation("The chain rule explained. In detail now.");
        assert_eq!(sections[0].title, "The chain rule explained");
    }

    #[test]
    fn unfit_titles_fall_back_to_generic() {
        // First sentence is shorter than 10 characters.
        let sections = breakdown_explanation("Short. And then a longer remainder follows here.");
        assert_eq!(sections[0].title, "Section 1");
    }
}
