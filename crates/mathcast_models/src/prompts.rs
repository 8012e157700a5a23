//! Prompt construction and response extraction helpers.

use mathcast_core::{AnimationPlan, VideoRequest};
use mathcast_interface::RepairContext;

pub(crate) const EXPLAIN_SYSTEM: &str = "You are a mathematics educator. Produce a clear, \
correct, step-by-step explanation of the given topic or problem, written to be narrated \
aloud. Separate logical segments with blank lines.";

pub(crate) const PLAN_SYSTEM: &str = "You are an animation director for educational math \
videos. Given an explanation, respond with only a JSON object of the form \
{\"title\": string, \"sections\": [{\"id\": string, \"title\": string, \"duration\": number, \
\"narration\": string, \"visual_elements\": [{\"type\": string, \"content\": string, \
\"animation\": string, \"duration\": number}]}], \"estimated_duration\": number}. \
No prose outside the JSON.";

pub(crate) const CONTENT_SYSTEM: &str = "You write narration scripts and Manim scene code \
for educational math videos. Given an animation plan, respond with only a JSON object \
{\"scripts\": {section_id: narration string}, \"manim_code\": {section_id: python source \
string}}. Each scene's code must define a class deriving from Scene. No prose outside the \
JSON.";

pub(crate) const REPAIR_SYSTEM: &str = "You debug Manim scene code. Given failing code and \
the renderer's error output, respond with the corrected code in a ```python code block. If \
the code cannot be fixed, respond with exactly CANNOT_FIX.";

/// Sentinel the repair prompt asks the model to emit when it declines.
pub(crate) const REFUSAL_SENTINEL: &str = "CANNOT_FIX";

pub(crate) fn explain_user(request: &VideoRequest) -> String {
    let mut prompt = format!("Topic: {}", request.text());
    if let Some(category) = request.category() {
        prompt.push_str(&format!("\nContent category: {category}"));
    }
    if let Some(difficulty) = request.difficulty() {
        prompt.push_str(&format!("\nTarget audience: {difficulty}"));
    }
    if let Some(max_duration) = request.max_duration() {
        prompt.push_str(&format!("\nTarget video length: about {max_duration} seconds"));
    }
    if !request.focus_areas().is_empty() {
        prompt.push_str(&format!("\nFocus on: {}", request.focus_areas().join(", ")));
    }
    prompt
}

pub(crate) fn plan_user(request: &VideoRequest, explanation: &str) -> String {
    format!(
        "Topic: {}\n\nExplanation to structure into sections:\n\n{explanation}",
        request.text()
    )
}

pub(crate) fn content_user(plan: &AnimationPlan) -> String {
    // The plan serializes cleanly; a failure here would be a programming error
    // in the plan types, caught by the serde tests.
    let plan_json = serde_json::to_string_pretty(plan).unwrap_or_default();
    format!("Animation plan:\n\n{plan_json}")
}

pub(crate) fn repair_user(context: &RepairContext) -> String {
    format!(
        "Video: {}\nScene {} (\"{}\") failed to render (repair attempt {}).\n\n\
         The scene illustrates this narration:\n{}\n\n\
         Code:\n```python\n{}\n```\n\n\
         Error output:\n{}",
        context.plan_title(),
        context.section_id(),
        context.section_title(),
        context.attempt() + 1,
        context.narration(),
        context.code(),
        context.error()
    )
}

/// Extracts the payload from a fenced code block, tolerating a language tag.
///
/// Returns the trimmed input unchanged when no fence is present, so callers
/// can pass raw responses through.
///
/// # Examples
///
/// ```
/// use mathcast_models::extract_code_block;
///
/// let response = "Here you go:\n```python\nx = 1\n```\nGood luck!";
/// assert_eq!(extract_code_block(response), "x = 1");
/// assert_eq!(extract_code_block("x = 2"), "x = 2");
/// ```
pub fn extract_code_block(response: &str) -> String {
    let Some(start) = response.find("```") else {
        return response.trim().to_string();
    };
    let after_fence = &response[start + 3..];
    // Skip the language tag line if present.
    let body_start = after_fence.find('\n').map(|i| i + 1).unwrap_or(0);
    let body = &after_fence[body_start..];
    match body.find("```") {
        Some(end) => body[..end].trim().to_string(),
        None => body.trim().to_string(),
    }
}

/// Strips a JSON payload out of a fenced or prose-wrapped response.
pub(crate) fn extract_json(response: &str) -> String {
    let candidate = extract_code_block(response);
    match (candidate.find('{'), candidate.rfind('}')) {
        (Some(start), Some(end)) if start < end => candidate[start..=end].to_string(),
        _ => candidate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_is_found_inside_fences_and_prose() {
        let response = "Sure!\n```json\n{\"title\": \"T\"}\n```\nDone.";
        assert_eq!(extract_json(response), "{\"title\": \"T\"}");

        let bare = "The plan is {\"title\": \"T\"} as requested.";
        assert_eq!(extract_json(bare), "{\"title\": \"T\"}");
    }

    #[test]
    fn unfenced_code_passes_through() {
        assert_eq!(extract_code_block("  x = 1  "), "x = 1");
    }

    #[test]
    fn repair_prompt_carries_scene_and_plan_context() {
        let section = mathcast_core::Section {
            id: "section2".to_string(),
            title: "Limit Definition".to_string(),
            duration: 5.0,
            narration: "The limit of the difference quotient.".to_string(),
            visual_elements: vec![],
            manim_code: None,
            audio_file: None,
            video_file: None,
        };
        let context =
            RepairContext::new(&section, "Derivatives", "bad code", "NameError: q", 0);
        let prompt = repair_user(&context);
        assert!(prompt.contains("Derivatives"));
        assert!(prompt.contains("Limit Definition"));
        assert!(prompt.contains("difference quotient"));
        assert!(prompt.contains("bad code"));
        assert!(prompt.contains("NameError: q"));
    }

    #[test]
    fn explain_prompt_carries_request_fields() {
        let request = VideoRequest::builder("Prove the triangle inequality")
            .max_duration(120)
            .focus_areas(vec!["geometry".to_string()])
            .build()
            .unwrap();
        let prompt = explain_user(&request);
        assert!(prompt.contains("Prove the triangle inequality"));
        assert!(prompt.contains("theorem"));
        assert!(prompt.contains("120 seconds"));
        assert!(prompt.contains("geometry"));
    }
}
