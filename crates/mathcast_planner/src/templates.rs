//! Stock visual element sequences per content category.

use mathcast_core::{Category, VisualElement};

/// Returns the template visual sequence for a content category.
///
/// Categories without a dedicated template (definitions, or an undetected
/// category) fall back to the concept template.
pub fn template_for(category: Option<Category>) -> Vec<VisualElement> {
    match category {
        Some(Category::Theorem) => theorem(),
        Some(Category::Proof) => proof(),
        Some(Category::Problem) => problem(),
        Some(Category::Concept) | Some(Category::Definition) | None => concept(),
    }
}

fn theorem() -> Vec<VisualElement> {
    vec![
        VisualElement::new("text", "Theorem Statement", "Write", 2.0),
        VisualElement::new("text", "Key Insight", "FadeIn", 1.5),
        VisualElement::new("equation", "Mathematical Formulation", "Write", 2.5),
        VisualElement::new("graph", "Visual Representation", "Create", 3.0),
        VisualElement::new("text", "Implications", "FadeIn", 1.5),
    ]
}

fn proof() -> Vec<VisualElement> {
    vec![
        VisualElement::new("text", "Theorem to Prove", "Write", 2.0),
        VisualElement::new("text", "Proof Strategy", "FadeIn", 1.5),
        VisualElement::new("equation", "Starting Point", "Write", 2.0),
        VisualElement::new("equation", "Step 1", "Transform", 2.0),
        VisualElement::new("equation", "Step 2", "Transform", 2.0),
        VisualElement::new("equation", "Final Result", "Transform", 2.0),
        VisualElement::new("text", "QED", "FadeIn", 1.0),
    ]
}

fn concept() -> Vec<VisualElement> {
    vec![
        VisualElement::new("text", "Concept Introduction", "Write", 2.0),
        VisualElement::new("text", "Intuitive Explanation", "FadeIn", 2.0),
        VisualElement::new("graph", "Visual Representation", "Create", 3.0),
        VisualElement::new("equation", "Formal Definition", "Write", 2.5),
        VisualElement::new("text", "Examples", "FadeIn", 2.0),
        VisualElement::new("text", "Applications", "FadeIn", 1.5),
    ]
}

fn problem() -> Vec<VisualElement> {
    vec![
        VisualElement::new("text", "Problem Statement", "Write", 2.0),
        VisualElement::new("text", "Key Insight", "FadeIn", 1.5),
        VisualElement::new("equation", "Step 1", "Write", 2.0),
        VisualElement::new("equation", "Step 2", "Transform", 2.0),
        VisualElement::new("equation", "Step 3", "Transform", 2.0),
        VisualElement::new("equation", "Final Answer", "Transform", 2.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_category_has_a_sequence() {
        assert_eq!(template_for(Some(Category::Theorem)).len(), 5);
        assert_eq!(template_for(Some(Category::Proof)).len(), 7);
        assert_eq!(template_for(Some(Category::Problem)).len(), 6);
        assert_eq!(template_for(Some(Category::Concept)).len(), 6);
    }

    #[test]
    fn definitions_and_unknown_fall_back_to_concept() {
        assert_eq!(
            template_for(Some(Category::Definition)),
            template_for(Some(Category::Concept))
        );
        assert_eq!(template_for(None), template_for(Some(Category::Concept)));
    }
}
