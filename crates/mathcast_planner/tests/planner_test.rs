use mathcast_core::{Category, VisualElement};
use mathcast_interface::{PlanDraft, SectionDraft};
use mathcast_planner::{estimate_section_duration, template_for, PlanSynthesizer};

fn draft_section(id: &str, narration: &str, elements: Vec<VisualElement>) -> SectionDraft {
    SectionDraft {
        id: id.to_string(),
        title: format!("Title for {id}"),
        duration: 0.0,
        narration: narration.to_string(),
        visual_elements: elements,
    }
}

fn draft(sections: Vec<SectionDraft>) -> PlanDraft {
    PlanDraft {
        title: "Test video".to_string(),
        sections,
        estimated_duration: 0.0,
        visual_style: Default::default(),
    }
}

#[test]
fn empty_draft_is_rejected() {
    let result = PlanSynthesizer::new().enhance(draft(vec![]), None);
    assert!(result.is_err());
}

#[test]
fn sections_without_visuals_get_the_category_template() {
    let plan = PlanSynthesizer::new()
        .enhance(
            draft(vec![draft_section("section1", "Narration text here.", vec![])]),
            Some(Category::Theorem),
        )
        .unwrap();
    assert_eq!(
        plan.sections[0].visual_elements,
        template_for(Some(Category::Theorem))
    );
}

#[test]
fn supplied_visuals_are_kept() {
    let elements = vec![VisualElement::new("equation", "x^2", "Write", 2.0)];
    let plan = PlanSynthesizer::new()
        .enhance(
            draft(vec![draft_section(
                "section1",
                "Narration text here.",
                elements.clone(),
            )]),
            Some(Category::Problem),
        )
        .unwrap();
    assert_eq!(plan.sections[0].visual_elements, elements);
}

#[test]
fn draft_timing_guesses_are_replaced() {
    let mut section = draft_section("section1", "Narration text here.", vec![]);
    section.duration = 999.0;
    let plan = PlanSynthesizer::new()
        .enhance(draft(vec![section]), Some(Category::Concept))
        .unwrap();

    let expected = estimate_section_duration(
        "Narration text here.",
        &template_for(Some(Category::Concept)),
    );
    assert!((plan.sections[0].duration - expected).abs() <= 0.5);
}

#[test]
fn plan_total_is_the_section_sum() {
    let plan = PlanSynthesizer::new()
        .enhance(
            draft(vec![
                draft_section("section1", "First narration text.", vec![]),
                draft_section("section2", "Second narration text.", vec![]),
            ]),
            None,
        )
        .unwrap();
    let sum: f64 = plan.sections.iter().map(|s| s.duration).sum();
    assert!((plan.estimated_duration - sum).abs() <= 1.0);
}

#[test]
fn missing_section_ids_are_assigned() {
    let mut section = draft_section("", "Some narration text.", vec![]);
    section.id = String::new();
    let plan = PlanSynthesizer::new().enhance(draft(vec![section]), None).unwrap();
    assert_eq!(plan.sections[0].id, "section1");
}

#[test]
fn plan_from_explanation_builds_full_plan() {
    let explanation = "The derivative measures instantaneous change.\n\n\
                       Consider the limit of the difference quotient as h approaches zero.";
    let plan = PlanSynthesizer::new()
        .plan_from_explanation(explanation, Some(Category::Concept), "Derivatives")
        .unwrap();

    assert_eq!(plan.title, "Derivatives");
    assert_eq!(plan.sections.len(), 2);
    assert!(!plan.sections[0].visual_elements.is_empty());
    assert!(plan.sections[0].duration > 0.0);
    assert_eq!(plan.sections[1].id, "section2");
}

#[test]
fn plan_from_blank_explanation_is_rejected() {
    let result = PlanSynthesizer::new().plan_from_explanation("  \n\n  ", None, "Empty");
    assert!(result.is_err());
}
