use mathcast_core::{Category, Difficulty, VideoRequest};

#[test]
fn whitespace_is_normalized() {
    let request = VideoRequest::builder("  Explain   the \n chain \t rule  ")
        .build()
        .unwrap();
    assert_eq!(request.text(), "Explain the chain rule");
}

#[test]
fn short_query_is_rejected() {
    assert!(VideoRequest::builder("2+2").build().is_err());
}

#[test]
fn long_query_is_rejected() {
    let long = "x".repeat(301);
    assert!(VideoRequest::builder(long).build().is_err());
}

#[test]
fn length_is_counted_in_characters_not_bytes() {
    // 200 characters of two-byte symbols; valid despite 400 bytes.
    assert!(VideoRequest::builder("π".repeat(200)).build().is_ok());
    assert!(VideoRequest::builder("π".repeat(301)).build().is_err());
    // Three symbols are still below the minimum.
    assert!(VideoRequest::builder("π²×").build().is_err());
}

#[test]
fn length_is_checked_after_normalization() {
    // 300 chars of content padded with whitespace is still valid.
    let padded = format!("  {}  ", "y".repeat(300));
    assert!(VideoRequest::builder(padded).build().is_ok());
}

#[test]
fn proof_keywords_detect_theorem() {
    let request = VideoRequest::builder("Prove that the square root of 2 is irrational")
        .build()
        .unwrap();
    assert_eq!(request.category(), &Some(Category::Theorem));
}

#[test]
fn solve_keywords_detect_problem() {
    let request = VideoRequest::builder("Solve for x: 2x + 3 = 7").build().unwrap();
    assert_eq!(request.category(), &Some(Category::Problem));
}

#[test]
fn explain_keywords_detect_concept() {
    let request = VideoRequest::builder("Explain how derivatives work")
        .build()
        .unwrap();
    assert_eq!(request.category(), &Some(Category::Concept));
}

#[test]
fn define_keywords_detect_definition() {
    let request = VideoRequest::builder("Definition of a vector space")
        .build()
        .unwrap();
    assert_eq!(request.category(), &Some(Category::Definition));
}

#[test]
fn theorem_keywords_win_over_later_sets() {
    // Contains both "prove" and "explain"; the proof set has higher priority.
    let request = VideoRequest::builder("Explain and prove the triangle inequality")
        .build()
        .unwrap();
    assert_eq!(request.category(), &Some(Category::Theorem));
}

#[test]
fn no_keywords_leaves_category_unset() {
    let request = VideoRequest::builder("The history of zero").build().unwrap();
    assert_eq!(request.category(), &None);
}

#[test]
fn explicit_category_skips_detection() {
    let request = VideoRequest::builder("Solve for x: 2x + 3 = 7")
        .category(Category::Concept)
        .build()
        .unwrap();
    assert_eq!(request.category(), &Some(Category::Concept));
}

#[test]
fn category_strings_parse_case_insensitively() {
    let request = VideoRequest::builder("The history of zero")
        .category_str("THEOREM")
        .build()
        .unwrap();
    assert_eq!(request.category(), &Some(Category::Theorem));
}

#[test]
fn unknown_category_is_rejected() {
    assert!(VideoRequest::builder("The history of zero")
        .category_str("riddle")
        .build()
        .is_err());
}

#[test]
fn difficulty_parses_snake_case() {
    let request = VideoRequest::builder("The history of zero")
        .difficulty_str("high_school")
        .build()
        .unwrap();
    assert_eq!(request.difficulty(), &Some(Difficulty::HighSchool));
}

#[test]
fn max_duration_bounds_are_enforced() {
    assert!(VideoRequest::builder("The history of zero")
        .max_duration(29)
        .build()
        .is_err());
    assert!(VideoRequest::builder("The history of zero")
        .max_duration(601)
        .build()
        .is_err());
    assert!(VideoRequest::builder("The history of zero")
        .max_duration(180)
        .build()
        .is_ok());
}

#[test]
fn priority_bound_is_enforced() {
    assert!(VideoRequest::builder("The history of zero")
        .priority(11)
        .build()
        .is_err());
}

#[test]
fn serde_round_trip_preserves_fields() {
    let request = VideoRequest::builder("Prove that the square root of 2 is irrational")
        .difficulty(Difficulty::Undergraduate)
        .max_duration(240)
        .focus_areas(vec!["contradiction".to_string(), "parity".to_string()])
        .priority(5)
        .build()
        .unwrap();

    let json = serde_json::to_string(&request).unwrap();
    let restored: VideoRequest = serde_json::from_str(&json).unwrap();
    assert_eq!(request, restored);
}
