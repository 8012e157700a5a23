//! Validated video generation requests.
//!
//! A [`VideoRequest`] is the immutable, validated form of a raw user query.
//! Construction goes through [`RequestBuilder`], which normalizes whitespace,
//! enforces length and range bounds, and auto-detects the content category
//! from keyword heuristics when none is supplied.

use mathcast_error::{MathcastResult, ValidationError};
use serde::{Deserialize, Serialize};

/// Minimum query length after whitespace normalization.
const MIN_QUERY_LEN: usize = 5;
/// Maximum query length after whitespace normalization.
const MAX_QUERY_LEN: usize = 300;

/// Category of mathematical content.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Category {
    /// A theorem and its statement
    Theorem,
    /// A problem to be solved step by step
    Problem,
    /// A concept to be explained intuitively
    Concept,
    /// A definition to be stated and unpacked
    Definition,
    /// A proof to be walked through
    Proof,
}

/// Target difficulty level for the explanation.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Difficulty {
    /// Elementary school level
    Elementary,
    /// High school level
    HighSchool,
    /// Undergraduate level
    Undergraduate,
    /// Graduate level
    Graduate,
}

/// Validated input query for mathematical content generation.
///
/// Immutable once validated: all fields are read through getters and the type
/// offers no mutation. Serde round-trips reproduce the exact field values.
///
/// # Examples
///
/// ```
/// use mathcast_core::{Category, VideoRequest};
///
/// let request = VideoRequest::builder("Prove that the square root of 2 is irrational")
///     .build()
///     .unwrap();
///
/// // Auto-detected from the "prove" keyword.
/// assert_eq!(request.category(), &Some(Category::Theorem));
/// assert_eq!(*request.priority(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct VideoRequest {
    /// Whitespace-normalized query text
    text: String,
    /// Category of mathematical content, detected when not supplied
    category: Option<Category>,
    /// Target difficulty level
    difficulty: Option<Difficulty>,
    /// Maximum video duration in seconds (30-600)
    max_duration: Option<u32>,
    /// Specific areas to focus on, in order
    #[serde(default)]
    focus_areas: Vec<String>,
    /// Priority level (0-10, higher is more important)
    #[serde(default)]
    priority: u8,
}

impl VideoRequest {
    /// Creates a builder for a request with the given raw query text.
    pub fn builder(text: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(text)
    }

    /// Collapse runs of whitespace to single spaces and trim the ends.
    fn normalize(raw: &str) -> String {
        raw.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// Detect the content category from keyword heuristics.
    ///
    /// Keyword sets are scanned in fixed priority order; the first matching
    /// set wins, and no match leaves the category unset.
    fn detect_category(text: &str) -> Option<Category> {
        let lower = text.to_lowercase();

        const THEOREM_WORDS: [&str; 4] = ["prove", "proof", "theorem", "lemma"];
        const PROBLEM_WORDS: [&str; 4] = ["solve", "find", "calculate", "compute"];
        const CONCEPT_WORDS: [&str; 4] = ["explain", "what is", "how does", "concept"];
        const DEFINITION_WORDS: [&str; 3] = ["define", "definition", "meaning"];

        if THEOREM_WORDS.iter().any(|w| lower.contains(w)) {
            return Some(Category::Theorem);
        }
        if PROBLEM_WORDS.iter().any(|w| lower.contains(w)) {
            return Some(Category::Problem);
        }
        if CONCEPT_WORDS.iter().any(|w| lower.contains(w)) {
            return Some(Category::Concept);
        }
        if DEFINITION_WORDS.iter().any(|w| lower.contains(w)) {
            return Some(Category::Definition);
        }
        None
    }
}

/// Builder that validates a [`VideoRequest`] on construction.
///
/// Category and difficulty accept either typed values or raw strings; raw
/// strings are matched case-insensitively against the enumerated sets and
/// rejected with a [`ValidationError`] otherwise.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    text: String,
    category: Option<String>,
    difficulty: Option<String>,
    max_duration: Option<u32>,
    focus_areas: Vec<String>,
    priority: u8,
}

impl RequestBuilder {
    fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: None,
            difficulty: None,
            max_duration: None,
            focus_areas: Vec::new(),
            priority: 0,
        }
    }

    /// Sets the content category.
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category.to_string());
        self
    }

    /// Sets the content category from a raw string (validated on build).
    pub fn category_str(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the difficulty level.
    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty.to_string());
        self
    }

    /// Sets the difficulty level from a raw string (validated on build).
    pub fn difficulty_str(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = Some(difficulty.into());
        self
    }

    /// Sets the maximum video duration in seconds (30-600).
    pub fn max_duration(mut self, seconds: u32) -> Self {
        self.max_duration = Some(seconds);
        self
    }

    /// Sets the ordered list of focus areas.
    pub fn focus_areas(mut self, areas: Vec<String>) -> Self {
        self.focus_areas = areas;
        self
    }

    /// Sets the priority level (0-10).
    pub fn priority(mut self, priority: u8) -> Self {
        self.priority = priority;
        self
    }

    /// Validates the accumulated fields and constructs the request.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the normalized text is shorter than 5
    /// or longer than 300 characters, if a supplied category or difficulty is
    /// not in its enumerated set, or if `max_duration` or `priority` is out
    /// of range.
    pub fn build(self) -> MathcastResult<VideoRequest> {
        let text = VideoRequest::normalize(&self.text);

        // Bounds are character counts, not byte lengths; a query full of
        // math symbols must not be rejected for its UTF-8 width.
        let length = text.chars().count();
        if length < MIN_QUERY_LEN {
            return Err(ValidationError::new(format!(
                "query must be at least {} characters, got {}",
                MIN_QUERY_LEN, length
            )))?;
        }
        if length > MAX_QUERY_LEN {
            return Err(ValidationError::new(
                "query is too long; please simplify your request",
            ))?;
        }

        let category = match self.category {
            Some(raw) => Some(raw.parse::<Category>().map_err(|_| {
                ValidationError::new(format!(
                    "category must be one of theorem, problem, concept, definition, proof; got '{}'",
                    raw
                ))
            })?),
            None => VideoRequest::detect_category(&text),
        };

        let difficulty = match self.difficulty {
            Some(raw) => Some(raw.parse::<Difficulty>().map_err(|_| {
                ValidationError::new(format!(
                    "difficulty must be one of elementary, high_school, undergraduate, graduate; got '{}'",
                    raw
                ))
            })?),
            None => None,
        };

        if let Some(seconds) = self.max_duration {
            if !(30..=600).contains(&seconds) {
                return Err(ValidationError::new(format!(
                    "max_duration must be between 30 and 600 seconds, got {}",
                    seconds
                )))?;
            }
        }

        if self.priority > 10 {
            return Err(ValidationError::new(format!(
                "priority must be between 0 and 10, got {}",
                self.priority
            )))?;
        }

        Ok(VideoRequest {
            text,
            category,
            difficulty,
            max_duration: self.max_duration,
            focus_areas: self.focus_areas,
            priority: self.priority,
        })
    }
}
