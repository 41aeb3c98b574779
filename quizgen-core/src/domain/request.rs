use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use validator::Validate;

use super::{Difficulty, QuizType};
use crate::error::Result;

pub const MIN_QUESTIONS: i64 = 1;
pub const MAX_QUESTIONS: i64 = 50;
pub const MIN_GRADE: i64 = 1;
pub const MAX_GRADE: i64 = 12;

pub const DEFAULT_NUM_QUESTIONS: i64 = 10;
pub const DEFAULT_GRADE_LEVEL: i64 = 8;
pub const DEFAULT_OUTPUT_LANGUAGE: &str = "English";

fn default_num_questions() -> i64 {
    DEFAULT_NUM_QUESTIONS
}

fn default_grade_level() -> i64 {
    DEFAULT_GRADE_LEVEL
}

fn default_output_language() -> String {
    DEFAULT_OUTPUT_LANGUAGE.to_string()
}

/// Reads any JSON integer, or a float, into an `i64`, saturating at the
/// bounds. Counts and grades are clamped later, so magnitude never fails.
fn saturating_i64<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    struct SaturatingVisitor;

    impl<'de> de::Visitor<'de> for SaturatingVisitor {
        type Value = i64;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a number")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<i64, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<i64, E> {
            Ok(i64::try_from(v).unwrap_or(i64::MAX))
        }

        fn visit_i128<E: de::Error>(self, v: i128) -> std::result::Result<i64, E> {
            Ok(v.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64)
        }

        fn visit_u128<E: de::Error>(self, v: u128) -> std::result::Result<i64, E> {
            Ok(i64::try_from(v).unwrap_or(i64::MAX))
        }

        // `as` saturates and maps NaN to 0
        fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<i64, E> {
            Ok(v as i64)
        }
    }

    deserializer.deserialize_any(SaturatingVisitor)
}

/// Reproducibility seed. Accepts any integer from `i64::MIN` to `u64::MAX`
/// and serializes back as the number it was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Seed {
    Signed(i64),
    Unsigned(u64),
}

impl Seed {
    /// Generator seed. Negative values reinterpret their bits, so `-1` and
    /// `u64::MAX` select the same sequence.
    pub fn to_u64(self) -> u64 {
        match self {
            Seed::Signed(seed) => seed as u64,
            Seed::Unsigned(seed) => seed,
        }
    }
}

impl From<i64> for Seed {
    fn from(seed: i64) -> Self {
        Seed::Signed(seed)
    }
}

impl From<u64> for Seed {
    fn from(seed: u64) -> Self {
        i64::try_from(seed).map_or(Seed::Unsigned(seed), Seed::Signed)
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seed::Signed(seed) => write!(f, "{}", seed),
            Seed::Unsigned(seed) => write!(f, "{}", seed),
        }
    }
}

/// A quiz generation request as received from a caller.
///
/// Numeric fields are accepted as-is and clamped during [`normalize`]
/// rather than rejected.
///
/// [`normalize`]: GenerationRequest::normalize
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "At least one topic is required."))]
    pub topics: Vec<String>,
    #[serde(default)]
    pub quiz_type: QuizType,
    #[serde(default = "default_num_questions", deserialize_with = "saturating_i64")]
    pub num_questions: i64,
    #[serde(default = "default_grade_level", deserialize_with = "saturating_i64")]
    pub grade_level: i64,
    #[serde(default = "default_output_language")]
    pub output_language: String,
    #[serde(default)]
    pub seed: Option<Seed>,
}

impl GenerationRequest {
    pub fn new<I, S>(topics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            topics: topics.into_iter().map(Into::into).collect(),
            quiz_type: QuizType::default(),
            num_questions: DEFAULT_NUM_QUESTIONS,
            grade_level: DEFAULT_GRADE_LEVEL,
            output_language: default_output_language(),
            seed: None,
        }
    }

    pub fn with_quiz_type(mut self, quiz_type: QuizType) -> Self {
        self.quiz_type = quiz_type;
        self
    }

    pub fn with_num_questions(mut self, num_questions: i64) -> Self {
        self.num_questions = num_questions;
        self
    }

    pub fn with_grade_level(mut self, grade_level: i64) -> Self {
        self.grade_level = grade_level;
        self
    }

    pub fn with_output_language(mut self, language: impl Into<String>) -> Self {
        self.output_language = language.into();
        self
    }

    pub fn with_seed(mut self, seed: i64) -> Self {
        self.seed = Some(Seed::Signed(seed));
        self
    }

    /// Validate and normalize: rejects an empty topic list, deduplicates
    /// topics keeping first occurrences, clamps count and grade.
    pub fn normalize(&self) -> Result<NormalizedRequest> {
        self.validate()?;

        let mut topics: Vec<String> = Vec::with_capacity(self.topics.len());
        for topic in &self.topics {
            if !topics.contains(topic) {
                topics.push(topic.clone());
            }
        }

        let num_questions = self.num_questions.clamp(MIN_QUESTIONS, MAX_QUESTIONS) as usize;
        let grade_level = self.grade_level.clamp(MIN_GRADE, MAX_GRADE) as u8;

        Ok(NormalizedRequest {
            topics,
            quiz_type: self.quiz_type,
            num_questions,
            grade_level,
            difficulty: Difficulty::from_grade(i64::from(grade_level)),
            output_language: self.output_language.clone(),
            seed: self.seed,
        })
    }
}

/// A request after deduplication and clamping. Always has at least one topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRequest {
    pub topics: Vec<String>,
    pub quiz_type: QuizType,
    pub num_questions: usize,
    pub grade_level: u8,
    pub difficulty: Difficulty,
    pub output_language: String,
    pub seed: Option<Seed>,
}

impl NormalizedRequest {
    /// Round-robin topic for a zero-based question slot.
    pub fn topic_for_slot(&self, slot: usize) -> &str {
        &self.topics[slot % self.topics.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_dedupes_in_first_seen_order() {
        let request = GenerationRequest::new(["Geometry", "Algebra", "Geometry", "Algebra"]);
        let normalized = request.normalize().unwrap();
        assert_eq!(normalized.topics, vec!["Geometry", "Algebra"]);
    }

    #[test]
    fn test_normalize_rejects_empty_topics() {
        let request = GenerationRequest::new(Vec::<String>::new());
        let err = request.normalize().unwrap_err();
        assert_eq!(err.message(), "At least one topic is required.");
    }

    #[test]
    fn test_topic_for_slot_wraps() {
        let normalized = GenerationRequest::new(["a", "b", "c"]).normalize().unwrap();
        assert_eq!(normalized.topic_for_slot(0), "a");
        assert_eq!(normalized.topic_for_slot(4), "b");
        assert_eq!(normalized.topic_for_slot(8), "c");
    }

    #[test]
    fn test_defaults_from_json() {
        let request: GenerationRequest =
            serde_json::from_str(r#"{"topics": ["Algebra"]}"#).unwrap();
        assert_eq!(request.quiz_type, QuizType::Mcq);
        assert_eq!(request.num_questions, 10);
        assert_eq!(request.grade_level, 8);
        assert_eq!(request.output_language, "English");
        assert_eq!(request.seed, None);
    }
}
