use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Difficulty, NormalizedRequest, QuizType, Seed, Topic};

/// A generated question before it receives its sequential id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    pub topic: Topic,
    pub difficulty: Difficulty,
    pub stem: String,
    pub choices: Option<Vec<String>>,
    pub answer: String,
    pub worked_solution: String,
}

impl QuestionDraft {
    pub fn into_question(self, id: impl Into<String>) -> Question {
        Question {
            id: id.into(),
            topic: self.topic,
            skills: self.topic.skills().iter().map(|s| s.to_string()).collect(),
            difficulty: self.difficulty,
            stem: self.stem,
            choices: self.choices,
            answer: self.answer,
            worked_solution: self.worked_solution,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub topic: Topic,
    pub skills: Vec<String>,
    pub difficulty: Difficulty,
    pub stem: String,
    /// Present only for multiple-choice quizzes; serialized as `null` otherwise.
    pub choices: Option<Vec<String>>,
    pub answer: String,
    pub worked_solution: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuizMetadata {
    pub topics: Vec<String>,
    pub quiz_type: QuizType,
    pub num_questions: usize,
    pub grade_level: u8,
    pub output_language: String,
    pub seed: Option<Seed>,
    #[serde(with = "utc_seconds")]
    pub generated_at: DateTime<Utc>,
}

impl QuizMetadata {
    pub fn from_request(request: &NormalizedRequest, generated_at: DateTime<Utc>) -> Self {
        Self {
            topics: request.topics.clone(),
            quiz_type: request.quiz_type,
            num_questions: request.num_questions,
            grade_level: request.grade_level,
            output_language: request.output_language.clone(),
            seed: request.seed,
            generated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuizResult {
    pub metadata: QuizMetadata,
    pub questions: Vec<Question>,
}

/// `YYYY-MM-DDTHH:MM:SSZ`, whole seconds in UTC.
mod utc_seconds {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&value.format(FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, FORMAT)
            .map(|naive| naive.and_utc())
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_generated_at_is_whole_seconds_with_z() {
        let request = crate::GenerationRequest::new(["Algebra"]).normalize().unwrap();
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 5).unwrap();
        let metadata = QuizMetadata::from_request(&request, at);

        let json = serde_json::to_value(&metadata).unwrap();
        assert_eq!(json["generatedAt"], "2024-05-01T12:30:05Z");

        let back: QuizMetadata = serde_json::from_value(json).unwrap();
        assert_eq!(back.generated_at, at);
    }

    #[test]
    fn test_short_answer_choices_serialize_as_null() {
        let draft = QuestionDraft {
            topic: Topic::Algebra,
            difficulty: Difficulty::Easy,
            stem: "Solve for x: 1x + 0 = 3".to_string(),
            choices: None,
            answer: "3".to_string(),
            worked_solution: String::new(),
        };
        let json = serde_json::to_value(draft.into_question("Q1")).unwrap();
        assert!(json["choices"].is_null());
        assert_eq!(json["skills"][0], "linear-equations");
        assert_eq!(json["workedSolution"], "");
    }
}
