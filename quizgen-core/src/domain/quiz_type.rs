use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether questions carry a multiple-choice option set.
///
/// Parsing is case-insensitive so `"MCQ"` and `"mcq"` are equivalent; the
/// serialized form is always lowercase.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum QuizType {
    #[default]
    Mcq,
    Short,
}

impl QuizType {
    pub fn is_multiple_choice(&self) -> bool {
        matches!(self, QuizType::Mcq)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QuizType::Mcq => "mcq",
            QuizType::Short => "short",
        }
    }
}

impl FromStr for QuizType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mcq" => Ok(QuizType::Mcq),
            "short" => Ok(QuizType::Short),
            other => Err(format!(
                "Unknown quiz type '{}', expected 'mcq' or 'short'",
                other
            )),
        }
    }
}

impl TryFrom<String> for QuizType {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for QuizType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
