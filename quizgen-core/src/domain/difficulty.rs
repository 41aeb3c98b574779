use serde::{Deserialize, Serialize};
use std::fmt;

/// Difficulty label attached to every generated question.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Map a school grade to a difficulty: up to grade 4 is Easy, up to
    /// grade 8 is Medium, anything above is Hard.
    pub fn from_grade(grade: i64) -> Self {
        if grade <= 4 {
            Difficulty::Easy
        } else if grade <= 8 {
            Difficulty::Medium
        } else {
            Difficulty::Hard
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
