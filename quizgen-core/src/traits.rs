use rand::Rng;

use crate::domain::{Difficulty, Question, QuestionDraft, QuizType, Topic};

/// Produces one self-contained question for a single topic.
pub trait ItemGenerator {
    fn topic(&self) -> Topic;

    fn generate<R: Rng + ?Sized>(
        &self,
        difficulty: Difficulty,
        quiz_type: QuizType,
        rng: &mut R,
    ) -> QuestionDraft;
}

/// Localizes the display text of a question.
pub trait Translator {
    fn translate(&self, question: Question, language: &str) -> Question;
}
