use chrono::Utc;
use rand::Rng;

use crate::domain::{
    GenerationRequest, NormalizedRequest, Question, QuizMetadata, QuizResult, Topic,
};
use crate::error::Result;
use crate::generator::{generate_item, rng_for_seed, ChoiceSet};
use crate::traits::Translator;
use crate::translation::TagTranslator;

const FILLER_RANGE: std::ops::RangeInclusive<i64> = -10..=30;

/// Turns a [`GenerationRequest`] into a [`QuizResult`].
#[derive(Debug, Clone, Default)]
pub struct QuizGenerator<T = TagTranslator> {
    translator: T,
}

impl QuizGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: Translator> QuizGenerator<T> {
    pub fn with_translator(translator: T) -> Self {
        Self { translator }
    }

    /// Generate with a generator derived from `request.seed`.
    pub fn generate(&self, request: &GenerationRequest) -> Result<QuizResult> {
        let normalized = request.normalize()?;
        let mut rng = rng_for_seed(normalized.seed);
        Ok(self.generate_normalized(&normalized, &mut rng))
    }

    /// Generate drawing from a caller-owned generator. `request.seed` is
    /// echoed in the metadata but not used to reseed `rng`.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        request: &GenerationRequest,
        rng: &mut R,
    ) -> Result<QuizResult> {
        let normalized = request.normalize()?;
        Ok(self.generate_normalized(&normalized, rng))
    }

    fn generate_normalized<R: Rng + ?Sized>(
        &self,
        request: &NormalizedRequest,
        rng: &mut R,
    ) -> QuizResult {
        tracing::debug!(
            topics = ?request.topics,
            quiz_type = %request.quiz_type,
            num_questions = request.num_questions,
            difficulty = %request.difficulty,
            seeded = request.seed.is_some(),
            "Generating quiz"
        );

        let questions: Vec<Question> = (0..request.num_questions)
            .map(|slot| {
                let topic = Topic::from_label(request.topic_for_slot(slot));
                let mut draft = generate_item(topic, request.difficulty, request.quiz_type, rng);

                if request.quiz_type.is_multiple_choice() {
                    draft.choices = Some(normalize_choices(
                        draft.choices.take().unwrap_or_default(),
                        &draft.answer,
                        rng,
                    ));
                }

                let question = draft.into_question(format!("Q{}", slot + 1));
                self.translator.translate(question, &request.output_language)
            })
            .collect();

        tracing::debug!(
            questions = questions.len(),
            language = %request.output_language,
            "Quiz generated"
        );

        QuizResult {
            metadata: QuizMetadata::from_request(request, Utc::now()),
            questions,
        }
    }
}

/// Final pass over a multiple-choice option list: guarantees the answer is
/// present and exactly four distinct options, padding with numeric fillers
/// when a generator came up short, then reshuffles.
pub fn normalize_choices<R: Rng + ?Sized>(
    choices: Vec<String>,
    answer: &str,
    rng: &mut R,
) -> Vec<String> {
    let mut options = ChoiceSet::with_answer(answer);
    options.extend(choices);
    options.fill_with(rng, |rng| rng.gen_range(FILLER_RANGE).to_string());
    options.into_shuffled(rng)
}

/// Generate a quiz with the default tag translator.
pub fn generate_quiz(request: &GenerationRequest) -> Result<QuizResult> {
    QuizGenerator::new().generate(request)
}

pub fn generate_quiz_with_rng<R: Rng + ?Sized>(
    request: &GenerationRequest,
    rng: &mut R,
) -> Result<QuizResult> {
    QuizGenerator::new().generate_with_rng(request, rng)
}
