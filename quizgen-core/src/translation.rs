//! Placeholder localization.
//!
//! [`TagTranslator`] does not translate anything: it marks display text with
//! the requested language so clients can tell the field went through the
//! localization step. The `answer` field is left alone because it is compared
//! for grading.

use crate::domain::Question;
use crate::traits::Translator;

/// True for `english` or `en`, ignoring case.
pub fn is_english(language: &str) -> bool {
    let language = language.to_lowercase();
    language == "english" || language == "en"
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TagTranslator;

impl TagTranslator {
    pub fn translate_text(&self, text: &str, language: &str) -> String {
        if is_english(language) {
            return text.to_string();
        }
        format!("[{}] {}", language, text)
    }
}

impl Translator for TagTranslator {
    fn translate(&self, question: Question, language: &str) -> Question {
        if is_english(language) {
            return question;
        }

        Question {
            stem: self.translate_text(&question.stem, language),
            choices: question.choices.map(|choices| {
                choices
                    .iter()
                    .map(|choice| self.translate_text(choice, language))
                    .collect()
            }),
            worked_solution: self.translate_text(&question.worked_solution, language),
            ..question
        }
    }
}
