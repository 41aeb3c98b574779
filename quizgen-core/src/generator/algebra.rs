use rand::Rng;
use std::ops::RangeInclusive;

use super::choices::{format_quotient, ChoiceSet};
use crate::domain::{Difficulty, QuestionDraft, QuizType, Topic};
use crate::traits::ItemGenerator;

const COEFFICIENT_RANGE: RangeInclusive<i64> = 1..=9;
const OFFSET_RANGE: RangeInclusive<i64> = -12..=12;
const SOLUTION_RANGE: RangeInclusive<i64> = -10..=10;
const PERTURBATIONS: [i64; 4] = [-2, -1, 1, 2];

/// `a·x + b = c` with an exact integer solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearEquation {
    pub a: i64,
    pub b: i64,
    pub solution: i64,
}

impl LinearEquation {
    pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let a = rng.gen_range(COEFFICIENT_RANGE);
        let b = rng.gen_range(OFFSET_RANGE);
        let solution = rng.gen_range(SOLUTION_RANGE);
        Self { a, b, solution }
    }

    pub fn c(&self) -> i64 {
        self.a * self.solution + self.b
    }

    pub fn stem(&self) -> String {
        format!("Solve for x: {}x + {} = {}", self.a, self.b, self.c())
    }

    pub fn worked_solution(&self) -> String {
        let c = self.c();
        format!(
            "{a}x + {b} = {c} ⇒ {a}x = {rhs} ⇒ x = {rhs}/{a} = {sol}",
            a = self.a,
            b = self.b,
            c = c,
            rhs = c - self.b,
            sol = self.solution,
        )
    }

    /// Answers from common slips: adding `b` instead of subtracting it,
    /// flipping the sign, and multiplying by `a` instead of dividing.
    /// Quotients print as integers when exact and otherwise round to two
    /// decimals (`"0.33"`, never `"3.0"` or a full-precision float).
    pub fn distractors(&self) -> [String; 3] {
        let c = self.c();
        [
            format_quotient(c + self.b, self.a),
            format_quotient(self.b - c, self.a),
            ((c - self.b) * self.a).to_string(),
        ]
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AlgebraGenerator;

impl ItemGenerator for AlgebraGenerator {
    fn topic(&self) -> Topic {
        Topic::Algebra
    }

    fn generate<R: Rng + ?Sized>(
        &self,
        difficulty: Difficulty,
        quiz_type: QuizType,
        rng: &mut R,
    ) -> QuestionDraft {
        let equation = LinearEquation::draw(rng);
        let answer = equation.solution.to_string();

        let choices = if quiz_type.is_multiple_choice() {
            let mut options = ChoiceSet::with_answer(answer.clone());
            options.extend(equation.distractors());
            options.fill_with(rng, |rng| {
                let delta = PERTURBATIONS[rng.gen_range(0..PERTURBATIONS.len())];
                (equation.solution + delta).to_string()
            });
            Some(options.into_shuffled(rng))
        } else {
            None
        };

        QuestionDraft {
            topic: self.topic(),
            difficulty,
            stem: equation.stem(),
            choices,
            answer,
            worked_solution: equation.worked_solution(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stem_and_worked_solution_layout() {
        let equation = LinearEquation { a: 3, b: -5, solution: 4 };
        assert_eq!(equation.c(), 7);
        assert_eq!(equation.stem(), "Solve for x: 3x + -5 = 7");
        assert_eq!(
            equation.worked_solution(),
            "3x + -5 = 7 ⇒ 3x = 12 ⇒ x = 12/3 = 4"
        );
    }

    #[test]
    fn test_distractors() {
        let equation = LinearEquation { a: 2, b: 3, solution: 5 };
        // c = 13
        assert_eq!(equation.distractors(), ["8", "-5", "20"]);

        let equation = LinearEquation { a: 4, b: 1, solution: 2 };
        // c = 9, (9 + 1) / 4 = 2.5, (1 - 9) / 4 = -2, (9 - 1) * 4 = 32
        assert_eq!(equation.distractors(), ["2.5", "-2", "32"]);
    }
}
