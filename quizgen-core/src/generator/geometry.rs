use rand::Rng;
use std::ops::RangeInclusive;

use super::choices::ChoiceSet;
use crate::domain::{Difficulty, QuestionDraft, QuizType, Topic};
use crate::traits::ItemGenerator;

const SIDE_RANGE: RangeInclusive<i64> = 2..=20;
const UNITS: [&str; 3] = ["cm", "m", "in"];

/// A rectangle with integer sides in a single unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rectangle {
    pub length: i64,
    pub width: i64,
    pub unit: &'static str,
}

impl Rectangle {
    pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let length = rng.gen_range(SIDE_RANGE);
        let width = rng.gen_range(SIDE_RANGE);
        let unit = UNITS[rng.gen_range(0..UNITS.len())];
        Self { length, width, unit }
    }

    pub fn area(&self) -> i64 {
        self.length * self.width
    }

    fn squared(&self, value: i64) -> String {
        format!("{} {}^2", value, self.unit)
    }

    pub fn stem(&self) -> String {
        format!(
            "A rectangle has length {l}{u} and width {w}{u}. What is its area?",
            l = self.length,
            w = self.width,
            u = self.unit,
        )
    }

    pub fn answer(&self) -> String {
        self.squared(self.area())
    }

    pub fn worked_solution(&self) -> String {
        format!(
            "Area = length × width = {} × {} = {}",
            self.length,
            self.width,
            self.answer()
        )
    }

    /// Half perimeter, full perimeter, and the side difference squared-unit.
    pub fn distractors(&self) -> [String; 3] {
        let sum = self.length + self.width;
        [
            format!("{} {}", sum, self.unit),
            format!("{} {}", 2 * sum, self.unit),
            self.squared((self.length - self.width).abs()),
        ]
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GeometryGenerator;

impl ItemGenerator for GeometryGenerator {
    fn topic(&self) -> Topic {
        Topic::Geometry
    }

    fn generate<R: Rng + ?Sized>(
        &self,
        difficulty: Difficulty,
        quiz_type: QuizType,
        rng: &mut R,
    ) -> QuestionDraft {
        let rectangle = Rectangle::draw(rng);
        let answer = rectangle.answer();

        let choices = if quiz_type.is_multiple_choice() {
            let mut options = ChoiceSet::with_answer(answer.clone());
            options.extend(rectangle.distractors());
            options.fill_with(rng, |rng| {
                let deltas = [
                    -rectangle.length,
                    -rectangle.width,
                    rectangle.length,
                    rectangle.width,
                ];
                let delta = deltas[rng.gen_range(0..deltas.len())];
                rectangle.squared(rectangle.area() + delta)
            });
            Some(options.into_shuffled(rng))
        } else {
            None
        };

        QuestionDraft {
            topic: self.topic(),
            difficulty,
            stem: rectangle.stem(),
            choices,
            answer,
            worked_solution: rectangle.worked_solution(),
        }
    }
}
