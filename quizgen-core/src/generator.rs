pub mod algebra;
pub mod choices;
pub mod geometry;
pub mod rng;

pub use algebra::*;
pub use choices::*;
pub use geometry::*;
pub use rng::*;

use rand::Rng;

use crate::domain::{Difficulty, QuestionDraft, QuizType, Topic};
use crate::traits::ItemGenerator;

/// Dispatch a topic to its generator.
pub fn generate_item<R: Rng + ?Sized>(
    topic: Topic,
    difficulty: Difficulty,
    quiz_type: QuizType,
    rng: &mut R,
) -> QuestionDraft {
    match topic {
        Topic::Algebra => AlgebraGenerator.generate(difficulty, quiz_type, rng),
        Topic::Geometry => GeometryGenerator.generate(difficulty, quiz_type, rng),
    }
}
