use axum::Json;
use quizgen_core::{generate_quiz, GenerationRequest, QuizResult};

use crate::{error::ApiResult, extract::ValidatedJson};

pub async fn generate(
    ValidatedJson(payload): ValidatedJson<GenerationRequest>,
) -> ApiResult<Json<QuizResult>> {
    let result = generate_quiz(&payload)?;

    tracing::info!(
        questions = result.questions.len(),
        quiz_type = %result.metadata.quiz_type,
        seeded = result.metadata.seed.is_some(),
        "Generated quiz"
    );

    Ok(Json(result))
}
