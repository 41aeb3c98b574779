use axum::{extract::State, Json};

use crate::{dto::*, error::ApiResult, extract::ValidatedJson, AppState};

pub async fn complete(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ChatRequest>,
) -> ApiResult<Json<ChatResponse>> {
    let reply = state.chat.complete(payload.into()).await?;
    Ok(Json(reply.into()))
}
