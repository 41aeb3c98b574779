use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use quizgen_core::CoreError;
use thiserror::Error;
use validator::ValidationErrors;

use crate::chat::ChatError;
use crate::dto::ErrorResponse;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Upstream error: {0}")]
    Upstream(String),
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(msg) => ApiError::Validation(msg),
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        CoreError::from(errors).into()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<ChatError> for ApiError {
    fn from(err: ChatError) -> Self {
        if matches!(err, ChatError::MissingCredential) {
            return ApiError::Configuration(err.to_string());
        }
        ApiError::Upstream(format!("{}: {}", err.kind(), err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, category, detail) = match self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, "Validation error", msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "Bad request", msg),
            ApiError::Configuration(msg) => {
                tracing::error!("Configuration error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Configuration error", msg)
            }
            ApiError::Upstream(msg) => {
                tracing::error!("Upstream error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Upstream error", msg)
            }
        };

        let body = ErrorResponse {
            error: category.to_string(),
            detail,
        };

        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
