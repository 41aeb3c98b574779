//! HTTP surface for the quiz generator.
//!
//! Three routes: `GET /health`, `POST /generate_quiz` and `POST /ai_chat`.
//! [`routes`] builds the bare router; [`build_router`] adds the CORS,
//! request-logging and tracing layers the server runs with.

pub mod chat;
pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod observability;
pub mod security;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub use chat::{ChatCompletion, ChatSettings, OpenAiChatClient};
pub use dto::*;
pub use error::{ApiError, ApiResult};
pub use security::cors::CorsConfig;

#[derive(Clone)]
pub struct AppState {
    pub chat: Arc<dyn ChatCompletion>,
}

impl AppState {
    pub fn new(chat: Arc<dyn ChatCompletion>) -> Self {
        Self { chat }
    }
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/generate_quiz", post(handlers::quizzes::generate))
        .route("/ai_chat", post(handlers::chat::complete))
        .with_state(state)
}

/// The router with the middleware stack used in production.
pub fn build_router(state: AppState, cors: &CorsConfig) -> Router {
    routes(state)
        .layer(cors.to_layer())
        .layer(middleware::from_fn(
            observability::logging::request_logging_middleware,
        ))
        .layer(TraceLayer::new_for_http())
}
