use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use quizgen_api::chat::{ChatCompletion, ChatError, ChatPrompt, ChatReply};
use quizgen_api::observability::REQUEST_ID_HEADER;
use quizgen_api::*;
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

// ===== Test Helper Functions =====

struct UnusedChat;

#[async_trait::async_trait]
impl ChatCompletion for UnusedChat {
    async fn complete(&self, _prompt: ChatPrompt) -> Result<ChatReply, ChatError> {
        Err(ChatError::MissingCredential)
    }
}

fn create_test_app(cors: CorsConfig) -> Router {
    quizgen_api::build_router(AppState::new(Arc::new(UnusedChat)), &cors)
}

fn get_health() -> Request<Body> {
    Request::builder()
        .uri("/health")
        .method("GET")
        .body(Body::empty())
        .unwrap()
}

// ===== Request ID Tests =====

#[tokio::test]
async fn test_request_id_is_generated() {
    let response = create_test_app(CorsConfig::default())
        .oneshot(get_health())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let id = response
        .headers()
        .get(REQUEST_ID_HEADER)
        .expect("request id header")
        .to_str()
        .unwrap();
    assert!(Uuid::parse_str(id).is_ok());
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let request = Request::builder()
        .uri("/health")
        .method("GET")
        .header(REQUEST_ID_HEADER, "client-supplied-id")
        .body(Body::empty())
        .unwrap();

    let response = create_test_app(CorsConfig::default())
        .oneshot(request)
        .await
        .unwrap();

    assert_eq!(
        response.headers().get(REQUEST_ID_HEADER).unwrap(),
        "client-supplied-id"
    );
}

// ===== CORS Tests =====

#[tokio::test]
async fn test_cors_allows_configured_origin() {
    let request = Request::builder()
        .uri("/generate_quiz")
        .method(Method::OPTIONS)
        .header(header::ORIGIN, "http://localhost:5174")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();

    let response = create_test_app(CorsConfig::default())
        .oneshot(request)
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "http://localhost:5174"
    );
    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
        .is_none());
}

#[tokio::test]
async fn test_cors_rejects_unknown_origin() {
    let request = Request::builder()
        .uri("/health")
        .method("GET")
        .header(header::ORIGIN, "http://evil.example")
        .body(Body::empty())
        .unwrap();

    let response = create_test_app(CorsConfig::default())
        .oneshot(request)
        .await
        .unwrap();

    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}

#[tokio::test]
async fn test_cors_development_allows_any_origin() {
    let request = Request::builder()
        .uri("/health")
        .method("GET")
        .header(header::ORIGIN, "http://anything.example")
        .body(Body::empty())
        .unwrap();

    let response = create_test_app(CorsConfig::development())
        .oneshot(request)
        .await
        .unwrap();

    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
}
