use pretty_assertions::assert_eq;
use quizgen_api::chat::{ChatCompletion, ChatError, ChatPrompt, ChatSettings, OpenAiChatClient};
use serde_json::json;
use wiremock::matchers::{bearer_token, body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ===== Test Helper Functions =====

fn client_for(server: &MockServer) -> OpenAiChatClient {
    let settings = ChatSettings::default()
        .with_base_url(server.uri())
        .with_api_key("sk-test");
    OpenAiChatClient::new(settings).unwrap()
}

fn completion_body(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "model": "gpt-4o-mini-2024-07-18",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 12, "completion_tokens": 3, "total_tokens": 15}
    })
}

// ===== Success Tests =====

#[tokio::test]
async fn test_complete_sends_prompt_and_credential() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(bearer_token("sk-test"))
        .and(body_partial_json(json!({
            "model": "gpt-4o-mini",
            "messages": [{"role": "user", "content": "What is 2 + 2?"}],
            "temperature": 0.2,
            "max_tokens": 1500
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("4")))
        .expect(1)
        .mount(&server)
        .await;

    let reply = client_for(&server)
        .complete(ChatPrompt::new("What is 2 + 2?"))
        .await
        .unwrap();

    assert_eq!(reply.content, "4");
    assert_eq!(reply.model, "gpt-4o-mini-2024-07-18");
    assert_eq!(reply.usage.unwrap().total_tokens, 15);
}

#[tokio::test]
async fn test_complete_uses_requested_model() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(json!({"model": "GPT-5"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"content": "ok"}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut prompt = ChatPrompt::new("Hi");
    prompt.model = Some("GPT-5".to_string());

    let reply = client_for(&server).complete(prompt).await.unwrap();

    // model falls back to the requested one when the upstream omits it
    assert_eq!(reply.model, "GPT-5");
    assert_eq!(reply.usage, None);
}

// ===== Failure Tests =====

#[tokio::test]
async fn test_missing_credential_skips_network() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = OpenAiChatClient::new(ChatSettings::default().with_base_url(server.uri())).unwrap();
    assert!(!client.has_credential());

    let err = client.complete(ChatPrompt::new("Hi")).await.unwrap_err();
    assert!(matches!(err, ChatError::MissingCredential));
}

#[tokio::test]
async fn test_error_status_is_reported() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .complete(ChatPrompt::new("Hi"))
        .await
        .unwrap_err();

    match err {
        ChatError::Status { status, ref body } => {
            assert_eq!(status, 401);
            assert_eq!(body, "invalid api key");
        }
        other => panic!("Expected Status error, got {:?}", other),
    }
    assert_eq!(err.kind(), "UpstreamStatusError");
}

#[tokio::test]
async fn test_empty_content_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("   ")))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .complete(ChatPrompt::new("Hi"))
        .await
        .unwrap_err();

    assert!(matches!(err, ChatError::EmptyResponse));
}

#[tokio::test]
async fn test_no_choices_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .complete(ChatPrompt::new("Hi"))
        .await
        .unwrap_err();

    assert!(matches!(err, ChatError::EmptyResponse));
}

#[tokio::test]
async fn test_non_json_body_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .complete(ChatPrompt::new("Hi"))
        .await
        .unwrap_err();

    assert!(matches!(err, ChatError::Decode(_)));
    assert_eq!(err.kind(), "DecodeError");
}

#[test]
fn test_settings_debug_redacts_key() {
    let settings = ChatSettings::default().with_api_key("sk-secret");
    let rendered = format!("{:?}", settings);
    assert!(!rendered.contains("sk-secret"));
    assert!(rendered.contains("[REDACTED]"));
}
