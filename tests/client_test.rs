//! OpenRouterClient 테스트
//!
//! 로컬 axum 서버를 생성 엔드포인트 대역으로 띄워 실제 HTTP 왕복을 검증합니다.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use philosophical_journalist::{
    config::AppConfig,
    domain::article::client::{ChatCompletionRequest, ChatMessage},
    error::AppError,
    GenerationClientTrait, OpenRouterClient,
};
use serde_json::{json, Value};

/// 대역 서버가 받은 요청 (헤더, 본문)
type Captured = Arc<Mutex<Option<(HeaderMap, Value)>>>;

async fn spawn(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

fn client_for(addr: SocketAddr, generation_timeout: Duration) -> OpenRouterClient {
    let config = AppConfig {
        api_base: format!("http://{}", addr),
        generation_timeout,
        referer: Some("http://localhost:8501".to_string()),
        ..AppConfig::default()
    };
    OpenRouterClient::new(&config).unwrap()
}

fn sample_request() -> ChatCompletionRequest {
    ChatCompletionRequest {
        model: "google/gemma-2-9b-it:free".to_string(),
        messages: vec![ChatMessage::system("system"), ChatMessage::user("prompt")],
        max_tokens: 800,
        temperature: 0.7,
    }
}

#[tokio::test]
async fn complete_should_return_first_choice_text() {
    // Arrange
    let captured: Captured = Arc::default();
    let sink = captured.clone();
    let router = Router::new().route(
        "/chat/completions",
        post(move |headers: HeaderMap, Json(body): Json<Value>| {
            let sink = sink.clone();
            async move {
                *sink.lock().unwrap() = Some((headers, body));
                Json(json!({
                    "choices": [{ "message": { "role": "assistant", "content": "Hello world" } }]
                }))
            }
        }),
    );
    let addr = spawn(router).await;
    let client = client_for(addr, Duration::from_secs(5));

    // Act
    let text = client.complete(&sample_request(), "sk-or-v1-abc").await.unwrap();

    // Assert
    assert_eq!(text, "Hello world");

    let (headers, body) = captured.lock().unwrap().take().unwrap();
    assert_eq!(headers["authorization"], "Bearer sk-or-v1-abc");
    assert_eq!(headers["x-title"], "Philosophical AI Journalist");
    assert_eq!(headers["http-referer"], "http://localhost:8501");
    assert_eq!(body["model"], "google/gemma-2-9b-it:free");
    assert_eq!(body["max_tokens"], 800);
    assert_eq!(body["temperature"], 0.7);
    assert_eq!(body["messages"][0]["role"], "system");
    assert_eq!(body["messages"][1]["content"], "prompt");
}

#[tokio::test]
async fn complete_should_carry_remote_status_and_body() {
    let router = Router::new().route(
        "/chat/completions",
        post(|| async { (StatusCode::UNAUTHORIZED, "invalid key") }),
    );
    let addr = spawn(router).await;
    let client = client_for(addr, Duration::from_secs(5));

    let result = client.complete(&sample_request(), "bad").await;

    match result {
        Err(AppError::Remote { status, body }) => {
            assert_eq!(status, 401);
            assert_eq!(body, "invalid key");
        }
        other => panic!("Expected Remote error, got {:?}", other),
    }
}

#[tokio::test]
async fn complete_should_time_out_on_slow_endpoint() {
    // Arrange: 응답이 대기 시간보다 늦음
    let router = Router::new().route(
        "/chat/completions",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(2)).await;
            Json(json!({ "choices": [] }))
        }),
    );
    let addr = spawn(router).await;
    let client = client_for(addr, Duration::from_millis(100));

    // Act
    let result = client.complete(&sample_request(), "sk-or-v1-abc").await;

    // Assert
    assert!(matches!(result, Err(AppError::GenerationTimeout)));
}

#[tokio::test]
async fn complete_should_reject_success_without_content() {
    let router = Router::new().route(
        "/chat/completions",
        post(|| async { Json(json!({ "choices": [] })) }),
    );
    let addr = spawn(router).await;
    let client = client_for(addr, Duration::from_secs(5));

    let result = client.complete(&sample_request(), "sk-or-v1-abc").await;

    assert!(matches!(result, Err(AppError::MalformedResponse(_))));
}

#[tokio::test]
async fn complete_should_report_transport_error_when_unreachable() {
    // Arrange: 바인딩 후 바로 닫은 포트
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let client = client_for(addr, Duration::from_secs(5));

    // Act
    let result = client.complete(&sample_request(), "sk-or-v1-abc").await;

    // Assert
    assert!(matches!(result, Err(AppError::Transport(_))));
}

#[tokio::test]
async fn verify_credential_should_call_auth_key() {
    let router = Router::new().route(
        "/auth/key",
        get(|headers: HeaderMap| async move {
            if headers["authorization"] == "Bearer sk-or-v1-good" {
                (StatusCode::OK, "{\"data\":{}}")
            } else {
                (StatusCode::UNAUTHORIZED, "No auth credentials found")
            }
        }),
    );
    let addr = spawn(router).await;
    let client = client_for(addr, Duration::from_secs(5));

    assert!(client.verify_credential("sk-or-v1-good").await.is_ok());
    assert!(matches!(
        client.verify_credential("sk-or-v1-bad").await,
        Err(AppError::Remote { status: 401, .. })
    ));
}

#[tokio::test]
async fn check_connectivity_should_succeed_against_models_list() {
    let router = Router::new().route(
        "/models",
        get(|| async { Json(json!({ "data": [] })) }),
    );
    let addr = spawn(router).await;
    let client = client_for(addr, Duration::from_secs(5));

    assert!(client.check_connectivity().await.is_ok());
}
