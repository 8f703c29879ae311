use std::sync::Arc;
use std::time::Duration;

use reqwest::{RequestBuilder, StatusCode};
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::error::AppError;

/// 생성 요청 샘플링 온도 (고정)
pub const TEMPERATURE: f64 = 0.7;

/// 키 확인용 타임아웃 (초)
const VERIFY_TIMEOUT_SECS: u64 = 10;

/// 헬스체크용 타임아웃 (초)
const CONNECTIVITY_TIMEOUT_SECS: u64 = 5;

/// 호출 종류 (시간 초과 에러 구분용)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Call {
    Generation,
    CredentialCheck,
    Connectivity,
}

impl Call {
    fn timeout_error(self) -> AppError {
        match self {
            Call::Generation => AppError::GenerationTimeout,
            Call::CredentialCheck => AppError::RequestTimeout("Credential verification"),
            Call::Connectivity => AppError::RequestTimeout("Connectivity check"),
        }
    }
}

/// 채팅 메시지 한 건
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system",
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user",
            content: content.into(),
        }
    }
}

/// `/chat/completions` 요청 본문
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f64,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

/// 생성 클라이언트 인터페이스
///
/// 생성 엔드포인트 호출을 추상화하여 테스트에서 Mock 객체로 대체할 수 있습니다.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait GenerationClientTrait: Send + Sync {
    /// 채팅 완성 요청 후 첫 번째 메시지 텍스트 반환
    async fn complete(
        &self,
        request: &ChatCompletionRequest,
        credential: &str,
    ) -> Result<String, AppError>;

    /// 인증된 가벼운 호출로 API 키 확인
    async fn verify_credential(&self, credential: &str) -> Result<(), AppError>;

    /// API 연결 상태 확인 (모델 목록 조회, 인증 불필요)
    async fn check_connectivity(&self) -> Result<(), AppError>;
}

/// Arc로 래핑된 생성 클라이언트 (Clone 지원)
pub type GenerationClient = Arc<dyn GenerationClientTrait>;

/// OpenRouter 호환 생성 클라이언트
#[derive(Debug, Clone)]
pub struct OpenRouterClient {
    http: reqwest::Client,
    api_base: String,
    timeout: Duration,
    referer: Option<String>,
    title: String,
}

impl OpenRouterClient {
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            timeout: config.generation_timeout,
            referer: config.referer.clone(),
            title: config.title.clone(),
        })
    }

    /// 인증 헤더와 식별 헤더 부착
    fn authorized(&self, builder: RequestBuilder, credential: &str) -> RequestBuilder {
        let builder = builder
            .bearer_auth(credential)
            .header("X-Title", &self.title);

        match &self.referer {
            Some(referer) => builder.header("HTTP-Referer", referer),
            None => builder,
        }
    }

    /// 요청 전송 후 (상태, 본문) 반환
    ///
    /// 본문 수신까지 포함해 `limit` 안에 끝나지 않으면 호출 종류에 맞는 시간 초과 에러.
    async fn send(
        &self,
        builder: RequestBuilder,
        limit: Duration,
        call: Call,
    ) -> Result<(StatusCode, String), AppError> {
        let exchange = async {
            let response = builder.send().await?;
            let status = response.status();
            let body = response.text().await?;
            Ok::<_, reqwest::Error>((status, body))
        };

        tokio::time::timeout(limit, exchange)
            .await
            .map_err(|_| call.timeout_error())?
            .map_err(|e| classify_transport_error(e, call))
    }
}

#[async_trait::async_trait]
impl GenerationClientTrait for OpenRouterClient {
    async fn complete(
        &self,
        request: &ChatCompletionRequest,
        credential: &str,
    ) -> Result<String, AppError> {
        let url = format!("{}/chat/completions", self.api_base);
        let builder = self.authorized(self.http.post(url), credential).json(request);

        let (status, body) = self.send(builder, self.timeout, Call::Generation).await?;
        if !status.is_success() {
            return Err(AppError::Remote {
                status: status.as_u16(),
                body,
            });
        }

        extract_content(&body)
    }

    async fn verify_credential(&self, credential: &str) -> Result<(), AppError> {
        let url = format!("{}/auth/key", self.api_base);
        let builder = self.authorized(self.http.get(url), credential);

        let (status, body) = self
            .send(
                builder,
                Duration::from_secs(VERIFY_TIMEOUT_SECS),
                Call::CredentialCheck,
            )
            .await?;
        if !status.is_success() {
            return Err(AppError::Remote {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }

    async fn check_connectivity(&self) -> Result<(), AppError> {
        let url = format!("{}/models", self.api_base);

        let (status, body) = self
            .send(
                self.http.get(url),
                Duration::from_secs(CONNECTIVITY_TIMEOUT_SECS),
                Call::Connectivity,
            )
            .await?;
        if !status.is_success() {
            return Err(AppError::Remote {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }
}

/// reqwest 에러를 AppError로 변환
fn classify_transport_error(error: reqwest::Error, call: Call) -> AppError {
    if error.is_timeout() {
        call.timeout_error()
    } else {
        AppError::Transport(error.to_string())
    }
}

/// 성공 응답 본문에서 첫 번째 메시지 텍스트 추출
fn extract_content(body: &str) -> Result<String, AppError> {
    let parsed: ChatCompletionResponse = serde_json::from_str(body)
        .map_err(|e| AppError::MalformedResponse(format!("invalid JSON: {}", e)))?;

    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| AppError::MalformedResponse("no message content in choices".to_string()))
}
