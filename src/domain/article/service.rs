use std::time::Instant;

use chrono::Utc;
use validator::Validate;

use super::{
    client::{ChatCompletionRequest, ChatMessage, GenerationClient, TEMPERATURE},
    dto::{Article, Depth, GenerateArticleRequest, VerifyCredentialResponse},
    prompt::{build_prompt, SYSTEM_PROMPT},
};
use crate::domain::catalog::{self, FrameworkDefinition, ModelDefinition};
use crate::error::AppError;

/// OpenRouter API 키 접두사 (형식 검사는 참고용)
pub const CREDENTIAL_PREFIX: &str = "sk-or-";

/// 글 생성 디스패처
///
/// 세션 상태를 갖지 않습니다. 호출마다 독립적이며 자동 재시도는 하지 않습니다.
#[derive(Clone)]
pub struct GenerationService {
    client: GenerationClient,
}

impl GenerationService {
    pub fn new(client: GenerationClient) -> Self {
        Self { client }
    }

    /// 프롬프트 생성부터 응답 분류까지 한 번의 생성 수행
    ///
    /// 입력은 [`validate_request`]를 통과한 요청이어야 합니다.
    pub async fn generate(&self, input: ValidatedRequest<'_>) -> Result<Article, AppError> {
        let ValidatedRequest {
            request,
            framework,
            model,
        } = input;

        let prompt = build_prompt(request.depth, &request.topic, framework, request.tone);
        let payload = compose_payload(model, prompt, request.depth);

        tracing::info!(
            framework = framework.id,
            model = model.remote_id,
            depth = ?request.depth,
            max_tokens = payload.max_tokens,
            "Dispatching generation request"
        );

        let start = Instant::now();
        let outcome = self.client.complete(&payload, &request.api_key).await;
        let elapsed = start.elapsed();

        record_generation_metrics(request.depth, &outcome, elapsed.as_secs_f64());

        let text = outcome.map_err(|e| {
            tracing::warn!(
                error = %e,
                elapsed_ms = elapsed.as_millis() as u64,
                retryable = e.is_retryable(),
                "Generation failed"
            );
            e
        })?;

        let article = assemble_article(request, framework, model, text, elapsed.as_secs_f64());

        tracing::info!(
            word_count = article.word_count,
            elapsed_secs = article.elapsed_secs,
            "Article generated"
        );

        Ok(article)
    }

    /// API 키 확인
    ///
    /// 접두사 검사는 참고용이고, 실제 판단은 생성 엔드포인트의 인증 결과입니다.
    pub async fn verify_credential(&self, api_key: &str) -> VerifyCredentialResponse {
        let format_valid = credential_format_valid(api_key);

        match self.client.verify_credential(api_key).await {
            Ok(()) => VerifyCredentialResponse {
                format_valid,
                verified: true,
                reason: None,
            },
            Err(e) => {
                tracing::info!(error = %e, "Credential verification failed");
                VerifyCredentialResponse {
                    format_valid,
                    verified: false,
                    reason: Some(e.to_string()),
                }
            }
        }
    }

    pub async fn check_connectivity(&self) -> Result<(), AppError> {
        self.client.check_connectivity().await
    }
}

/// 생성 요청 본문 구성
pub fn compose_payload(model: &ModelDefinition, prompt: String, depth: Depth) -> ChatCompletionRequest {
    ChatCompletionRequest {
        model: model.remote_id.to_string(),
        messages: vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(prompt)],
        max_tokens: depth.max_tokens(),
        temperature: TEMPERATURE,
    }
}

/// 공백 기준 토큰 수
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

pub fn credential_format_valid(api_key: &str) -> bool {
    api_key.starts_with(CREDENTIAL_PREFIX)
}

/// 검증과 카탈로그 조회를 마친 생성 요청
#[derive(Debug, Clone, Copy)]
pub struct ValidatedRequest<'a> {
    request: &'a GenerateArticleRequest,
    framework: &'static FrameworkDefinition,
    model: &'static ModelDefinition,
}

/// 네트워크 호출 전 입력 검증
///
/// 형식 검사와 카탈로그 조회까지 포함하며, 실패하면 세션 상태를 건드리지 않아야 합니다.
pub fn validate_request(
    request: &GenerateArticleRequest,
) -> Result<ValidatedRequest<'_>, AppError> {
    request.validate()?;

    if request.topic.trim().is_empty() {
        return Err(AppError::validation("Topic must not be blank"));
    }
    if request.api_key.trim().is_empty() {
        return Err(AppError::validation("API key is required"));
    }
    if !credential_format_valid(&request.api_key) {
        tracing::warn!("API key does not start with {}", CREDENTIAL_PREFIX);
    }

    Ok(ValidatedRequest {
        request,
        framework: catalog::get_framework(&request.framework)?,
        model: catalog::get_model(&request.model)?,
    })
}

fn assemble_article(
    request: &GenerateArticleRequest,
    framework: &FrameworkDefinition,
    model: &ModelDefinition,
    text: String,
    elapsed_secs: f64,
) -> Article {
    Article {
        word_count: word_count(&text),
        text,
        elapsed_secs: (elapsed_secs * 100.0).round() / 100.0,
        topic: request.topic.clone(),
        framework_id: framework.id.to_string(),
        framework_name: framework.display_name.to_string(),
        model_id: model.id.to_string(),
        model_name: model.display_name.to_string(),
        tone: request.tone,
        depth: request.depth,
        layer_count: request.depth.layer_count(),
        generated_at: Utc::now(),
    }
}

fn record_generation_metrics(depth: Depth, outcome: &Result<String, AppError>, elapsed_secs: f64) {
    let depth = match depth {
        Depth::Quick => "quick",
        Depth::Deep => "deep",
    };
    let outcome = match outcome {
        Ok(_) => "success",
        Err(e) => e.kind(),
    };

    metrics::counter!(
        "article_generations_total",
        "depth" => depth,
        "outcome" => outcome
    )
    .increment(1);

    metrics::histogram!("article_generation_duration_seconds", "depth" => depth)
        .record(elapsed_secs);
}
