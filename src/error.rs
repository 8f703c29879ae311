use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::response::ErrorResponse;

/// 애플리케이션 전역 에러 타입
#[derive(Debug, Error)]
pub enum AppError {
    /// 카탈로그에 없는 프레임워크/모델/템플릿 id
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    /// 네트워크 호출 전에 걸러지는 입력 오류
    #[error("{0}")]
    Validation(String),

    #[error("Invalid request body: {0}")]
    JsonParseFailed(String),

    /// 생성 대기 시간 초과 (재시도 가능)
    #[error("Generation timed out. Free models can be slow. Please try again.")]
    GenerationTimeout,

    /// 키 확인/연결 확인 등 생성이 아닌 호출의 대기 시간 초과
    #[error("{0} timed out")]
    RequestTimeout(&'static str),

    /// 생성 엔드포인트가 2xx 이외의 상태를 반환
    #[error("API Error: {status} - {body}")]
    Remote { status: u16, body: String },

    /// 연결 실패 등 전송 계층 오류
    #[error("Error: {0}")]
    Transport(String),

    /// 2xx 응답이지만 생성 텍스트를 찾을 수 없음
    #[error("Malformed generation response: {0}")]
    MalformedResponse(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    RateLimitExceeded(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        AppError::NotFound {
            kind,
            id: id.into(),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    /// 에러 코드 반환
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::NotFound { .. } => "COMMON404",
            AppError::Validation(_) | AppError::JsonParseFailed(_) => "COMMON400",
            AppError::GenerationTimeout => "ARTICLE_001",
            AppError::Remote { .. } => "ARTICLE_002",
            AppError::Transport(_) => "ARTICLE_003",
            AppError::MalformedResponse(_) => "ARTICLE_004",
            AppError::RequestTimeout(_) => "ARTICLE_005",
            AppError::Conflict(_) => "COMMON409",
            AppError::RateLimitExceeded(_) => "COMMON429",
            AppError::Internal(_) => "COMMON500",
        }
    }

    /// HTTP 상태 코드 반환
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Validation(_) | AppError::JsonParseFailed(_) => StatusCode::BAD_REQUEST,
            AppError::GenerationTimeout | AppError::RequestTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            AppError::Remote { .. } | AppError::MalformedResponse(_) => StatusCode::BAD_GATEWAY,
            AppError::Transport(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::RateLimitExceeded(_) => StatusCode::TOO_MANY_REQUESTS,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 호출자가 같은 요청을 다시 보내볼 만한 에러인지 여부
    ///
    /// 자동 재시도는 하지 않습니다. 판단은 호출자의 몫입니다.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AppError::GenerationTimeout
                | AppError::RequestTimeout(_)
                | AppError::Remote { .. }
                | AppError::Transport(_)
        )
    }

    /// 메트릭 라벨용 분류
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::NotFound { .. } => "not_found",
            AppError::Validation(_) | AppError::JsonParseFailed(_) => "validation",
            AppError::GenerationTimeout | AppError::RequestTimeout(_) => "timeout",
            AppError::Remote { .. } => "remote",
            AppError::Transport(_) => "transport",
            AppError::MalformedResponse(_) => "malformed",
            AppError::Conflict(_) => "conflict",
            AppError::RateLimitExceeded(_) => "rate_limited",
            AppError::Internal(_) => "internal",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.error_code();

        // Internal 에러는 내부 메시지를 노출하지 않음
        let message = match &self {
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal Server Error");
                "Server error, please try again later.".to_string()
            }
            other if status.is_server_error() => {
                tracing::warn!(code, error = %other, "Generation failed");
                other.to_string()
            }
            other => {
                tracing::debug!(code, error = %other, "Client error");
                other.to_string()
            }
        };

        (status, Json(ErrorResponse::new(code, message))).into_response()
    }
}

/// JsonRejection을 AppError로 변환
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::JsonParseFailed(rejection.body_text())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}
