use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::catalog::Tone;

/// 분석 깊이
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Depth {
    /// 3단 구성의 빠른 인사이트
    #[default]
    Quick,
    /// 7단 구성의 심층 분석
    Deep,
}

impl Depth {
    pub const ALL: [Depth; 2] = [Depth::Quick, Depth::Deep];

    /// 생성 토큰 예산
    pub fn max_tokens(self) -> u32 {
        match self {
            Depth::Quick => 800,
            Depth::Deep => 1200,
        }
    }

    pub fn layer_count(self) -> u8 {
        match self {
            Depth::Quick => 3,
            Depth::Deep => 7,
        }
    }

    /// 프롬프트에 명시하는 목표 분량 (강제하지 않음)
    pub fn word_target(self) -> &'static str {
        match self {
            Depth::Quick => "400-600",
            Depth::Deep => "800-1200",
        }
    }

    /// 화면에 안내하는 예상 소요 시간
    pub fn expected_time(self) -> &'static str {
        match self {
            Depth::Quick => "2-3 minutes",
            Depth::Deep => "8-12 minutes",
        }
    }

    pub fn info(self) -> DepthInfo {
        DepthInfo {
            id: self,
            layer_count: self.layer_count(),
            max_tokens: self.max_tokens(),
            word_target: self.word_target(),
            expected_time: self.expected_time(),
        }
    }
}

/// 분석 깊이 안내 정보
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DepthInfo {
    pub id: Depth,
    pub layer_count: u8,
    pub max_tokens: u32,
    #[schema(example = "400-600")]
    pub word_target: &'static str,
    #[schema(example = "2-3 minutes")]
    pub expected_time: &'static str,
}

/// 글 생성 요청 DTO
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateArticleRequest {
    /// 글의 주제 (1 ~ 2000자)
    #[validate(length(min = 1, max = 2000, message = "Topic must be 1 to 2000 characters"))]
    #[schema(example = "AI and creativity")]
    pub topic: String,

    /// 프레임워크 id
    #[schema(example = "human_experience")]
    pub framework: String,

    /// 모델 id
    #[schema(example = "balanced")]
    pub model: String,

    #[serde(default)]
    pub tone: Tone,

    #[serde(default)]
    pub depth: Depth,

    /// OpenRouter API 키
    #[validate(length(min = 1, message = "API key is required"))]
    #[schema(example = "sk-or-v1-...")]
    pub api_key: String,
}

/// 생성된 글
///
/// 세션의 "현재 결과" 슬롯에 보관되는 값입니다.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub text: String,

    /// 공백 기준 토큰 수
    #[schema(example = 512)]
    pub word_count: usize,

    /// 생성 소요 시간 (초, 소수점 2자리)
    #[schema(example = 12.34)]
    pub elapsed_secs: f64,

    pub topic: String,

    #[schema(example = "human_experience")]
    pub framework_id: String,
    #[schema(example = "Human Experience")]
    pub framework_name: String,

    #[schema(example = "balanced")]
    pub model_id: String,
    #[schema(example = "Gemma 2 9B (Balanced)")]
    pub model_name: String,

    pub tone: Tone,
    pub depth: Depth,
    #[schema(example = 3)]
    pub layer_count: u8,

    pub generated_at: DateTime<Utc>,
}

/// API 키 확인 요청 DTO
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerifyCredentialRequest {
    #[validate(length(min = 1, message = "API key is required"))]
    pub api_key: String,
}

/// API 키 확인 결과
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerifyCredentialResponse {
    /// `sk-or-` 접두사 여부 (참고용)
    pub format_valid: bool,

    /// 생성 엔드포인트가 키를 인정했는지 여부
    pub verified: bool,

    /// 확인 실패 시 사유
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// 내보내기 형식
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Text,
    Markdown,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ExportQuery {
    /// text 또는 markdown
    #[serde(default)]
    pub format: ExportFormat,
}
