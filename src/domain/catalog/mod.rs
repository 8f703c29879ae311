//! 템플릿 카탈로그
//!
//! 프레임워크, 모델, 어조, 빠른 시작 템플릿의 고정 조회 테이블입니다.
//! 모두 `static` 데이터이며 변경 연산이 없습니다.

pub mod handler;

mod frameworks;
mod models;
mod templates;
mod tones;

pub use frameworks::FrameworkDefinition;
pub use models::ModelDefinition;
pub use templates::TopicTemplate;
pub use tones::Tone;

use crate::error::AppError;

/// id로 프레임워크 조회
pub fn get_framework(id: &str) -> Result<&'static FrameworkDefinition, AppError> {
    frameworks::FRAMEWORKS
        .iter()
        .find(|f| f.id == id)
        .ok_or_else(|| AppError::not_found("framework", id))
}

/// id로 모델 조회
pub fn get_model(id: &str) -> Result<&'static ModelDefinition, AppError> {
    models::MODELS
        .iter()
        .find(|m| m.id == id)
        .ok_or_else(|| AppError::not_found("model", id))
}

pub fn get_template(id: &str) -> Result<&'static TopicTemplate, AppError> {
    templates::TEMPLATES
        .iter()
        .find(|t| t.id == id)
        .ok_or_else(|| AppError::not_found("template", id))
}

pub fn frameworks() -> &'static [FrameworkDefinition] {
    &frameworks::FRAMEWORKS
}

pub fn models() -> &'static [ModelDefinition] {
    &models::MODELS
}

pub fn templates() -> &'static [TopicTemplate] {
    &templates::TEMPLATES
}

pub fn tones() -> &'static [Tone] {
    &Tone::ALL
}
