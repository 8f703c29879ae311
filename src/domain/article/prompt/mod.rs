//! 글 생성 프롬프트 모듈
//!
//! 고정 템플릿에 주제, 프레임워크, 어조를 끼워 넣는 순수 함수들입니다.
//! I/O가 없고 같은 입력에는 항상 같은 문자열을 돌려줍니다.
//!
//! ## 구조
//! - `quick`: 3단 구성 빠른 인사이트 프롬프트
//! - `deep`: 7단 구성 심층 분석 프롬프트
//! - `system`: 생성기 페르소나 System Prompt

mod deep;
mod quick;
mod system;

pub use deep::build_deep_prompt;
pub use quick::build_quick_prompt;
pub use system::SYSTEM_PROMPT;

use super::dto::Depth;
use crate::domain::catalog::{FrameworkDefinition, Tone};

/// 깊이에 맞는 프롬프트 빌더 선택
pub fn build_prompt(depth: Depth, topic: &str, framework: &FrameworkDefinition, tone: Tone) -> String {
    match depth {
        Depth::Quick => build_quick_prompt(topic, framework, tone),
        Depth::Deep => build_deep_prompt(topic, framework, tone),
    }
}

/// 질문의 첫 `?` 앞부분
///
/// `?`가 없으면 질문 전체를 그대로 돌려줍니다.
pub fn first_clause(question: &str) -> &str {
    question
        .split_once('?')
        .map(|(clause, _)| clause)
        .unwrap_or(question)
}
