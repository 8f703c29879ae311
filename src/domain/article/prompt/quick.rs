//! 빠른 인사이트 프롬프트 (3단 구성)

use crate::domain::article::dto::Depth;
use crate::domain::catalog::{FrameworkDefinition, Tone};

/// 3단 구성 프롬프트 생성
///
/// 앞의 두 사상가와 첫 번째 핵심 질문만 사용합니다.
pub fn build_quick_prompt(topic: &str, framework: &FrameworkDefinition, tone: Tone) -> String {
    let [first_thinker, second_thinker, _] = framework.thinkers;
    let first_question = framework.guiding_questions[0];

    format!(
        r#"As a philosophical journalist, analyze this topic: "{topic}"

PHILOSOPHICAL LENS: {lens}
KEY THINKERS: {first_thinker}, {second_thinker}
CORE QUESTION: {first_question}

Write a {words} word article with this 3-layer structure:

1. THE HUMAN STORY: Start with a compelling narrative or personal example that makes this topic relatable and concrete.

2. PHILOSOPHICAL ANALYSIS: Apply the {lens} perspective using insights from {first_thinker} and {second_thinker}. Connect to the core question about {question_lower}

3. ACTIONABLE INSIGHTS: Provide practical takeaways, questions for further reflection, or suggestions for how readers can engage with these ideas.

TONE: {tone} - Maintain this tone throughout.

Focus on making complex philosophical ideas accessible and relevant to contemporary readers."#,
        lens = framework.display_name,
        words = Depth::Quick.word_target(),
        question_lower = first_question.to_lowercase(),
        tone = tone.label(),
    )
}
