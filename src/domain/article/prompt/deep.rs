//! 심층 분석 프롬프트 (7단 구성)

use super::first_clause;
use crate::domain::article::dto::Depth;
use crate::domain::catalog::{FrameworkDefinition, Tone};

/// 7단 구성 프롬프트 생성
///
/// 세 사상가가 각각 별도의 분석 단락을 맡습니다.
pub fn build_deep_prompt(topic: &str, framework: &FrameworkDefinition, tone: Tone) -> String {
    let [primary, secondary, critic] = framework.thinkers;
    let [first_question, second_question, _] = framework.guiding_questions;

    format!(
        r#"As a philosophical journalist, conduct a deep analysis of: "{topic}"

PHILOSOPHICAL FRAMEWORK: {lens}
THINKERS: {primary}, {secondary}, {critic}

Write a comprehensive {words} word article with this 7-layer structure:

1. HUMAN NARRATIVE: Begin with a vivid, relatable story or example that grounds the topic in human experience.

2. HISTORICAL CONTEXT: Place the topic in broader historical and cultural context. How have similar issues evolved?

3. PHILOSOPHICAL DEPTH: Apply {lens} perspective using {primary}'s framework for {first_clause}.

4. INTERCONNECTIONS: Explore how {secondary}'s ideas about {second_clause} relate to this topic.

5. CRITICAL REFLECTION: Incorporate {critic}'s perspective to challenge assumptions and reveal hidden dimensions.

6. CONTEMPORARY RELEVANCE: Connect these philosophical insights to current events, technologies, or social trends.

7. TRANSFORMATIVE INSIGHTS: Provide profound takeaways, reflective questions, and practical applications for readers.

TONE: {tone} - Maintain philosophical depth while ensuring accessibility.

Weave these layers together seamlessly, creating an article that enlightens and transforms the reader's understanding."#,
        lens = framework.display_name,
        words = Depth::Deep.word_target(),
        first_clause = first_clause(first_question).to_lowercase(),
        second_clause = first_clause(second_question).to_lowercase(),
        tone = tone.label(),
    )
}
