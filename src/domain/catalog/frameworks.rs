//! 철학 프레임워크(렌즈) 정의
//!
//! 프로세스 시작 시점부터 고정된 네 가지 렌즈입니다. 쓰기 경로는 없습니다.

use serde::Serialize;
use utoipa::ToSchema;

/// 철학 프레임워크 정의
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkDefinition {
    #[schema(example = "human_experience")]
    pub id: &'static str,

    #[schema(example = "Human Experience")]
    pub display_name: &'static str,

    /// 참조 사상가 (순서 유지, 3명)
    #[schema(value_type = Vec<String>)]
    pub thinkers: [&'static str; 3],

    /// 핵심 질문 (순서 유지, 3개)
    #[schema(value_type = Vec<String>)]
    pub guiding_questions: [&'static str; 3],

    #[schema(example = "#FF6B6B")]
    pub color: &'static str,
}

pub(super) static FRAMEWORKS: [FrameworkDefinition; 4] = [
    FrameworkDefinition {
        id: "human_experience",
        display_name: "Human Experience",
        thinkers: ["Aristotle", "Hannah Arendt", "Albert Camus"],
        guiding_questions: [
            "What does this mean for human flourishing?",
            "How does this impact daily lived experience?",
            "What are the emotional and psychological dimensions?",
        ],
        color: "#FF6B6B",
    },
    FrameworkDefinition {
        id: "ethical_dimension",
        display_name: "Ethical Dimension",
        thinkers: ["Immanuel Kant", "John Stuart Mill", "Martha Nussbaum"],
        guiding_questions: [
            "What are the moral implications and consequences?",
            "Who benefits and who bears the costs?",
            "What principles of justice apply?",
        ],
        color: "#4ECDC4",
    },
    FrameworkDefinition {
        id: "systems_thinking",
        display_name: "Systems Thinking",
        thinkers: ["Karl Marx", "Michel Foucault", "Donna Haraway"],
        guiding_questions: [
            "What larger systems and structures are at play?",
            "What power dynamics are involved?",
            "How are different elements interconnected?",
        ],
        color: "#45B7D1",
    },
    FrameworkDefinition {
        id: "existential_reflection",
        display_name: "Existential Reflection",
        thinkers: ["Jean-Paul Sartre", "Simone de Beauvoir", "Friedrich Nietzsche"],
        guiding_questions: [
            "What does this reveal about human freedom and responsibility?",
            "How does this shape identity and meaning?",
            "What authentic responses are possible?",
        ],
        color: "#96CEB4",
    },
];
