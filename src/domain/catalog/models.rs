use serde::Serialize;
use utoipa::ToSchema;

/// 생성 모델 정의
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ModelDefinition {
    #[schema(example = "balanced")]
    pub id: &'static str,

    #[schema(example = "Gemma 2 9B (Balanced)")]
    pub display_name: &'static str,

    /// 생성 엔드포인트에 전달하는 모델 식별자
    #[schema(example = "google/gemma-2-9b-it:free")]
    pub remote_id: &'static str,

    #[schema(value_type = Vec<String>)]
    pub strengths: [&'static str; 3],
}

pub(super) static MODELS: [ModelDefinition; 3] = [
    ModelDefinition {
        id: "creative",
        display_name: "Kat Coder Pro (Creative)",
        remote_id: "kwaipilot/kat-coder-pro:free",
        strengths: ["Narrative writing", "Creative expression", "Storytelling"],
    },
    ModelDefinition {
        id: "analytical",
        display_name: "Nemotron Nano (Analytical)",
        remote_id: "nvidia/nemotron-nano-12b-vl:free",
        strengths: ["Structured analysis", "Logical reasoning", "Technical clarity"],
    },
    ModelDefinition {
        id: "balanced",
        display_name: "Gemma 2 9B (Balanced)",
        remote_id: "google/gemma-2-9b-it:free",
        strengths: ["General purpose", "Balanced responses", "Reliable performance"],
    },
];
