use serde::Serialize;
use utoipa::ToSchema;

/// 빠른 시작용 주제 템플릿
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TopicTemplate {
    #[schema(example = "ai_creativity")]
    pub id: &'static str,

    #[schema(example = "AI & Creativity")]
    pub title: &'static str,

    pub topic: &'static str,

    /// 템플릿이 기본으로 고르는 프레임워크 id
    #[schema(example = "human_experience")]
    pub framework_id: &'static str,
}

pub(super) static TEMPLATES: [TopicTemplate; 3] = [
    TopicTemplate {
        id: "ai_creativity",
        title: "AI & Creativity",
        topic: "How artificial intelligence is transforming human creativity and artistic expression",
        framework_id: "human_experience",
    },
    TopicTemplate {
        id: "remote_work",
        title: "Remote Work Impact",
        topic: "How remote work is fundamentally changing our cities and social connections",
        framework_id: "systems_thinking",
    },
    TopicTemplate {
        id: "climate_ethics",
        title: "Climate Change Ethics",
        topic: "The ethical responsibilities of individuals and societies in addressing climate change",
        framework_id: "ethical_dimension",
    },
];
