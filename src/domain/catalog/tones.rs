use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 글의 어조
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, ToSchema)]
pub enum Tone {
    #[default]
    Conversational,
    Analytical,
    Narrative,
    Authoritative,
}

impl Tone {
    pub const ALL: [Tone; 4] = [
        Tone::Conversational,
        Tone::Analytical,
        Tone::Narrative,
        Tone::Authoritative,
    ];

    /// 프롬프트에 그대로 들어가는 라벨
    pub fn label(self) -> &'static str {
        match self {
            Tone::Conversational => "Conversational",
            Tone::Analytical => "Analytical",
            Tone::Narrative => "Narrative",
            Tone::Authoritative => "Authoritative",
        }
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
