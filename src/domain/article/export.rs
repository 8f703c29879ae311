//! 생성된 글 내보내기 (텍스트 / 마크다운)

use super::dto::{Article, ExportFormat};

impl ExportFormat {
    pub fn content_type(self) -> &'static str {
        match self {
            ExportFormat::Text => "text/plain; charset=utf-8",
            ExportFormat::Markdown => "text/markdown; charset=utf-8",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Markdown => "md",
        }
    }
}

/// 본문만 담은 텍스트 문서
pub fn to_plain_text(article: &Article) -> String {
    article.text.clone()
}

/// 주제, 프레임워크, 모델, 생성 시각 헤더를 붙인 마크다운 문서
pub fn to_markdown(article: &Article) -> String {
    format!(
        "# Philosophical Analysis: {topic}\n\n\
         ## Framework: {framework}\n\
         ## Model: {model}\n\
         ## Generated: {generated}\n\n\
         {text}\n",
        topic = article.topic,
        framework = article.framework_name,
        model = article.model_name,
        generated = article.generated_at.format("%Y-%m-%d %H:%M"),
        text = article.text,
    )
}

pub fn render(article: &Article, format: ExportFormat) -> String {
    match format {
        ExportFormat::Text => to_plain_text(article),
        ExportFormat::Markdown => to_markdown(article),
    }
}

/// 다운로드 파일명 (`philosophical_article_YYYYMMDD_HHMM.ext`)
pub fn file_name(article: &Article, format: ExportFormat) -> String {
    format!(
        "philosophical_article_{}.{}",
        article.generated_at.format("%Y%m%d_%H%M"),
        format.extension()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::dto::Depth;
    use crate::domain::catalog::Tone;
    use chrono::{TimeZone, Utc};

    fn article() -> Article {
        Article {
            text: "Thinking is a journey.".to_string(),
            word_count: 4,
            elapsed_secs: 3.21,
            topic: "AI and creativity".to_string(),
            framework_id: "human_experience".to_string(),
            framework_name: "Human Experience".to_string(),
            model_id: "creative".to_string(),
            model_name: "Kat Coder Pro (Creative)".to_string(),
            tone: Tone::Narrative,
            depth: Depth::Quick,
            layer_count: 3,
            generated_at: Utc.with_ymd_and_hms(2026, 3, 7, 9, 5, 0).unwrap(),
        }
    }

    #[test]
    fn plain_text_should_be_article_text() {
        assert_eq!(to_plain_text(&article()), "Thinking is a journey.");
    }

    #[test]
    fn markdown_should_embed_header_block() {
        // Act
        let markdown = to_markdown(&article());

        // Assert
        assert_eq!(
            markdown,
            "# Philosophical Analysis: AI and creativity\n\n\
             ## Framework: Human Experience\n\
             ## Model: Kat Coder Pro (Creative)\n\
             ## Generated: 2026-03-07 09:05\n\n\
             Thinking is a journey.\n"
        );
    }

    #[test]
    fn file_name_should_use_generation_time() {
        let article = article();

        assert_eq!(
            file_name(&article, ExportFormat::Text),
            "philosophical_article_20260307_0905.txt"
        );
        assert_eq!(
            file_name(&article, ExportFormat::Markdown),
            "philosophical_article_20260307_0905.md"
        );
    }

    #[test]
    fn render_should_follow_format() {
        let article = article();

        assert_eq!(render(&article, ExportFormat::Text), to_plain_text(&article));
        assert_eq!(render(&article, ExportFormat::Markdown), to_markdown(&article));
    }
}
