use async_trait::async_trait;
use tracing::debug;

use super::{ContentGenerator, GeneratedContent};
use crate::errors::Result;

const TITLE_PREFIX_CHARS: usize = 20;
const MAX_PROMPT_KEYWORDS: usize = 5;
const PLACEHOLDER_IMAGE: &str = "https://example.com/ai-generated-image.jpg";

/// Offline generator that fills a fixed template from the prompt
#[derive(Debug, Clone, Default)]
pub struct TemplateContentGenerator;

impl TemplateContentGenerator {
    pub fn new() -> Self {
        Self
    }

    /// First words of the prompt longer than three characters
    fn prompt_keywords(prompt: &str) -> Vec<String> {
        prompt
            .split(' ')
            .filter(|word| word.chars().count() > 3)
            .take(MAX_PROMPT_KEYWORDS)
            .map(String::from)
            .collect()
    }
}

#[async_trait]
impl ContentGenerator for TemplateContentGenerator {
    async fn generate(&self, prompt: &str) -> Result<GeneratedContent> {
        let head: String = prompt.chars().take(TITLE_PREFIX_CHARS).collect();
        debug!("TemplateContentGenerator: generating for '{}'", head);

        Ok(GeneratedContent {
            title: format!("AI Generated: {}...", head),
            content: format!(
                "This is AI generated content based on your prompt: \"{}\". It includes detailed \
                 information about the topic with relevant facts and engaging descriptions.",
                prompt
            ),
            keywords: Self::prompt_keywords(prompt),
            image_url: PLACEHOLDER_IMAGE.to_string(),
        })
    }
}
