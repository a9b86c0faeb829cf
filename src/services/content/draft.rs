use tracing::{info, warn};

use super::{ContentGenerator, KeywordSuggester};
use crate::errors::{LandingDeskError, Result};
use crate::services::page_service::{CreatePageRequest, UpdatePageRequest};
use crate::storage::LandingPage;
use crate::utils;

/// Editable state of a page before it is submitted
///
/// Provider calls only write to the draft after they succeed, so a failed
/// generation never leaves a half-applied form behind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageDraft {
    pub title: String,
    pub content: String,
    pub keywords: Vec<String>,
    /// Empty when the page has no image
    pub image_url: String,
    pub customer_id: String,
    pub domain_id: String,
}

impl PageDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Editor state for an existing page
    pub fn from_page(page: &LandingPage) -> Self {
        Self {
            title: page.title.clone(),
            content: page.content.clone(),
            keywords: page.keywords.clone(),
            image_url: page.image_url.clone().unwrap_or_default(),
            customer_id: page.customer_id.clone(),
            domain_id: page.domain_id.clone(),
        }
    }

    /// Editor state pre-filled from a page about to be copied
    pub fn for_duplicate(page: &LandingPage) -> Self {
        let mut draft = Self::from_page(page);
        draft.title = format!("{} (Copy)", page.title);
        draft
    }

    /// Split the comma separated keyword field of the form
    pub fn parse_keywords(raw: &str) -> Vec<String> {
        utils::parse_keywords(raw)
    }

    /// Replace the draft content with generated output.
    pub async fn apply_generated(
        &mut self,
        generator: &dyn ContentGenerator,
        prompt: &str,
    ) -> Result<()> {
        if prompt.trim().is_empty() {
            return Err(LandingDeskError::validation("Prompt must not be empty"));
        }

        let generated = generator.generate(prompt).await.inspect_err(|e| {
            warn!("Content generation failed, draft left unchanged: {}", e);
        })?;

        self.title = generated.title;
        self.content = generated.content;
        self.keywords = generated.keywords;
        self.image_url = generated.image_url;
        info!("Applied generated content to draft '{}'", self.title);
        Ok(())
    }

    /// Append suggested keywords the draft does not already have.
    ///
    /// Suggestions are drawn from the title, or the content when the title
    /// is blank. Returns how many keywords were added.
    pub async fn merge_suggested_keywords(
        &mut self,
        suggester: &dyn KeywordSuggester,
    ) -> Result<usize> {
        let source = if self.title.trim().is_empty() {
            &self.content
        } else {
            &self.title
        };
        if source.trim().is_empty() {
            return Err(LandingDeskError::validation(
                "Enter a title or content to suggest keywords from",
            ));
        }

        let suggestions = suggester.suggest(source).await.inspect_err(|e| {
            warn!("Keyword suggestion failed, keywords left unchanged: {}", e);
        })?;

        let mut added = 0;
        for keyword in suggestions {
            if !self.keywords.contains(&keyword) {
                self.keywords.push(keyword);
                added += 1;
            }
        }
        Ok(added)
    }

    fn image(&self) -> Option<String> {
        Some(self.image_url.clone()).filter(|url| !url.is_empty())
    }

    pub fn into_create_request(self, author_id: &str, ai_generated: bool) -> CreatePageRequest {
        let image_url = self.image();
        CreatePageRequest {
            title: self.title,
            slug: None,
            content: self.content,
            keywords: self.keywords,
            image_url,
            author_id: author_id.to_string(),
            customer_id: self.customer_id,
            domain_id: self.domain_id,
            is_ai_generated: ai_generated,
        }
    }

    /// Full edit carrying every field of the draft
    pub fn into_update_request(self) -> UpdatePageRequest {
        UpdatePageRequest {
            title: Some(self.title),
            slug: None,
            content: Some(self.content),
            keywords: Some(self.keywords),
            image_url: Some(self.image_url),
            customer_id: Some(self.customer_id),
            domain_id: Some(self.domain_id),
            status: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::content::{GeneratedContent, TemplateContentGenerator};
    use async_trait::async_trait;

    struct FailingGenerator;

    #[async_trait]
    impl ContentGenerator for FailingGenerator {
        async fn generate(&self, _prompt: &str) -> Result<GeneratedContent> {
            Err(LandingDeskError::external_service("model unavailable"))
        }
    }

    struct FixedSuggester(Vec<&'static str>);

    #[async_trait]
    impl KeywordSuggester for FixedSuggester {
        async fn suggest(&self, _text: &str) -> Result<Vec<String>> {
            Ok(self.0.iter().map(|k| k.to_string()).collect())
        }
    }

    fn filled() -> PageDraft {
        PageDraft {
            title: "Existing".into(),
            content: "Existing content".into(),
            keywords: vec!["seo".into()],
            image_url: "https://example.com/a.jpg".into(),
            customer_id: "1".into(),
            domain_id: "example.com".into(),
        }
    }

    #[tokio::test]
    async fn test_failed_generation_leaves_draft_untouched() {
        let mut draft = filled();
        let err = draft
            .apply_generated(&FailingGenerator, "summer sale")
            .await
            .unwrap_err();
        assert!(matches!(err, LandingDeskError::ExternalService(_)));
        assert_eq!(draft, filled());
    }

    #[tokio::test]
    async fn test_blank_prompt_is_rejected() {
        let mut draft = filled();
        let err = draft
            .apply_generated(&TemplateContentGenerator::new(), "   ")
            .await
            .unwrap_err();
        assert!(matches!(err, LandingDeskError::Validation(_)));
        assert_eq!(draft, filled());
    }

    #[tokio::test]
    async fn test_generation_replaces_content_fields_only() {
        let mut draft = filled();
        draft
            .apply_generated(&TemplateContentGenerator::new(), "Cloud hosting deals")
            .await
            .expect("offline generation succeeds");
        assert!(draft.title.starts_with("AI Generated: "));
        assert_eq!(draft.keywords, vec!["Cloud", "hosting", "deals"]);
        assert_eq!(draft.customer_id, "1");
        assert_eq!(draft.domain_id, "example.com");
    }

    #[tokio::test]
    async fn test_merge_skips_existing_keywords() {
        let mut draft = filled();
        let added = draft
            .merge_suggested_keywords(&FixedSuggester(vec!["seo", "marketing"]))
            .await
            .expect("fixed suggester succeeds");
        assert_eq!(added, 1);
        assert_eq!(draft.keywords, vec!["seo", "marketing"]);
    }

    #[test]
    fn test_into_create_request_drops_empty_image() {
        let mut draft = filled();
        draft.image_url.clear();
        let req = draft.into_create_request("1", true);
        assert_eq!(req.image_url, None);
        assert!(req.is_ai_generated);
        assert_eq!(req.slug, None);
    }
}
