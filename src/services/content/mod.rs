//! Content providers and the editor draft they feed
//!
//! Generation and keyword suggestion are injected through traits so a
//! remote model can replace the offline defaults without touching callers.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::Result;

mod draft;
mod generator;
mod keywords;

pub use draft::PageDraft;
pub use generator::TemplateContentGenerator;
pub use keywords::CategoryKeywordSuggester;

/// Output of a content generation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedContent {
    pub title: String,
    pub content: String,
    pub keywords: Vec<String>,
    pub image_url: String,
}

#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Produce page content from a free-text prompt.
    /// Failures are reported as `ExternalService` errors.
    async fn generate(&self, prompt: &str) -> Result<GeneratedContent>;
}

#[async_trait]
pub trait KeywordSuggester: Send + Sync {
    async fn suggest(&self, text: &str) -> Result<Vec<String>>;
}
