//! Service layer for business logic
//!
//! Shared by the CLI and by library users; every write goes through
//! [`PageService`] so the workflow policy is applied in one place.

mod analytics_service;
pub mod content;
mod directory_service;
mod page_service;
pub mod query;
pub mod workflow;

pub use analytics_service::*;
pub use content::{
    CategoryKeywordSuggester, ContentGenerator, GeneratedContent, KeywordSuggester, PageDraft,
    TemplateContentGenerator,
};
pub use directory_service::*;
pub use page_service::*;
pub use query::{PageQuery, filter_pages};
pub use workflow::WorkflowOptions;
