//! Moderation workflow policy
//!
//! Status is never set directly by callers. It is assigned here, at
//! creation, edit and duplication time, and every mutating path in
//! [`PageService`](super::PageService) goes through these functions.

use chrono::{DateTime, Utc};

use crate::config::WorkflowConfig;
use crate::storage::{LandingPage, PageStatus};

use super::page_service::UpdatePageRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkflowOptions {
    /// Minimum number of characters in page content
    pub min_content_length: usize,
    pub clear_rejection_on_edit: bool,
    pub enforce_partner_scope: bool,
}

impl Default for WorkflowOptions {
    fn default() -> Self {
        Self::from(&WorkflowConfig::default())
    }
}

impl From<&WorkflowConfig> for WorkflowOptions {
    fn from(config: &WorkflowConfig) -> Self {
        Self {
            min_content_length: config.min_content_length,
            clear_rejection_on_edit: config.clear_rejection_on_edit,
            enforce_partner_scope: config.enforce_partner_scope,
        }
    }
}

/// Status of a freshly created page, AI-generated or not
pub fn initial_status() -> PageStatus {
    PageStatus::UnderReview
}

/// An approved source keeps its approval on copy; anything else goes to review.
pub fn duplicate_status(source: &LandingPage) -> PageStatus {
    if source.status == PageStatus::Approved {
        PageStatus::Approved
    } else {
        PageStatus::UnderReview
    }
}

/// Timestamp for a mutation, never earlier than the record's creation.
pub fn touch(created_at: DateTime<Utc>, now: DateTime<Utc>) -> DateTime<Utc> {
    now.max(created_at)
}

/// Merge an edit over an existing page and send it back to review.
///
/// Any status carried by `update` is ignored. Identity, creation time and
/// duplication lineage are kept from `existing`.
pub fn apply_edit_policy(
    existing: &LandingPage,
    update: UpdatePageRequest,
    now: DateTime<Utc>,
    options: &WorkflowOptions,
) -> LandingPage {
    let mut page = existing.clone();

    if let Some(title) = update.title {
        page.title = title;
    }
    if let Some(slug) = update.slug {
        page.slug = slug;
    }
    if let Some(content) = update.content {
        page.content = content;
    }
    if let Some(keywords) = update.keywords {
        page.keywords = keywords;
    }
    // Some("") removes the image, None keeps it
    if let Some(image_url) = update.image_url {
        page.image_url = if image_url.is_empty() {
            None
        } else {
            Some(image_url)
        };
    }
    if let Some(customer_id) = update.customer_id {
        page.customer_id = customer_id;
    }
    if let Some(domain_id) = update.domain_id {
        page.domain_id = domain_id;
    }

    page.status = PageStatus::UnderReview;
    if options.clear_rejection_on_edit {
        page.rejection_reason = None;
    }
    page.updated_at = touch(existing.created_at, now);
    page
}

/// Reason to show an editor opening a rejected page
pub fn rejection_notice(page: &LandingPage) -> Option<&str> {
    match page.status {
        PageStatus::Rejected => page.rejection_reason.as_deref(),
        _ => None,
    }
}
