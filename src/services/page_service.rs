//! Landing page management service
//!
//! Owns validation and id/slug assignment; status and timestamps come from
//! the workflow policy in [`super::workflow`].

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::errors::{LandingDeskError, Result};
use crate::storage::{Directory, LandingPage, PageRepository, PageStats, PageStatus};
use crate::utils::{generate_page_id, slugify};

use super::directory_service::customer_ids_for_partner;
use super::query::{PageQuery, filter_pages};
use super::workflow::{self, WorkflowOptions};

// ============ Request DTOs ============

/// Request to create a new landing page
#[derive(Debug, Clone)]
pub struct CreatePageRequest {
    pub title: String,
    /// Derived from the title when absent or blank
    pub slug: Option<String>,
    pub content: String,
    pub keywords: Vec<String>,
    pub image_url: Option<String>,
    pub author_id: String,
    pub customer_id: String,
    pub domain_id: String,
    pub is_ai_generated: bool,
}

/// Partial edit of an existing page. `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct UpdatePageRequest {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub content: Option<String>,
    pub keywords: Option<Vec<String>>,
    /// `Some("")` removes the image
    pub image_url: Option<String>,
    pub customer_id: Option<String>,
    pub domain_id: Option<String>,
    /// Accepted for payload compatibility, always overridden by the workflow
    pub status: Option<PageStatus>,
}

// ============ PageService Implementation ============

pub struct PageService {
    pages: Arc<dyn PageRepository>,
    directory: Arc<Directory>,
    options: WorkflowOptions,
}

impl PageService {
    pub fn new(
        pages: Arc<dyn PageRepository>,
        directory: Arc<Directory>,
        options: WorkflowOptions,
    ) -> Self {
        Self {
            pages,
            directory,
            options,
        }
    }

    pub fn options(&self) -> &WorkflowOptions {
        &self.options
    }

    fn require(field: &str, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(LandingDeskError::validation(format!("{} is required", field)));
        }
        Ok(())
    }

    fn check_content(&self, content: &str) -> Result<()> {
        let length = content.chars().count();
        if length < self.options.min_content_length {
            return Err(LandingDeskError::validation(format!(
                "Content must be at least {} characters (got {})",
                self.options.min_content_length, length
            )));
        }
        Ok(())
    }

    fn validate_create(&self, req: &CreatePageRequest) -> Result<()> {
        Self::require("Title", &req.title)?;
        Self::require("Customer", &req.customer_id)?;
        Self::require("Domain", &req.domain_id)?;
        self.check_content(&req.content)
    }

    fn validate_update(&self, req: &UpdatePageRequest) -> Result<()> {
        if let Some(title) = &req.title {
            Self::require("Title", title)?;
        }
        if let Some(customer_id) = &req.customer_id {
            Self::require("Customer", customer_id)?;
        }
        if let Some(domain_id) = &req.domain_id {
            Self::require("Domain", domain_id)?;
        }
        if let Some(content) = &req.content {
            self.check_content(content)?;
        }
        Ok(())
    }

    /// Create a page and place it at the front of the collection
    pub async fn create_page(&self, req: CreatePageRequest) -> Result<LandingPage> {
        self.validate_create(&req)?;

        let slug = match req.slug {
            Some(slug) if !slug.trim().is_empty() => slug,
            _ => slugify(&req.title),
        };
        let now = Utc::now();
        let page = LandingPage {
            id: generate_page_id(),
            title: req.title,
            slug,
            content: req.content,
            keywords: req.keywords,
            image_url: req.image_url.filter(|url| !url.is_empty()),
            status: workflow::initial_status(),
            author_id: req.author_id,
            customer_id: req.customer_id,
            domain_id: req.domain_id,
            created_at: now,
            updated_at: now,
            rejection_reason: None,
            is_ai_generated: req.is_ai_generated,
            is_duplicated: false,
            original_page_id: None,
        };

        self.pages.insert(page.clone()).await?;
        info!(
            "PageService: created page '{}' ({}) for customer {}",
            page.title, page.id, page.customer_id
        );
        Ok(page)
    }

    pub async fn get_page(&self, id: &str) -> Result<LandingPage> {
        self.pages
            .get(id)
            .await
            .ok_or_else(|| LandingDeskError::not_found(format!("Page '{}' not found", id)))
    }

    /// Apply an edit; the page always goes back to review
    pub async fn update_page(&self, id: &str, req: UpdatePageRequest) -> Result<LandingPage> {
        let existing = self.get_page(id).await?;
        self.validate_update(&req)?;

        if req.status.is_some() {
            debug!("PageService: ignoring status in update payload for {}", id);
        }
        let updated = workflow::apply_edit_policy(&existing, req, Utc::now(), &self.options);
        self.pages.replace(updated.clone()).await?;

        info!(
            "PageService: updated page {} ({} -> {})",
            id, existing.status, updated.status
        );
        Ok(updated)
    }

    /// Copy a page into another customer/domain
    pub async fn duplicate_page(
        &self,
        source_id: &str,
        customer_id: &str,
        domain_id: &str,
    ) -> Result<LandingPage> {
        Self::require("Customer", customer_id)?;
        Self::require("Domain", domain_id)?;
        let source = self.get_page(source_id).await?;

        let now = Utc::now();
        let copy = LandingPage {
            id: generate_page_id(),
            title: format!("{} (Copy)", source.title),
            slug: format!("{}-copy", source.slug),
            customer_id: customer_id.to_string(),
            domain_id: domain_id.to_string(),
            status: workflow::duplicate_status(&source),
            created_at: now,
            updated_at: now,
            rejection_reason: None,
            is_duplicated: true,
            original_page_id: Some(source.id.clone()),
            ..source.clone()
        };

        self.pages.insert(copy.clone()).await?;
        info!(
            "PageService: duplicated page {} as {} ({})",
            source.id, copy.id, copy.status
        );
        Ok(copy)
    }

    /// Filtered listing, most recently updated first
    pub async fn list_pages(&self, query: &PageQuery) -> Result<Vec<LandingPage>> {
        let all = self.pages.load_all().await;
        let total = all.len();

        let scope = match query.partner_filter() {
            Some(partner_id) if self.options.enforce_partner_scope => {
                let ids = customer_ids_for_partner(&self.directory, partner_id);
                if ids.is_empty() {
                    warn!("PageService: partner {} has no customers", partner_id);
                }
                Some(ids)
            }
            _ => None,
        };

        let pages = filter_pages(all, query, scope.as_ref());
        debug!(
            "PageService: {} of {} pages match {:?}",
            pages.len(),
            total,
            query
        );
        Ok(pages)
    }

    /// Status counts over the filtered listing
    pub async fn page_stats(&self, query: &PageQuery) -> Result<PageStats> {
        let pages = self.list_pages(query).await?;
        Ok(PageStats::tally(&pages))
    }
}
