use async_trait::async_trait;
use indexmap::IndexMap;
use tokio::sync::RwLock;

use super::{AnalyticsRepository, PageRepository};
use crate::errors::{LandingDeskError, Result};
use crate::storage::models::{LandingPage, PageAnalytics};

#[derive(Default)]
pub struct MemoryPageStore {
    pages: RwLock<Vec<LandingPage>>,
}

impl MemoryPageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing collection, kept in the given order.
    pub fn with_pages(pages: Vec<LandingPage>) -> Self {
        Self {
            pages: RwLock::new(pages),
        }
    }
}

#[async_trait]
impl PageRepository for MemoryPageStore {
    async fn insert(&self, page: LandingPage) -> Result<()> {
        let mut pages = self.pages.write().await;
        if pages.iter().any(|p| p.id == page.id) {
            return Err(LandingDeskError::storage_operation(format!(
                "Page id '{}' already exists",
                page.id
            )));
        }
        pages.insert(0, page);
        Ok(())
    }

    async fn get(&self, id: &str) -> Option<LandingPage> {
        self.pages.read().await.iter().find(|p| p.id == id).cloned()
    }

    async fn replace(&self, page: LandingPage) -> Result<()> {
        let mut pages = self.pages.write().await;
        let slot = pages
            .iter_mut()
            .find(|p| p.id == page.id)
            .ok_or_else(|| LandingDeskError::not_found(format!("Page '{}' not found", page.id)))?;
        *slot = page;
        Ok(())
    }

    async fn load_all(&self) -> Vec<LandingPage> {
        self.pages.read().await.clone()
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[derive(Default)]
pub struct MemoryAnalyticsStore {
    records: RwLock<IndexMap<String, PageAnalytics>>,
}

impl MemoryAnalyticsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<PageAnalytics>) -> Self {
        let map = records
            .into_iter()
            .map(|r| (r.page_id.clone(), r))
            .collect();
        Self {
            records: RwLock::new(map),
        }
    }
}

#[async_trait]
impl AnalyticsRepository for MemoryAnalyticsStore {
    async fn get(&self, page_id: &str) -> Option<PageAnalytics> {
        self.records.read().await.get(page_id).cloned()
    }

    async fn load_all(&self) -> Vec<PageAnalytics> {
        self.records.read().await.values().cloned().collect()
    }

    async fn upsert(&self, record: PageAnalytics) -> Result<()> {
        self.records
            .write()
            .await
            .insert(record.page_id.clone(), record);
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
