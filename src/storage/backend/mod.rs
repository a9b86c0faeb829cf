//! Repository backends
//!
//! Services only talk to the [`PageRepository`] and [`AnalyticsRepository`]
//! traits, so a database-backed implementation can replace the bundled
//! memory and JSON-file stores without touching workflow or query code.

mod file;
mod memory;

use async_trait::async_trait;

use crate::errors::Result;
use crate::storage::models::{LandingPage, PageAnalytics};

pub use file::{FileAnalyticsStore, FilePageStore};
pub use memory::{MemoryAnalyticsStore, MemoryPageStore};

/// Ordered landing-page collection, most recently created first
#[async_trait]
pub trait PageRepository: Send + Sync {
    /// Prepend a new page. Fails when the id is already taken.
    async fn insert(&self, page: LandingPage) -> Result<()>;
    async fn get(&self, id: &str) -> Option<LandingPage>;
    /// Replace the stored page with the same id, keeping its position.
    async fn replace(&self, page: LandingPage) -> Result<()>;
    /// Every page in collection order.
    async fn load_all(&self) -> Vec<LandingPage>;
    fn backend_name(&self) -> &'static str;
}

/// Per-page metrics keyed by page id
#[async_trait]
pub trait AnalyticsRepository: Send + Sync {
    async fn get(&self, page_id: &str) -> Option<PageAnalytics>;
    /// Every record in insertion order.
    async fn load_all(&self) -> Vec<PageAnalytics>;
    async fn upsert(&self, record: PageAnalytics) -> Result<()>;
    fn backend_name(&self) -> &'static str;
}
