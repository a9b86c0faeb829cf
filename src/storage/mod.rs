use std::sync::Arc;

use tracing::info;

use crate::config::{StorageBackend, StorageConfig};
use crate::errors::Result;

pub mod backend;
pub mod directory;
pub mod models;
pub mod seed;

pub use backend::{
    AnalyticsRepository, FileAnalyticsStore, FilePageStore, MemoryAnalyticsStore,
    MemoryPageStore, PageRepository,
};
pub use directory::Directory;
pub use models::{
    Customer, Dimension, DimensionCounts, Domain, LandingPage, PageAnalytics, PageDimensions,
    PageStats, PageStatus, Partner,
};
pub use seed::{Dataset, demo_dataset};

/// Repositories and reference data wired up for one process
#[derive(Clone)]
pub struct Storage {
    pub pages: Arc<dyn PageRepository>,
    pub analytics: Arc<dyn AnalyticsRepository>,
    pub directory: Arc<Directory>,
}

pub struct StorageFactory;

impl StorageFactory {
    pub fn create(config: &StorageConfig) -> Result<Storage> {
        let dataset = if config.seed_demo_data {
            demo_dataset()?
        } else {
            Dataset::default()
        };
        let directory = Arc::new(dataset.directory());

        let storage = match config.backend {
            StorageBackend::Memory => Storage {
                pages: Arc::new(MemoryPageStore::with_pages(dataset.pages)),
                analytics: Arc::new(MemoryAnalyticsStore::with_records(dataset.analytics)),
                directory,
            },
            StorageBackend::File => Storage {
                pages: Arc::new(FilePageStore::open(&config.pages_file, dataset.pages)?),
                analytics: Arc::new(FileAnalyticsStore::open(
                    &config.analytics_file,
                    dataset.analytics,
                )?),
                directory,
            },
        };

        info!(
            "Using storage backend: {} (demo data: {})",
            storage.pages.backend_name(),
            config.seed_demo_data
        );
        Ok(storage)
    }
}
