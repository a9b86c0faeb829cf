use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use indexmap::IndexMap;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;
use tracing::{error, info};

use super::{AnalyticsRepository, PageRepository};
use crate::errors::{LandingDeskError, Result};
use crate::storage::models::{LandingPage, PageAnalytics};

/// Read a JSON array from `path`; a missing file is created holding `initial`.
fn load_or_create<T>(path: &Path, initial: Vec<T>) -> Result<Vec<T>>
where
    T: Serialize + DeserializeOwned,
{
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str::<Vec<T>>(&content).map_err(|e| {
            error!("Failed to parse {}: {}", path.display(), e);
            LandingDeskError::serialization(format!("Failed to parse {}: {}", path.display(), e))
        }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            info!(
                "{} does not exist, creating it with {} records",
                path.display(),
                initial.len()
            );
            write_json(path, &initial)?;
            Ok(initial)
        }
        Err(e) => Err(LandingDeskError::file_operation(format!(
            "Failed to read {}: {}",
            path.display(),
            e
        ))),
    }
}

fn write_json<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json).map_err(|e| {
        LandingDeskError::file_operation(format!("Failed to write {}: {}", path.display(), e))
    })
}

/// Landing pages kept in a JSON array on disk
pub struct FilePageStore {
    path: PathBuf,
    pages: RwLock<Vec<LandingPage>>,
}

impl FilePageStore {
    /// Open `path`, creating it from `seed` when it does not exist yet.
    pub fn open(path: impl Into<PathBuf>, seed: Vec<LandingPage>) -> Result<Self> {
        let path = path.into();
        let pages = load_or_create(&path, seed)?;
        info!(
            "FilePageStore initialised from {}, {} pages loaded",
            path.display(),
            pages.len()
        );
        Ok(Self {
            path,
            pages: RwLock::new(pages),
        })
    }
}

#[async_trait]
impl PageRepository for FilePageStore {
    async fn insert(&self, page: LandingPage) -> Result<()> {
        let mut pages = self.pages.write().await;
        if pages.iter().any(|p| p.id == page.id) {
            return Err(LandingDeskError::storage_operation(format!(
                "Page id '{}' already exists",
                page.id
            )));
        }
        pages.insert(0, page);
        if let Err(e) = write_json(&self.path, &pages) {
            pages.remove(0);
            return Err(e);
        }
        Ok(())
    }

    async fn get(&self, id: &str) -> Option<LandingPage> {
        self.pages.read().await.iter().find(|p| p.id == id).cloned()
    }

    async fn replace(&self, page: LandingPage) -> Result<()> {
        let mut pages = self.pages.write().await;
        let index = pages
            .iter()
            .position(|p| p.id == page.id)
            .ok_or_else(|| LandingDeskError::not_found(format!("Page '{}' not found", page.id)))?;
        let previous = std::mem::replace(&mut pages[index], page);
        if let Err(e) = write_json(&self.path, &pages) {
            pages[index] = previous;
            return Err(e);
        }
        Ok(())
    }

    async fn load_all(&self) -> Vec<LandingPage> {
        self.pages.read().await.clone()
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }
}

/// Analytics records kept in a JSON array on disk
pub struct FileAnalyticsStore {
    path: PathBuf,
    records: RwLock<IndexMap<String, PageAnalytics>>,
}

impl FileAnalyticsStore {
    pub fn open(path: impl Into<PathBuf>, seed: Vec<PageAnalytics>) -> Result<Self> {
        let path = path.into();
        let records: IndexMap<String, PageAnalytics> = load_or_create(&path, seed)?
            .into_iter()
            .map(|r| (r.page_id.clone(), r))
            .collect();
        info!(
            "FileAnalyticsStore initialised from {}, {} records loaded",
            path.display(),
            records.len()
        );
        Ok(Self {
            path,
            records: RwLock::new(records),
        })
    }
}

#[async_trait]
impl AnalyticsRepository for FileAnalyticsStore {
    async fn get(&self, page_id: &str) -> Option<PageAnalytics> {
        self.records.read().await.get(page_id).cloned()
    }

    async fn load_all(&self) -> Vec<PageAnalytics> {
        self.records.read().await.values().cloned().collect()
    }

    async fn upsert(&self, record: PageAnalytics) -> Result<()> {
        let mut records = self.records.write().await;
        let page_id = record.page_id.clone();
        let previous = records.insert(page_id.clone(), record);
        let snapshot: Vec<&PageAnalytics> = records.values().collect();
        if let Err(e) = write_json(&self.path, &snapshot) {
            match previous {
                Some(old) => {
                    records.insert(page_id, old);
                }
                None => {
                    records.shift_remove(&page_id);
                }
            }
            return Err(e);
        }
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }
}
