//! Storage backend tests
//!
//! Memory and JSON-file repositories, plus the storage factory.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use landingdesk::config::{StorageBackend, StorageConfig};
use landingdesk::errors::LandingDeskError;
use landingdesk::storage::{
    AnalyticsRepository, FileAnalyticsStore, FilePageStore, LandingPage, MemoryPageStore,
    PageAnalytics, PageRepository, PageStatus, StorageFactory,
};
use tempfile::TempDir;

fn page(id: &str) -> LandingPage {
    let at = Utc.with_ymd_and_hms(2023, 6, 1, 12, 0, 0).unwrap();
    LandingPage {
        id: id.into(),
        title: format!("Page {}", id),
        slug: format!("page-{}", id),
        content: "content".into(),
        keywords: vec!["one".into()],
        image_url: Some("https://example.com/a.jpg".into()),
        status: PageStatus::UnderReview,
        author_id: "1".into(),
        customer_id: "1".into(),
        domain_id: "domain4.com".into(),
        created_at: at,
        updated_at: at,
        rejection_reason: None,
        is_ai_generated: false,
        is_duplicated: false,
        original_page_id: None,
    }
}

// =============================================================================
// Memory backend
// =============================================================================

#[tokio::test]
async fn test_memory_insert_prepends() {
    let store = MemoryPageStore::with_pages(vec![page("old")]);
    store.insert(page("new")).await.expect("insert");
    let ids: Vec<String> = store.load_all().await.into_iter().map(|p| p.id).collect();
    assert_eq!(ids, vec!["new", "old"]);
    assert_eq!(store.backend_name(), "memory");
}

#[tokio::test]
async fn test_memory_rejects_duplicate_ids() {
    let store = MemoryPageStore::with_pages(vec![page("a")]);
    assert!(matches!(
        store.insert(page("a")).await,
        Err(LandingDeskError::StorageOperation(_))
    ));
    assert_eq!(store.load_all().await.len(), 1);
}

#[tokio::test]
async fn test_memory_replace_in_place() {
    let store = MemoryPageStore::with_pages(vec![page("a"), page("b"), page("c")]);
    let mut edited = page("b");
    edited.title = "Edited".into();
    store.replace(edited).await.expect("replace");

    let pages = store.load_all().await;
    assert_eq!(pages[1].id, "b");
    assert_eq!(pages[1].title, "Edited");

    assert!(matches!(
        store.replace(page("zz")).await,
        Err(LandingDeskError::NotFound(_))
    ));
}

// =============================================================================
// File backend
// =============================================================================

#[tokio::test]
async fn test_file_store_persists_across_reopen() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("data").join("pages.json");

    let store = FilePageStore::open(&path, vec![page("seed")]).expect("open");
    assert!(path.exists());
    store.insert(page("added")).await.expect("insert");
    let mut edited = page("seed");
    edited.status = PageStatus::Approved;
    store.replace(edited).await.expect("replace");
    assert_eq!(store.backend_name(), "file");

    // seed ignored once the file exists
    let reopened = FilePageStore::open(&path, vec![page("ignored")]).expect("reopen");
    let pages = reopened.load_all().await;
    let ids: Vec<&str> = pages.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["added", "seed"]);
    assert_eq!(pages[1].status, PageStatus::Approved);
    assert_eq!(pages[1], {
        let mut expected = page("seed");
        expected.status = PageStatus::Approved;
        expected
    });
}

#[tokio::test]
async fn test_factory_file_missing_files_get_demo_seed() {
    let dir = TempDir::new().expect("temp dir");
    let config = StorageConfig {
        backend: StorageBackend::File,
        pages_file: dir.path().join("p.json").to_string_lossy().into_owned(),
        analytics_file: dir.path().join("a.json").to_string_lossy().into_owned(),
        seed_demo_data: true,
    };
    let storage = StorageFactory::create(&config).expect("file storage");
    assert_eq!(storage.pages.load_all().await.len(), 12);
    assert_eq!(storage.analytics.load_all().await.len(), 12);

    let on_disk: Vec<serde_json::Value> =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join("p.json")).expect("read"))
            .expect("json array");
    assert_eq!(on_disk.len(), 12);
}

#[tokio::test]
async fn test_file_store_rejects_corrupt_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("pages.json");
    std::fs::write(&path, "{ not json").expect("write");

    assert!(matches!(
        FilePageStore::open(&path, vec![]),
        Err(LandingDeskError::Serialization(_))
    ));
}

#[tokio::test]
async fn test_file_analytics_upsert() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("analytics.json");

    let store = FileAnalyticsStore::open(&path, vec![PageAnalytics::empty("a")]).expect("open");
    let mut record = PageAnalytics::empty("a");
    record.page_views = 10;
    store.upsert(record).await.expect("upsert");
    store.upsert(PageAnalytics::empty("b")).await.expect("upsert");

    let reopened = FileAnalyticsStore::open(&path, vec![]).expect("reopen");
    assert_eq!(reopened.load_all().await.len(), 2);
    assert_eq!(reopened.get("a").await.map(|r| r.page_views), Some(10));
}

// =============================================================================
// Factory
// =============================================================================

#[tokio::test]
async fn test_factory_memory_with_demo_data() {
    let storage = StorageFactory::create(&StorageConfig::default()).expect("memory storage");
    assert_eq!(storage.pages.backend_name(), "memory");
    assert_eq!(storage.pages.load_all().await.len(), 12);
    assert_eq!(storage.analytics.load_all().await.len(), 12);
    assert_eq!(storage.directory.customers().len(), 8);
}

#[tokio::test]
async fn test_factory_file_without_seed() {
    let dir = TempDir::new().expect("temp dir");
    let config = StorageConfig {
        backend: StorageBackend::File,
        pages_file: dir.path().join("p.json").to_string_lossy().into_owned(),
        analytics_file: dir.path().join("a.json").to_string_lossy().into_owned(),
        seed_demo_data: false,
    };
    let storage = StorageFactory::create(&config).expect("file storage");
    assert_eq!(storage.pages.backend_name(), "file");
    assert!(storage.pages.load_all().await.is_empty());
    assert!(storage.directory.partners().is_empty());

    let pages: Arc<dyn PageRepository> = storage.pages;
    pages.insert(page("x")).await.expect("insert");
    assert!(dir.path().join("p.json").exists());
}
