//! AnalyticsService tests
//!
//! Metrics lookup, dimension breakdowns and the top performer.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use landingdesk::services::{AnalyticsService, CategoryStats};
use landingdesk::storage::{
    Dimension, DimensionCounts, LandingPage, MemoryAnalyticsStore, MemoryPageStore,
    PageAnalytics, PageStatus, demo_dataset,
};

fn page(id: &str, status: PageStatus) -> LandingPage {
    let at = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
    LandingPage {
        id: id.into(),
        title: format!("Page {}", id),
        slug: format!("page-{}", id),
        content: "content".into(),
        keywords: vec![],
        image_url: None,
        status,
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

fn metrics(page_id: &str, conversion_value: f64) -> PageAnalytics {
    PageAnalytics {
        conversion_value,
        ..PageAnalytics::empty(page_id)
    }
}

fn service(pages: Vec<LandingPage>, records: Vec<PageAnalytics>) -> AnalyticsService {
    AnalyticsService::new(
        Arc::new(MemoryPageStore::with_pages(pages)),
        Arc::new(MemoryAnalyticsStore::with_records(records)),
    )
}

fn demo_service() -> AnalyticsService {
    let dataset = demo_dataset().expect("demo dataset parses");
    service(dataset.pages, dataset.analytics)
}

#[tokio::test]
async fn test_missing_record_yields_zero_metrics() {
    let service = service(vec![page("1", PageStatus::Approved)], vec![]);
    let metrics = service.metrics_for("1").await;
    assert_eq!(metrics, PageAnalytics::empty("1"));
    assert!(metrics.dimensions.device.is_empty());
    assert!(metrics.dimensions.browser.is_empty());
    assert!(metrics.dimensions.country.is_empty());

    // unknown page ids never fail either
    assert_eq!(service.metrics_for("ghost").await.page_views, 0);
}

#[tokio::test]
async fn test_device_breakdown_percentages() {
    let service = demo_service();
    let breakdown = service.dimension_breakdown("1", Dimension::Device).await;
    assert_eq!(
        breakdown,
        vec![
            CategoryStats {
                label: "Mobile".into(),
                count: 750,
                percentage: 60,
            },
            CategoryStats {
                label: "Desktop".into(),
                count: 450,
                percentage: 36,
            },
            CategoryStats {
                label: "Tablet".into(),
                count: 50,
                percentage: 4,
            },
        ]
    );
}

#[tokio::test]
async fn test_breakdown_with_zero_views() {
    let service = demo_service();
    let breakdown = service.dimension_breakdown("11", Dimension::Device).await;
    assert_eq!(breakdown.len(), 3);
    assert!(breakdown.iter().all(|e| e.percentage == 0));
}

#[tokio::test]
async fn test_absent_optional_dimension_is_empty() {
    let service = demo_service();
    assert!(service.dimension_breakdown("1", Dimension::City).await.is_empty());
    assert!(service.dimension_breakdown("missing", Dimension::Device).await.is_empty());
}

#[tokio::test]
async fn test_top_performer_ignores_unapproved_pages() {
    let service = service(
        vec![
            page("a", PageStatus::Approved),
            page("b", PageStatus::Approved),
            page("c", PageStatus::Approved),
            page("d", PageStatus::Rejected),
        ],
        vec![
            metrics("a", 100.0),
            metrics("b", 500.0),
            metrics("c", 250.0),
            metrics("d", 900.0),
        ],
    );
    assert_eq!(service.top_performer().await.as_deref(), Some("b"));
}

#[tokio::test]
async fn test_top_performer_first_recorded_wins_ties() {
    let service = service(
        vec![
            page("first", PageStatus::Approved),
            page("second", PageStatus::Approved),
        ],
        vec![metrics("second", 300.0), metrics("first", 300.0)],
    );
    assert_eq!(service.top_performer().await.as_deref(), Some("second"));
}

#[tokio::test]
async fn test_top_performer_skips_records_of_unknown_pages() {
    let service = service(
        vec![page("a", PageStatus::Approved)],
        vec![metrics("ghost", 900.0), metrics("a", 50.0)],
    );
    assert_eq!(service.top_performer().await.as_deref(), Some("a"));
}

#[tokio::test]
async fn test_top_performer_none_when_nothing_qualifies() {
    let only_review = service(
        vec![page("a", PageStatus::UnderReview)],
        vec![metrics("a", 1000.0)],
    );
    assert_eq!(only_review.top_performer().await, None);

    let no_metrics = service(vec![page("a", PageStatus::Approved)], vec![]);
    assert_eq!(no_metrics.top_performer().await, None);

    let zero_value = service(vec![page("a", PageStatus::Approved)], vec![metrics("a", 0.0)]);
    assert_eq!(zero_value.top_performer().await, None);
}

#[tokio::test]
async fn test_demo_top_performer() {
    assert_eq!(demo_service().top_performer().await.as_deref(), Some("9"));
}

#[tokio::test]
async fn test_metrics_for_pages_keeps_order() {
    let service = service(
        vec![page("a", PageStatus::Approved), page("b", PageStatus::Draft)],
        vec![metrics("b", 42.0)],
    );
    let pages = vec![page("b", PageStatus::Draft), page("a", PageStatus::Approved)];
    let rows = service.metrics_for_pages(&pages).await;
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].0.id, "b");
    assert_eq!(rows[0].1.conversion_value, 42.0);
    assert_eq!(rows[1].1, PageAnalytics::empty("a"));
}

#[tokio::test]
async fn test_record_replaces_metrics() {
    let service = service(vec![page("a", PageStatus::Approved)], vec![]);

    let mut device = DimensionCounts::new();
    device.insert("Mobile".into(), 3);
    device.insert("Desktop".into(), 1);
    let mut record = PageAnalytics::empty("a");
    record.page_views = 4;
    record.conversion_value = 10.0;
    record.dimensions.device = device;

    service.record(record).await.expect("memory upsert succeeds");
    assert_eq!(service.metrics_for("a").await.page_views, 4);
    assert_eq!(service.top_performer().await.as_deref(), Some("a"));

    let breakdown = service.dimension_breakdown("a", Dimension::Device).await;
    assert_eq!(breakdown[0].percentage, 75);
    assert_eq!(breakdown[1].percentage, 25);
}
