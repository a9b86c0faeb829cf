//! Analytics service layer
//!
//! Read-side aggregation over stored per-page metrics: zero-filled lookups,
//! dimension breakdowns with percentages, and the top performing page.

use std::collections::HashSet;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use crate::errors::Result;
use crate::storage::{AnalyticsRepository, Dimension, LandingPage, PageAnalytics, PageRepository};

// ============ 公共类型定义 ============

/// One label of a dimension breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryStats {
    pub label: String,
    pub count: u64,
    /// Share of the page's views, rounded to a whole percent
    pub percentage: u64,
}

/// Whole-number share of `count` in `total`, 0 when `total` is 0
pub fn percentage_of(count: u64, total: u64) -> u64 {
    if total == 0 {
        return 0;
    }
    ((count as f64 / total as f64) * 100.0).round() as u64
}

// ============ AnalyticsService ============

pub struct AnalyticsService {
    pages: Arc<dyn PageRepository>,
    analytics: Arc<dyn AnalyticsRepository>,
}

impl AnalyticsService {
    pub fn new(pages: Arc<dyn PageRepository>, analytics: Arc<dyn AnalyticsRepository>) -> Self {
        Self { pages, analytics }
    }

    /// Stored metrics for a page, or an all-zero record
    pub async fn metrics_for(&self, page_id: &str) -> PageAnalytics {
        match self.analytics.get(page_id).await {
            Some(record) => record,
            None => {
                debug!("Analytics: no record for {}, returning zeros", page_id);
                PageAnalytics::empty(page_id)
            }
        }
    }

    /// Per-label counts of one dimension, in recorded order
    pub async fn dimension_breakdown(
        &self,
        page_id: &str,
        dimension: Dimension,
    ) -> Vec<CategoryStats> {
        let metrics = self.metrics_for(page_id).await;
        let Some(counts) = metrics.dimensions.get(dimension) else {
            return Vec::new();
        };

        counts
            .iter()
            .map(|(label, &count)| CategoryStats {
                label: label.clone(),
                count,
                percentage: percentage_of(count, metrics.page_views),
            })
            .collect()
    }

    /// Id of the approved page with the greatest conversion value.
    ///
    /// Metrics records are scanned in stored order and the first one wins a
    /// tie. A page needs a positive value to qualify.
    pub async fn top_performer(&self) -> Option<String> {
        let approved: HashSet<String> = self
            .pages
            .load_all()
            .await
            .into_iter()
            .filter(|p| p.is_approved())
            .map(|p| p.id)
            .collect();
        let mut best: Option<(String, f64)> = None;

        for record in self.analytics.load_all().await {
            if !approved.contains(&record.page_id) {
                continue;
            }
            let highest = best.as_ref().map_or(0.0, |(_, value)| *value);
            if record.conversion_value > highest {
                best = Some((record.page_id, record.conversion_value));
            }
        }

        debug!("Analytics: top performer {:?}", best);
        best.map(|(id, _)| id)
    }

    /// Metrics for each page of a listing, in the listing's order
    pub async fn metrics_for_pages(
        &self,
        pages: &[LandingPage],
    ) -> Vec<(LandingPage, PageAnalytics)> {
        let mut rows = Vec::with_capacity(pages.len());
        for page in pages {
            let metrics = self.metrics_for(&page.id).await;
            rows.push((page.clone(), metrics));
        }
        rows
    }

    /// Store or replace the metrics record of a page
    pub async fn record(&self, analytics: PageAnalytics) -> Result<()> {
        let page_id = analytics.page_id.clone();
        self.analytics.upsert(analytics).await?;
        info!("Analytics: recorded metrics for {}", page_id);
        Ok(())
    }
}
