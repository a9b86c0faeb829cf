use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, IntoEnumIterator};

/// Moderation status of a landing page
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Default,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PageStatus {
    #[default]
    Draft,
    UnderReview,
    Approved,
    Rejected,
}

impl PageStatus {
    /// Human readable label, e.g. "under review"
    pub fn label(&self) -> String {
        self.as_ref().replace('_', " ")
    }
}

impl std::fmt::Display for PageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl std::str::FromStr for PageStatus {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        Self::iter()
            .find(|status| status.as_ref() == normalized)
            .ok_or_else(|| {
                format!(
                    "Invalid page status: '{}'. Valid: draft, under_review, approved, rejected",
                    s
                )
            })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingPage {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub content: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub status: PageStatus,
    pub author_id: String,
    pub customer_id: String,
    pub domain_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    #[serde(default)]
    pub is_ai_generated: bool,
    #[serde(default)]
    pub is_duplicated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_page_id: Option<String>,
}

impl LandingPage {
    /// Address the page is published under
    pub fn public_url(&self) -> String {
        format!("https://{}/{}", self.domain_id, self.slug)
    }

    pub fn is_approved(&self) -> bool {
        self.status == PageStatus::Approved
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partner {
    pub id: String,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub partner_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    pub id: String,
    pub name: String,
    pub customer_id: String,
}

/// Analytics grouping of page views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Dimension {
    Device,
    Browser,
    Country,
    State,
    City,
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl std::str::FromStr for Dimension {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::iter()
            .find(|d| d.as_ref().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "Invalid dimension: '{}'. Valid: device, browser, country, state, city",
                    s
                )
            })
    }
}

/// Label → count, in the order the labels were recorded
pub type DimensionCounts = IndexMap<String, u64>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageDimensions {
    #[serde(default)]
    pub device: DimensionCounts,
    #[serde(default)]
    pub browser: DimensionCounts,
    #[serde(default)]
    pub country: DimensionCounts,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<DimensionCounts>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<DimensionCounts>,
}

impl PageDimensions {
    pub fn get(&self, dimension: Dimension) -> Option<&DimensionCounts> {
        match dimension {
            Dimension::Device => Some(&self.device),
            Dimension::Browser => Some(&self.browser),
            Dimension::Country => Some(&self.country),
            Dimension::State => self.state.as_ref(),
            Dimension::City => self.city.as_ref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageAnalytics {
    pub page_id: String,
    #[serde(default)]
    pub page_views: u64,
    #[serde(default)]
    pub clicks: u64,
    #[serde(default)]
    pub ad_views: u64,
    #[serde(default)]
    pub conversions: u64,
    #[serde(default)]
    pub ctr: f64,
    #[serde(default)]
    pub conversion_value: f64,
    #[serde(default)]
    pub dimensions: PageDimensions,
}

impl PageAnalytics {
    /// All-zero metrics for a page that has no record yet
    pub fn empty(page_id: impl Into<String>) -> Self {
        Self {
            page_id: page_id.into(),
            page_views: 0,
            clicks: 0,
            ad_views: 0,
            conversions: 0,
            ctr: 0.0,
            conversion_value: 0.0,
            dimensions: PageDimensions::default(),
        }
    }
}

/// Status counts shown on the dashboard summary cards
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageStats {
    pub total: usize,
    pub draft: usize,
    pub under_review: usize,
    pub approved: usize,
    pub rejected: usize,
}

impl PageStats {
    pub fn tally<'a>(pages: impl IntoIterator<Item = &'a LandingPage>) -> Self {
        let mut stats = Self::default();
        for page in pages {
            stats.total += 1;
            match page.status {
                PageStatus::Draft => stats.draft += 1,
                PageStatus::UnderReview => stats.under_review += 1,
                PageStatus::Approved => stats.approved += 1,
                PageStatus::Rejected => stats.rejected += 1,
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse_and_display() {
        assert_eq!("under_review".parse::<PageStatus>(), Ok(PageStatus::UnderReview));
        assert_eq!("Under Review".parse::<PageStatus>(), Ok(PageStatus::UnderReview));
        assert_eq!("APPROVED".parse::<PageStatus>(), Ok(PageStatus::Approved));
        assert!("published".parse::<PageStatus>().is_err());
        assert_eq!(PageStatus::UnderReview.to_string(), "under_review");
        assert_eq!(PageStatus::UnderReview.label(), "under review");
    }

    #[test]
    fn test_page_json_uses_camel_case() {
        let json = r#"{
            "id": "7",
            "title": "Cloud",
            "slug": "cloud",
            "content": "body",
            "keywords": ["cloud"],
            "status": "under_review",
            "authorId": "1",
            "customerId": "7",
            "domainId": "technova.io",
            "createdAt": "2023-05-10T10:15:00Z",
            "updatedAt": "2023-05-10T10:15:00Z",
            "isAiGenerated": true,
            "isDuplicated": false
        }"#;
        let page: LandingPage = serde_json::from_str(json).expect("page parses");
        assert_eq!(page.status, PageStatus::UnderReview);
        assert!(page.is_ai_generated);
        assert_eq!(page.image_url, None);
        assert_eq!(page.public_url(), "https://technova.io/cloud");

        let out = serde_json::to_string(&page).expect("page serializes");
        assert!(out.contains("\"customerId\":\"7\""));
        assert!(!out.contains("rejectionReason"));
    }

    #[test]
    fn test_dimension_lookup_keeps_order() {
        let mut device = DimensionCounts::new();
        device.insert("Mobile".into(), 750);
        device.insert("Desktop".into(), 450);
        device.insert("Tablet".into(), 50);
        let dims = PageDimensions {
            device,
            ..Default::default()
        };

        let labels: Vec<&str> = dims
            .get(Dimension::Device)
            .expect("device present")
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(labels, vec!["Mobile", "Desktop", "Tablet"]);
        assert!(dims.get(Dimension::City).is_none());
    }

    #[test]
    fn test_stats_tally() {
        let analytics = PageAnalytics::empty("x");
        assert_eq!(analytics.page_views, 0);
        assert!(analytics.dimensions.device.is_empty());
        assert_eq!(PageStats::tally(std::iter::empty()), PageStats::default());
    }
}
