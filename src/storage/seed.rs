//! Bundled demo dataset
//!
//! The same partners, customers, domains, pages and metrics the dashboard
//! ships with, so a fresh install has something to browse.

use serde::Deserialize;

use crate::errors::{LandingDeskError, Result};
use crate::storage::directory::Directory;
use crate::storage::models::{Customer, Domain, LandingPage, PageAnalytics, Partner};

const DEMO_JSON: &str = include_str!("../../data/demo.json");

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub partners: Vec<Partner>,
    #[serde(default)]
    pub customers: Vec<Customer>,
    #[serde(default)]
    pub domains: Vec<Domain>,
    #[serde(default)]
    pub pages: Vec<LandingPage>,
    #[serde(default)]
    pub analytics: Vec<PageAnalytics>,
}

impl Dataset {
    pub fn directory(&self) -> Directory {
        Directory::new(
            self.partners.clone(),
            self.customers.clone(),
            self.domains.clone(),
        )
    }
}

pub fn demo_dataset() -> Result<Dataset> {
    serde_json::from_str(DEMO_JSON)
        .map_err(|e| LandingDeskError::serialization(format!("Bundled demo data is invalid: {}", e)))
}
