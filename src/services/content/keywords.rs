use async_trait::async_trait;
use tracing::debug;

use super::KeywordSuggester;
use crate::errors::Result;

struct Category {
    name: &'static str,
    triggers: &'static [&'static str],
    keywords: &'static [&'static str],
}

// Checked in order; the first category with a matching trigger wins.
const CATEGORIES: &[Category] = &[
    Category {
        name: "bathtub",
        triggers: &["bathtub", "bath", "bathroom"],
        keywords: &[
            "Bathtub Safety Features for Senior Citizens",
            "Best Bathtub Accessibility Options for Seniors",
            "Ideal Size and Design Bathtub Tips",
            "Water Temperature Control in Senior Bathtubs",
            "Easy Maintenance Bathtubs for Seniors",
        ],
    },
    Category {
        name: "health",
        triggers: &["health", "wellness", "fitness"],
        keywords: &[
            "Health Benefits of Regular Exercise",
            "Nutritional Tips for Better Health",
            "Mental Health Wellness Strategies",
            "Preventive Health Care Measures",
            "Health Supplements Guide",
        ],
    },
    Category {
        name: "finance",
        triggers: &["finance", "money", "investment"],
        keywords: &[
            "Personal Finance Management Tips",
            "Investment Strategies for Beginners",
            "Retirement Planning Essentials",
            "Tax Saving Strategies",
            "Debt Management Solutions",
        ],
    },
    Category {
        name: "technology",
        triggers: &["tech", "digital", "computer"],
        keywords: &[
            "Latest Technology Trends",
            "Digital Transformation Solutions",
            "Cloud Computing Benefits",
            "Cybersecurity Best Practices",
            "AI and Machine Learning Applications",
        ],
    },
    Category {
        name: "fashion",
        triggers: &["fashion", "style", "clothing"],
        keywords: &[
            "Seasonal Fashion Trends",
            "Sustainable Fashion Choices",
            "Fashion Accessories Guide",
            "Style Tips for Different Body Types",
            "Budget-Friendly Fashion Ideas",
        ],
    },
    Category {
        name: "home",
        triggers: &["home", "house", "interior"],
        keywords: &[
            "Home Improvement Ideas",
            "Interior Design Trends",
            "Sustainable Home Solutions",
            "Smart Home Technology Guide",
            "Home Organization Tips",
        ],
    },
];

const DEFAULT_KEYWORDS: &[&str] = &[
    "Essential Tips and Tricks",
    "Comprehensive Guide",
    "Best Practices",
    "Expert Recommendations",
    "Ultimate Resource",
];

/// Offline suggester backed by a fixed table of topic keywords
#[derive(Debug, Clone, Default)]
pub struct CategoryKeywordSuggester;

impl CategoryKeywordSuggester {
    pub fn new() -> Self {
        Self
    }

    fn table_for(text: &str) -> (&'static str, &'static [&'static str]) {
        let lower = text.to_lowercase();
        CATEGORIES
            .iter()
            .find(|c| c.triggers.iter().any(|t| lower.contains(t)))
            .map_or(("default", DEFAULT_KEYWORDS), |c| (c.name, c.keywords))
    }
}

#[async_trait]
impl KeywordSuggester for CategoryKeywordSuggester {
    async fn suggest(&self, text: &str) -> Result<Vec<String>> {
        let (category, keywords) = Self::table_for(text);
        debug!("CategoryKeywordSuggester: using '{}' keywords", category);
        Ok(keywords.iter().map(|k| k.to_string()).collect())
    }
}
