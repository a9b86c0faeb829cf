//! Page filtering and ordering
//!
//! Pure functions over the full collection. Filters compose: customer and
//! domain narrow first, then the search term, then a stable recency sort.

use std::collections::HashSet;

use crate::storage::LandingPage;
use crate::utils::contains_folded;

/// Filters accepted by page listings. Empty strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageQuery {
    pub search_term: Option<String>,
    pub partner_id: Option<String>,
    pub customer_id: Option<String>,
    pub domain_id: Option<String>,
}

impl PageQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search_term = Some(term.into());
        self
    }

    pub fn partner(mut self, partner_id: impl Into<String>) -> Self {
        self.partner_id = Some(partner_id.into());
        self
    }

    pub fn customer(mut self, customer_id: impl Into<String>) -> Self {
        self.customer_id = Some(customer_id.into());
        self
    }

    pub fn domain(mut self, domain_id: impl Into<String>) -> Self {
        self.domain_id = Some(domain_id.into());
        self
    }

    pub fn partner_filter(&self) -> Option<&str> {
        non_empty(&self.partner_id)
    }

    fn customer_filter(&self) -> Option<&str> {
        non_empty(&self.customer_id)
    }

    fn domain_filter(&self) -> Option<&str> {
        non_empty(&self.domain_id)
    }

    fn search_filter(&self) -> Option<&str> {
        non_empty(&self.search_term)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// True when title, content or any keyword contains `term_lower`.
pub fn matches_search(page: &LandingPage, term_lower: &str) -> bool {
    contains_folded(&page.title, term_lower)
        || contains_folded(&page.content, term_lower)
        || page.keywords.iter().any(|k| contains_folded(k, term_lower))
}

/// Apply `query` to `pages` (given in collection order).
///
/// `customer_scope`, when present, keeps only pages owned by one of those
/// customers; it is how partner scoping is enforced when enabled.
pub fn filter_pages(
    pages: Vec<LandingPage>,
    query: &PageQuery,
    customer_scope: Option<&HashSet<String>>,
) -> Vec<LandingPage> {
    let customer = query.customer_filter();
    let domain = query.domain_filter();
    let term = query.search_filter().map(str::to_lowercase);

    let mut filtered: Vec<LandingPage> = pages
        .into_iter()
        .filter(|p| customer_scope.is_none_or(|scope| scope.contains(&p.customer_id)))
        .filter(|p| customer.is_none_or(|c| p.customer_id == c))
        .filter(|p| domain.is_none_or(|d| p.domain_id == d))
        .filter(|p| term.as_deref().is_none_or(|t| matches_search(p, t)))
        .collect();

    sort_by_recency(&mut filtered);
    filtered
}

/// Most recently updated first; equal timestamps keep their relative order.
pub fn sort_by_recency(pages: &mut [LandingPage]) {
    pages.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
}
