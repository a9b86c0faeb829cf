use crate::storage::models::{Customer, Domain, Partner};

/// Read-only reference data: partners own customers, customers own domains
#[derive(Debug, Clone, Default)]
pub struct Directory {
    partners: Vec<Partner>,
    customers: Vec<Customer>,
    domains: Vec<Domain>,
}

impl Directory {
    pub fn new(partners: Vec<Partner>, customers: Vec<Customer>, domains: Vec<Domain>) -> Self {
        Self {
            partners,
            customers,
            domains,
        }
    }

    pub fn partners(&self) -> &[Partner] {
        &self.partners
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn domains(&self) -> &[Domain] {
        &self.domains
    }
}
