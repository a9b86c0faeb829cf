//! Partner / customer / domain lookups

use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use crate::errors::{LandingDeskError, Result};
use crate::storage::{Customer, Directory, Domain, Partner};

/// Ids of every customer owned by `partner_id`
pub fn customer_ids_for_partner(directory: &Directory, partner_id: &str) -> HashSet<String> {
    directory
        .customers()
        .iter()
        .filter(|c| c.partner_id == partner_id)
        .map(|c| c.id.clone())
        .collect()
}

#[derive(Clone)]
pub struct DirectoryService {
    directory: Arc<Directory>,
}

impl DirectoryService {
    pub fn new(directory: Arc<Directory>) -> Self {
        Self { directory }
    }

    /// Customers of a partner, or all customers when no partner is given
    pub fn list_customers(&self, partner_id: Option<&str>) -> Vec<Customer> {
        let customers: Vec<Customer> = self
            .directory
            .customers()
            .iter()
            .filter(|c| partner_id.is_none_or(|p| c.partner_id == p))
            .cloned()
            .collect();
        debug!(
            "DirectoryService: {} customers for partner {:?}",
            customers.len(),
            partner_id
        );
        customers
    }

    pub fn list_domains(&self, customer_id: &str) -> Vec<Domain> {
        self.directory
            .domains()
            .iter()
            .filter(|d| d.customer_id == customer_id)
            .cloned()
            .collect()
    }

    pub fn get_partner(&self, id: &str) -> Result<Partner> {
        self.directory
            .partners()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| LandingDeskError::not_found(format!("Partner '{}' not found", id)))
    }

    pub fn get_customer(&self, id: &str) -> Result<Customer> {
        self.directory
            .customers()
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| LandingDeskError::not_found(format!("Customer '{}' not found", id)))
    }

    pub fn get_domain(&self, id: &str) -> Result<Domain> {
        self.directory
            .domains()
            .iter()
            .find(|d| d.id == id)
            .cloned()
            .ok_or_else(|| LandingDeskError::not_found(format!("Domain '{}' not found", id)))
    }

    pub fn customer_ids_for_partner(&self, partner_id: &str) -> HashSet<String> {
        customer_ids_for_partner(&self.directory, partner_id)
    }
}
