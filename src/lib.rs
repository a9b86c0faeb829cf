//! landingdesk - back-office core for a partner landing-page dashboard
//!
//! Pages are created, edited and duplicated through a moderation workflow,
//! listed through a composable filter, and scored from stored analytics.
//!
//! # Features
//! - **cli**: Command-line front end (default)
//!
//! # Architecture
//! - `storage`: Data model, repositories (memory / JSON file) and demo data
//! - `services`: Page, workflow, query, analytics, directory and content services
//! - `config`: Configuration management
//! - `system`: Logging setup
//! - `interfaces`: User interfaces (CLI)

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod errors;
#[cfg(feature = "cli")]
pub mod interfaces;
pub mod services;
pub mod storage;
pub mod system;
pub mod utils;
