//! CLI command implementations
//!
//! This module re-exports all CLI command functions.

mod analytics;
mod config_gen;
mod content;
mod directory;
mod pages;

pub use analytics::*;
pub use config_gen::*;
pub use content::*;
pub use directory::*;
pub use pages::*;
