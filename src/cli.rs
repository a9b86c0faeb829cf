//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure for landingdesk using clap's derive macros.

use clap::{Parser, Subcommand};

/// landingdesk - manage landing pages, their review status and analytics
#[derive(Parser)]
#[command(name = "landingdesk")]
#[command(version)]
#[command(about = "Manage landing pages, their review workflow and analytics", long_about = None)]
pub struct Cli {
    /// Configuration file (default: landingdesk.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// List landing pages, most recently updated first
    List {
        /// Match title, content or keywords (case-insensitive)
        #[arg(long, short = 's')]
        search: Option<String>,

        /// Partner the listing is for
        #[arg(long)]
        partner: Option<String>,

        /// Only pages of this customer
        #[arg(long)]
        customer: Option<String>,

        /// Only pages published on this domain
        #[arg(long)]
        domain: Option<String>,

        /// Add views and conversion value to each row
        #[arg(long, short = 'm')]
        metrics: bool,
    },

    /// Show a single page
    Show {
        /// Page id
        id: String,
    },

    /// Create a page (it goes to review)
    Create {
        #[arg(long)]
        title: String,

        #[arg(long)]
        content: String,

        /// Comma separated keywords
        #[arg(long, default_value = "")]
        keywords: String,

        #[arg(long)]
        customer: String,

        #[arg(long)]
        domain: String,

        /// Slug (default: derived from the title)
        #[arg(long)]
        slug: Option<String>,

        #[arg(long)]
        image_url: Option<String>,

        /// Author id
        #[arg(long, default_value = "1")]
        author: String,

        /// Mark the page as AI generated
        #[arg(long)]
        ai: bool,
    },

    /// Edit a page (it goes back to review)
    Update {
        /// Page id
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        slug: Option<String>,

        #[arg(long)]
        content: Option<String>,

        /// Comma separated keywords, replacing the current ones
        #[arg(long)]
        keywords: Option<String>,

        /// New image URL ("" removes the image)
        #[arg(long)]
        image_url: Option<String>,

        #[arg(long)]
        customer: Option<String>,

        #[arg(long)]
        domain: Option<String>,
    },

    /// Copy a page to a customer and domain
    Duplicate {
        /// Source page id
        id: String,

        #[arg(long)]
        customer: String,

        #[arg(long)]
        domain: String,
    },

    /// Show metrics of a page
    Analytics {
        /// Page id
        id: String,

        /// Break views down by device, browser, country, state or city
        #[arg(long, short = 'd')]
        dimension: Option<String>,
    },

    /// Show the approved page with the highest conversion value
    Top,

    /// Count pages per review status
    Stats {
        #[arg(long)]
        partner: Option<String>,

        #[arg(long)]
        customer: Option<String>,

        #[arg(long)]
        domain: Option<String>,
    },

    /// List customers
    Customers {
        /// Only customers of this partner
        #[arg(long)]
        partner: Option<String>,
    },

    /// List the domains of a customer
    Domains {
        /// Customer id
        customer: String,
    },

    /// Suggest keywords for a title or text
    Suggest {
        text: String,
    },

    /// Generate page content from a prompt
    Generate {
        prompt: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: landingdesk.example.toml)
        output_path: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
