//! CLI interface module
//!
//! This module provides command-line interface functionality for landingdesk.

pub mod commands;

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::cli::{Commands, ConfigCommands};
use crate::config::StaticConfig;
use crate::errors::LandingDeskError;
use crate::services::{
    AnalyticsService, CategoryKeywordSuggester, DirectoryService, PageQuery, PageService,
    TemplateContentGenerator, WorkflowOptions,
};
use crate::storage::StorageFactory;

#[derive(Debug)]
pub enum CliError {
    StorageError(String),
    ParseError(String),
    CommandError(String),
    /// Error raised by a service, shown with its code
    Service(LandingDeskError),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::StorageError(msg) => format!("Storage error: {}", msg),
            CliError::ParseError(msg) => format!("Parse error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
            CliError::Service(err) => err.format_simple(),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::StorageError(msg) => {
                format!("{} {}", "Storage error:".red().bold(), msg.white())
            }
            CliError::ParseError(msg) => {
                format!("{} {}", "Parse error:".yellow().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
            CliError::Service(err) => err.format_colored(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<LandingDeskError> for CliError {
    fn from(err: LandingDeskError) -> Self {
        CliError::Service(err)
    }
}

/// Services wired from one configuration, plus output settings
pub struct App {
    pub pages: PageService,
    pub analytics: AnalyticsService,
    pub directory: DirectoryService,
    pub generator: TemplateContentGenerator,
    pub suggester: CategoryKeywordSuggester,
    pub json: bool,
}

impl App {
    pub fn from_config(config: &StaticConfig, json: bool) -> Result<Self, CliError> {
        let storage = StorageFactory::create(&config.storage)
            .map_err(|e| CliError::StorageError(e.to_string()))?;
        let options = WorkflowOptions::from(&config.workflow);

        Ok(Self {
            pages: PageService::new(storage.pages.clone(), storage.directory.clone(), options),
            analytics: AnalyticsService::new(storage.pages, storage.analytics),
            directory: DirectoryService::new(Arc::clone(&storage.directory)),
            generator: TemplateContentGenerator::new(),
            suggester: CategoryKeywordSuggester::new(),
            json,
        })
    }

    /// Print `value` as pretty JSON on stdout
    pub fn print_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<(), CliError> {
        let out = serde_json::to_string_pretty(value)
            .map_err(|e| CliError::CommandError(format!("Failed to encode output: {}", e)))?;
        println!("{}", out);
        Ok(())
    }
}

fn query_from(
    search: Option<String>,
    partner: Option<String>,
    customer: Option<String>,
    domain: Option<String>,
) -> PageQuery {
    PageQuery {
        search_term: search,
        partner_id: partner,
        customer_id: customer,
        domain_id: domain,
    }
}

/// Run a CLI command from clap-parsed input
pub async fn run_cli_command(
    cmd: Commands,
    config: &StaticConfig,
    json: bool,
) -> Result<(), CliError> {
    // Generate doesn't need storage
    if let Commands::Config { action } = cmd {
        let ConfigCommands::Generate { output_path, force } = action;
        return commands::generate_config(output_path, force);
    }

    let app = App::from_config(config, json)?;

    match cmd {
        Commands::List {
            search,
            partner,
            customer,
            domain,
            metrics,
        } => {
            commands::list_pages(&app, query_from(search, partner, customer, domain), metrics).await
        }

        Commands::Show { id } => commands::show_page(&app, &id).await,

        Commands::Create {
            title,
            content,
            keywords,
            customer,
            domain,
            slug,
            image_url,
            author,
            ai,
        } => {
            let draft = commands::CreateArgs {
                title,
                content,
                keywords,
                customer,
                domain,
                slug,
                image_url,
                author,
                ai,
            };
            commands::create_page(&app, draft).await
        }

        Commands::Update {
            id,
            title,
            slug,
            content,
            keywords,
            image_url,
            customer,
            domain,
        } => {
            let edit = commands::UpdateArgs {
                title,
                slug,
                content,
                keywords,
                image_url,
                customer,
                domain,
            };
            commands::update_page(&app, &id, edit).await
        }

        Commands::Duplicate {
            id,
            customer,
            domain,
        } => commands::duplicate_page(&app, &id, &customer, &domain).await,

        Commands::Analytics { id, dimension } => {
            commands::show_analytics(&app, &id, dimension.as_deref()).await
        }

        Commands::Top => commands::show_top_performer(&app).await,

        Commands::Stats {
            partner,
            customer,
            domain,
        } => commands::show_stats(&app, query_from(None, partner, customer, domain)).await,

        Commands::Customers { partner } => commands::list_customers(&app, partner.as_deref()),

        Commands::Domains { customer } => commands::list_domains(&app, &customer),

        Commands::Suggest { text } => commands::suggest_keywords(&app, &text).await,

        Commands::Generate { prompt } => commands::generate_content(&app, &prompt).await,

        Commands::Config { .. } => unreachable!("handled above"),
    }
}
