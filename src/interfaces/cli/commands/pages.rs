//! Page management commands

use colored::{ColoredString, Colorize};

use crate::interfaces::cli::{App, CliError};
use crate::services::{CreatePageRequest, PageDraft, PageQuery, UpdatePageRequest, workflow};
use crate::storage::{LandingPage, PageStatus};

/// Arguments of `create`
pub struct CreateArgs {
    pub title: String,
    pub content: String,
    pub keywords: String,
    pub customer: String,
    pub domain: String,
    pub slug: Option<String>,
    pub image_url: Option<String>,
    pub author: String,
    pub ai: bool,
}

/// Arguments of `update`
pub struct UpdateArgs {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub content: Option<String>,
    pub keywords: Option<String>,
    pub image_url: Option<String>,
    pub customer: Option<String>,
    pub domain: Option<String>,
}

pub(crate) fn status_badge(status: PageStatus) -> ColoredString {
    let label = status.label();
    match status {
        PageStatus::Draft => label.dimmed(),
        PageStatus::UnderReview => label.yellow(),
        PageStatus::Approved => label.green(),
        PageStatus::Rejected => label.red(),
    }
}

fn print_page_line(page: &LandingPage) {
    let mut info_parts = vec![
        page.id.cyan().to_string(),
        page.title.bold().to_string(),
        format!("[{}]", status_badge(page.status)),
        page.public_url().blue().underline().to_string(),
    ];
    if page.is_ai_generated {
        info_parts.push("(AI)".magenta().to_string());
    }
    if page.is_duplicated {
        info_parts.push("(copy)".dimmed().to_string());
    }
    println!("  {}", info_parts.join(" "));
}

fn print_page_details(page: &LandingPage) {
    println!("{} {}", page.title.bold().green(), format!("({})", page.id).dimmed());
    println!("  {:<12} {}", "Status:", status_badge(page.status));
    println!("  {:<12} {}", "URL:", page.public_url().blue().underline());
    println!("  {:<12} {}", "Customer:", page.customer_id);
    println!("  {:<12} {}", "Author:", page.author_id);
    println!("  {:<12} {}", "Keywords:", page.keywords.join(", "));
    if let Some(image) = &page.image_url {
        println!("  {:<12} {}", "Image:", image);
    }
    println!(
        "  {:<12} {}",
        "Created:",
        page.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!(
        "  {:<12} {}",
        "Updated:",
        page.updated_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    if let Some(original) = &page.original_page_id {
        println!("  {:<12} {}", "Copied from:", original);
    }
    if let Some(reason) = workflow::rejection_notice(page) {
        println!("  {} {}", "Rejected:".red().bold(), reason.red());
    }
    println!();
    println!("{}", page.content);
}

pub async fn list_pages(app: &App, query: PageQuery, with_metrics: bool) -> Result<(), CliError> {
    let pages = app.pages.list_pages(&query).await?;

    if with_metrics {
        let rows = app.analytics.metrics_for_pages(&pages).await;
        if app.json {
            let rows: Vec<_> = rows
                .iter()
                .map(|(page, metrics)| serde_json::json!({ "page": page, "metrics": metrics }))
                .collect();
            return app.print_json(&rows);
        }
        if rows.is_empty() {
            println!("{} No landing pages found", "ℹ".bold().blue());
            return Ok(());
        }
        println!("{}", "Landing pages:".bold().green());
        println!();
        for (page, metrics) in &rows {
            print_page_line(page);
            println!(
                "      {}",
                format!(
                    "{} views, {} conversions, ${:.2}",
                    metrics.page_views, metrics.conversions, metrics.conversion_value
                )
                .dimmed()
            );
        }
        println!();
        println!(
            "{} Total {} landing pages",
            "ℹ".bold().blue(),
            rows.len().to_string().green()
        );
        return Ok(());
    }

    if app.json {
        return app.print_json(&pages);
    }

    if pages.is_empty() {
        println!("{} No landing pages found", "ℹ".bold().blue());
        return Ok(());
    }

    println!("{}", "Landing pages:".bold().green());
    println!();
    for page in &pages {
        print_page_line(page);
    }
    println!();
    println!(
        "{} Total {} landing pages",
        "ℹ".bold().blue(),
        pages.len().to_string().green()
    );
    Ok(())
}

pub async fn show_page(app: &App, id: &str) -> Result<(), CliError> {
    let page = app.pages.get_page(id).await?;
    if app.json {
        return app.print_json(&page);
    }
    print_page_details(&page);
    Ok(())
}

pub async fn create_page(app: &App, args: CreateArgs) -> Result<(), CliError> {
    let req = CreatePageRequest {
        title: args.title,
        slug: args.slug,
        content: args.content,
        keywords: PageDraft::parse_keywords(&args.keywords),
        image_url: args.image_url,
        author_id: args.author,
        customer_id: args.customer,
        domain_id: args.domain,
        is_ai_generated: args.ai,
    };
    let page = app.pages.create_page(req).await?;

    if app.json {
        return app.print_json(&page);
    }
    println!(
        "{} Created landing page: {} -> {} ({})",
        "✓".bold().green(),
        page.id.cyan(),
        page.public_url().blue().underline(),
        status_badge(page.status)
    );
    Ok(())
}

pub async fn update_page(app: &App, id: &str, args: UpdateArgs) -> Result<(), CliError> {
    let req = UpdatePageRequest {
        title: args.title,
        slug: args.slug,
        content: args.content,
        keywords: args.keywords.as_deref().map(PageDraft::parse_keywords),
        image_url: args.image_url,
        customer_id: args.customer,
        domain_id: args.domain,
        status: None,
    };
    let page = app.pages.update_page(id, req).await?;

    if app.json {
        return app.print_json(&page);
    }
    println!(
        "{} Updated landing page: {} ({})",
        "✓".bold().green(),
        page.id.cyan(),
        status_badge(page.status)
    );
    if let Some(reason) = page.rejection_reason.as_deref() {
        println!(
            "  {} previous rejection: {}",
            "ℹ".bold().blue(),
            reason.dimmed()
        );
    }
    Ok(())
}

pub async fn duplicate_page(
    app: &App,
    id: &str,
    customer: &str,
    domain: &str,
) -> Result<(), CliError> {
    let copy = app.pages.duplicate_page(id, customer, domain).await?;

    if app.json {
        return app.print_json(&copy);
    }
    println!(
        "{} Duplicated {} as {}: {} ({})",
        "✓".bold().green(),
        id.cyan(),
        copy.id.cyan(),
        copy.public_url().blue().underline(),
        status_badge(copy.status)
    );
    Ok(())
}

pub async fn show_stats(app: &App, query: PageQuery) -> Result<(), CliError> {
    let stats = app.pages.page_stats(&query).await?;

    if app.json {
        return app.print_json(&stats);
    }
    println!("{}", "Page status summary:".bold().green());
    println!("  {:<14} {}", "Total:", stats.total.to_string().bold());
    println!("  {:<14} {}", "Draft:", stats.draft.to_string().dimmed());
    println!("  {:<14} {}", "Under review:", stats.under_review.to_string().yellow());
    println!("  {:<14} {}", "Approved:", stats.approved.to_string().green());
    println!("  {:<14} {}", "Rejected:", stats.rejected.to_string().red());
    Ok(())
}
