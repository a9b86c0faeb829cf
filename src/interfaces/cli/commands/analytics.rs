//! Analytics commands

use colored::Colorize;
use serde_json::json;

use crate::interfaces::cli::{App, CliError};
use crate::storage::Dimension;

pub async fn show_analytics(
    app: &App,
    page_id: &str,
    dimension: Option<&str>,
) -> Result<(), CliError> {
    // Unknown ids are reported before printing all-zero metrics
    let page = app.pages.get_page(page_id).await?;

    if let Some(raw) = dimension {
        let dimension: Dimension = raw.parse().map_err(CliError::ParseError)?;
        let breakdown = app.analytics.dimension_breakdown(page_id, dimension).await;

        if app.json {
            return app.print_json(&breakdown);
        }
        if breakdown.is_empty() {
            println!(
                "{} No {} data for {}",
                "ℹ".bold().blue(),
                dimension,
                page.title
            );
            return Ok(());
        }
        println!(
            "{} {}",
            format!("Views by {}:", dimension).bold().green(),
            page.title
        );
        for entry in &breakdown {
            println!(
                "  {:<20} {:>8} {}",
                entry.label,
                entry.count,
                format!("{}%", entry.percentage).cyan()
            );
        }
        return Ok(());
    }

    let metrics = app.analytics.metrics_for(page_id).await;
    if app.json {
        return app.print_json(&metrics);
    }
    println!("{} {}", "Metrics for".bold().green(), page.title.bold());
    println!("  {:<18} {}", "Page views:", metrics.page_views);
    println!("  {:<18} {}", "Clicks:", metrics.clicks);
    println!("  {:<18} {}", "Ad views:", metrics.ad_views);
    println!("  {:<18} {}", "Conversions:", metrics.conversions);
    println!("  {:<18} {:.1}%", "CTR:", metrics.ctr);
    println!(
        "  {:<18} {}",
        "Conversion value:",
        format!("${:.2}", metrics.conversion_value).green()
    );
    Ok(())
}

pub async fn show_top_performer(app: &App) -> Result<(), CliError> {
    let Some(page_id) = app.analytics.top_performer().await else {
        if app.json {
            return app.print_json(&json!({ "topPerformer": null }));
        }
        println!("{} No approved page has conversions yet", "ℹ".bold().blue());
        return Ok(());
    };

    let page = app.pages.get_page(&page_id).await?;
    let metrics = app.analytics.metrics_for(&page_id).await;

    if app.json {
        return app.print_json(&json!({ "topPerformer": page, "analytics": metrics }));
    }
    println!(
        "{} Top performing page: {} {} ({})",
        "★".bold().yellow(),
        page.id.cyan(),
        page.title.bold(),
        format!("${:.2}", metrics.conversion_value).green()
    );
    Ok(())
}
