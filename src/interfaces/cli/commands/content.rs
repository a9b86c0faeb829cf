//! Keyword suggestion and content generation commands

use colored::Colorize;
use tracing::warn;

use crate::interfaces::cli::{App, CliError};
use crate::services::{KeywordSuggester, PageDraft};

pub async fn suggest_keywords(app: &App, text: &str) -> Result<(), CliError> {
    let mut draft = PageDraft {
        title: text.to_string(),
        ..Default::default()
    };
    draft.merge_suggested_keywords(&app.suggester).await?;

    if app.json {
        return app.print_json(&draft.keywords);
    }
    println!("{}", "Suggested keywords:".bold().green());
    for keyword in &draft.keywords {
        println!("  {} {}", "•".cyan(), keyword);
    }
    Ok(())
}

pub async fn generate_content(app: &App, prompt: &str) -> Result<(), CliError> {
    let mut draft = PageDraft::new();
    draft.apply_generated(&app.generator, prompt).await?;

    if app.json {
        return app.print_json(&serde_json::json!({
            "title": draft.title,
            "content": draft.content,
            "keywords": draft.keywords,
            "imageUrl": draft.image_url,
        }));
    }
    println!("{} {}", "Title:".bold().green(), draft.title.bold());
    println!("{} {}", "Keywords:".bold().green(), draft.keywords.join(", "));
    println!("{} {}", "Image:".bold().green(), draft.image_url.blue());
    println!();
    println!("{}", draft.content);

    // Preview of the follow-up keyword step
    if let Some(extra) = related_keywords(&app.suggester, &draft.title).await {
        println!();
        println!("{} {}", "ℹ".bold().blue(), "Related keywords:".dimmed());
        println!("  {}", extra.join(", ").dimmed());
    }
    Ok(())
}

/// Suggestions shown under generated content; a failure only skips the preview
async fn related_keywords(suggester: &dyn KeywordSuggester, title: &str) -> Option<Vec<String>> {
    match suggester.suggest(title).await {
        Ok(extra) => Some(extra),
        Err(e) => {
            warn!("Keyword preview unavailable for '{}': {}", title, e);
            None
        }
    }
}
