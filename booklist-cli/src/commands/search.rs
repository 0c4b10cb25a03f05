//! Search command implementation

use super::{busy_spinner, write_cards};
use anyhow::{Context, Result};
use booklist_core::{BookTracker, GoogleBooksCatalog};
use std::sync::Arc;

/// Run one catalog search and print the results
pub async fn search(catalog_url: &str, query: &str, json: bool) -> Result<()> {
    let catalog = GoogleBooksCatalog::with_options(catalog_url, None)
        .context("Failed to create catalog client")?;
    let tracker = BookTracker::new(Arc::new(catalog));

    let spinner = busy_spinner()?;
    let result = tracker.search(query).await;
    spinner.finish_and_clear();

    let outcome = result?;
    tracing::debug!(?outcome, "Search finished");

    let view = tracker.view().await;
    if json {
        println!("{}", serde_json::to_string_pretty(&view.results)?);
    } else if view.results.is_empty() {
        println!("No books found for '{}'", query);
    } else {
        write_cards(&mut std::io::stdout().lock(), &view.results)?;
    }

    Ok(())
}
