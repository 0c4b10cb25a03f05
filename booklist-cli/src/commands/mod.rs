//! CLI command implementations

mod search;
mod shell;

pub use search::search;
pub use shell::shell;

use anyhow::Result;
use booklist_core::BookCard;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::time::Duration;

/// Spinner shown while a catalog request is in flight
fn busy_spinner() -> Result<ProgressBar> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}")?);
    spinner.set_message("Searching...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    Ok(spinner)
}

/// Print numbered cards in plain text
fn write_cards<W: Write>(out: &mut W, cards: &[BookCard]) -> std::io::Result<()> {
    for (i, card) in cards.iter().enumerate() {
        writeln!(out, "[{}] {}", i + 1, card.title)?;
        writeln!(out, "    Author:      {}", card.author)?;
        writeln!(out, "    Year:        {}", card.year)?;
        writeln!(out, "    Description: {}", card.description)?;
        writeln!(out, "    Status:      {}", card.status_label)?;
        writeln!(out, "    Id:          {}", card.id)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use booklist_core::{BookRecord, ReadingStatus};

    #[test]
    fn test_write_cards() {
        let record = BookRecord::new("b1").with_title("Dune").with_year("1965");
        let cards = vec![BookCard::new(&record, ReadingStatus::Read)];

        let mut out = Vec::new();
        write_cards(&mut out, &cards).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("[1] Dune\n"));
        assert!(text.contains("Year:        1965"));
        assert!(text.contains("✅ Already Read"));
        assert!(text.contains("Id:          b1"));
    }
}
