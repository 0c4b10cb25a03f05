//! Interactive shell over one session

use super::{busy_spinner, write_cards};
use anyhow::{Context, Result};
use booklist_core::{ActionError, ActionOutcome, BookDraft, BookTracker, GoogleBooksCatalog};
use std::io::{BufRead, Write};
use std::sync::Arc;

const HELP: &str = "\
Commands:
  search <query>   Search the catalog (replaces results)
  results          Show the current search results
  list             Show my books
  add <n|id>       Add search result n (or the book with this id) to my books
  toggle <n|m<n>|id>
                   Flip read / want-to-read for result n, my book n, or an id
  new              Add a book by hand
  help             Show this help
  quit             Leave the shell";

#[derive(Debug, PartialEq, Eq)]
enum ShellCommand {
    Search(String),
    Results,
    List,
    Add(String),
    Toggle(String),
    New,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

impl ShellCommand {
    fn parse(line: &str) -> Self {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word {
            "" => Self::Empty,
            // Blank queries go through so the session can reject them
            "search" | "s" => Self::Search(rest.to_string()),
            "results" | "r" => Self::Results,
            "list" | "l" => Self::List,
            "add" | "a" if !rest.is_empty() => Self::Add(rest.to_string()),
            "toggle" | "t" if !rest.is_empty() => Self::Toggle(rest.to_string()),
            "new" | "n" => Self::New,
            "help" | "h" | "?" => Self::Help,
            "quit" | "q" | "exit" => Self::Quit,
            _ => Self::Unknown(line.to_string()),
        }
    }
}

/// Start an interactive session against the catalog at `catalog_url`
pub async fn shell(catalog_url: &str, initial_query: &str) -> Result<()> {
    let catalog = GoogleBooksCatalog::with_options(catalog_url, None)
        .context("Failed to create catalog client")?;
    let tracker = BookTracker::new(Arc::new(catalog));

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run(&tracker, initial_query, stdin.lock(), stdout.lock()).await
}

async fn run<R: BufRead, W: Write>(
    tracker: &BookTracker,
    initial_query: &str,
    mut input: R,
    mut out: W,
) -> Result<()> {
    writeln!(out, "📖 My BookList 📖")?;
    writeln!(out, "Welcome to my reading collection! Type 'help' for commands.")?;

    let spinner = busy_spinner()?;
    tracker.load_initial(initial_query).await;
    spinner.finish_and_clear();
    write_cards(&mut out, &tracker.view().await.results)?;

    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = read_line(&mut input)? else {
            break;
        };

        match ShellCommand::parse(&line) {
            ShellCommand::Empty => {}
            ShellCommand::Help => writeln!(out, "{}", HELP)?,
            ShellCommand::Quit => break,
            ShellCommand::Unknown(line) => {
                writeln!(out, "Unknown command: {} (type 'help')", line)?
            }
            ShellCommand::Results => show_results(tracker, &mut out).await?,
            ShellCommand::List => {
                let my_books = tracker.view().await.my_books;
                if my_books.is_empty() {
                    writeln!(out, "Your list is empty.")?;
                } else {
                    write_cards(&mut out, &my_books)?;
                }
            }
            ShellCommand::Search(query) => {
                let spinner = busy_spinner()?;
                let result = tracker.search(&query).await;
                spinner.finish_and_clear();

                let searched = matches!(result, Ok(ActionOutcome::Searched { .. }));
                report(&mut out, &result)?;
                if searched {
                    show_results(tracker, &mut out).await?;
                } else if let Ok(ActionOutcome::NoResults) = result {
                    writeln!(out, "No books found for '{}'", query)?;
                }
            }
            ShellCommand::Add(target) => {
                let id = resolve(tracker, &target).await;
                let result = tracker.add_from_results(&id).await;
                report(&mut out, &result)?;
            }
            ShellCommand::Toggle(target) => {
                let id = resolve(tracker, &target).await;
                if let ActionOutcome::Toggled { id, status } = tracker.toggle_status(&id).await {
                    writeln!(out, "{}: {}", id, status.label())?;
                }
            }
            ShellCommand::New => {
                let draft = prompt_draft(&mut input, &mut out)?;
                let result = tracker.add_manual(draft).await;
                if let Ok(ActionOutcome::Created { id }) = &result {
                    writeln!(out, "Added {}", id)?;
                }
                report(&mut out, &result)?;
            }
        }
    }

    Ok(())
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn prompt_draft<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<BookDraft> {
    let mut ask = |label: &str| -> Result<String> {
        write!(out, "{}: ", label)?;
        out.flush()?;
        Ok(read_line(input)?.unwrap_or_default())
    };

    Ok(BookDraft {
        title: ask("Book Title")?,
        author: ask("Author Name")?,
        year: ask("Year (optional)")?,
        description: ask("Description (optional)")?,
    })
}

/// Print the notice for an action result, if any
fn report<W: Write>(out: &mut W, result: &Result<ActionOutcome, ActionError>) -> Result<()> {
    match result {
        Ok(outcome) => {
            if let Some(notice) = outcome.notice() {
                writeln!(out, "{}", notice)?;
            }
        }
        Err(e) => writeln!(out, "{}", e)?,
    }
    Ok(())
}

async fn show_results<W: Write>(tracker: &BookTracker, out: &mut W) -> Result<()> {
    let results = tracker.view().await.results;
    if results.is_empty() {
        writeln!(out, "No search results.")?;
    } else {
        write_cards(out, &results)?;
    }
    Ok(())
}

/// Map a shell target to a book id
///
/// A displayed book's exact id wins; otherwise `n` is search result n and
/// `m<n>` is my book n. Anything else is passed through as an id.
async fn resolve(tracker: &BookTracker, target: &str) -> String {
    let view = tracker.view().await;
    let mut shown = view.results.iter().chain(&view.my_books);
    if shown.any(|card| card.id == target) {
        return target.to_string();
    }

    let (cards, index) = match target.strip_prefix('m') {
        Some(n) => (&view.my_books, n),
        None => (&view.results, target),
    };

    index
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| cards.get(i))
        .map(|card| card.id.clone())
        .unwrap_or_else(|| target.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use booklist_core::{BookRecord, ReadingStatus, StaticCatalog};
    use std::io::Cursor;

    fn tracker() -> BookTracker {
        let records = vec![
            BookRecord::new("dune-1")
                .with_title("Dune")
                .with_author("Frank Herbert"),
            BookRecord::new("prog-1").with_title("Programming Pearls"),
        ];
        BookTracker::new(Arc::new(StaticCatalog::new(records)))
    }

    async fn run_script(tracker: &BookTracker, script: &str) -> String {
        let mut out = Vec::new();
        run(tracker, "programming", Cursor::new(script.to_string()), &mut out)
            .await
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            ShellCommand::parse("search  rust lang "),
            ShellCommand::Search("rust lang".to_string())
        );
        assert_eq!(ShellCommand::parse("search"), ShellCommand::Search(String::new()));
        assert_eq!(ShellCommand::parse("a 2"), ShellCommand::Add("2".to_string()));
        assert_eq!(ShellCommand::parse("t m1"), ShellCommand::Toggle("m1".to_string()));
        assert_eq!(ShellCommand::parse("   "), ShellCommand::Empty);
        assert_eq!(ShellCommand::parse("q"), ShellCommand::Quit);
        assert_eq!(
            ShellCommand::parse("add"),
            ShellCommand::Unknown("add".to_string())
        );
    }

    #[tokio::test]
    async fn test_initial_results_shown() {
        let tracker = tracker();
        let output = run_script(&tracker, "quit\n").await;
        assert!(output.contains("[1] Programming Pearls"));
    }

    #[tokio::test]
    async fn test_blank_search_rejected() {
        let tracker = tracker();
        let output = run_script(&tracker, "search   \n").await;
        assert!(output.contains("Please enter a search term!"));
    }

    #[tokio::test]
    async fn test_add_twice_and_toggle() {
        let tracker = tracker();
        let output = run_script(&tracker, "search dune\nadd 1\nadd dune-1\ntoggle m1\n").await;

        assert!(output.contains("Book added to your personal list!"));
        assert!(output.contains("Book already in your list!"));
        assert!(output.contains("dune-1: ✅ Already Read"));
        assert_eq!(tracker.view().await.my_books.len(), 1);
    }

    #[tokio::test]
    async fn test_exact_id_beats_list_index() {
        let records = vec![
            BookRecord::new("m1").with_title("Mistborn"),
            BookRecord::new("b2").with_title("Mistral"),
        ];
        let tracker = BookTracker::new(Arc::new(StaticCatalog::new(records)));
        let output = run_script(&tracker, "search mist\nadd 2\ntoggle m1\n").await;

        assert!(output.contains("m1: ✅ Already Read"));
        assert_eq!(tracker.status_of("m1").await, ReadingStatus::Read);
        assert_eq!(tracker.status_of("b2").await, ReadingStatus::WantToRead);
    }

    #[tokio::test]
    async fn test_new_book_flow() {
        let tracker = tracker();
        let script = "new\nDune\n\n\n\nnew\nDune\nHerbert\n\n\nlist\n";
        let output = run_script(&tracker, script).await;

        assert!(output.contains("Please fill in Title and Author!"));
        assert!(output.contains("Added manual-"));
        assert!(output.contains("Year:        Not specified"));
        assert!(output.contains("Description: No description"));
        assert_eq!(tracker.view().await.my_books.len(), 1);
    }

    #[tokio::test]
    async fn test_search_without_matches() {
        let tracker = tracker();
        let output = run_script(&tracker, "search cobol\nresults\n").await;
        assert!(output.contains("No books found for 'cobol'"));
        // Previous results are kept
        assert!(output.contains("Programming Pearls"));
    }
}
