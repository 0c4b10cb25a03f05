//! BookList CLI - search the catalog and keep a reading list from the terminal

mod commands;

use anyhow::Result;
use booklist_core::GoogleBooksCatalog;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "booklist")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Catalog API root
    #[arg(long, global = true, default_value = GoogleBooksCatalog::DEFAULT_BASE_URL)]
    catalog_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the book catalog
    Search {
        /// Free-text query
        query: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Interactive session: search, keep a reading list, track statuses
    Shell {
        /// Query used to load the first results
        #[arg(long, default_value = booklist_core::DEFAULT_QUERY)]
        initial_query: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "booklist_cli=debug,booklist_core=debug"
    } else {
        "booklist_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Search { query, json } => commands::search(&cli.catalog_url, &query, json).await,

        Commands::Shell { initial_query } => {
            commands::shell(&cli.catalog_url, &initial_query).await
        }
    }
}
