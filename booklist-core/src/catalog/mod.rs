//! Remote catalog abstraction
//!
//! A catalog turns a free-text query into normalized [`BookRecord`]s.
//! `Ok(None)` means the catalog reported no item list at all, which callers
//! treat differently from an empty list.

mod google;
mod volume;

pub use google::GoogleBooksCatalog;
pub use volume::{ImageLinks, Volume, VolumeInfo, VolumesResponse};

use crate::error::{CatalogError, CatalogResult};
use crate::types::BookRecord;
use async_trait::async_trait;

/// Result cap for every catalog request
pub const MAX_RESULTS: usize = 6;

/// Query issued when the session starts
pub const DEFAULT_QUERY: &str = "programming";

/// Abstract catalog provider
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Search for at most `max_results` books matching `query`
    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> CatalogResult<Option<Vec<BookRecord>>>;
}

/// In-memory catalog (for testing and offline demos)
///
/// Matches the query case-insensitively against title and author.
#[derive(Debug, Default)]
pub struct StaticCatalog {
    records: Vec<BookRecord>,
    unavailable: bool,
    queries: std::sync::Mutex<Vec<String>>,
}

impl StaticCatalog {
    pub fn new(records: Vec<BookRecord>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    /// A catalog whose every request fails
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// Queries received so far, oldest first
    pub fn queries(&self) -> Vec<String> {
        self.queries
            .lock()
            .map(|queries| queries.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl Catalog for StaticCatalog {
    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> CatalogResult<Option<Vec<BookRecord>>> {
        if let Ok(mut queries) = self.queries.lock() {
            queries.push(query.to_string());
        }

        if self.unavailable {
            return Err(CatalogError::Status(503));
        }

        let needle = query.to_lowercase();
        let matches: Vec<BookRecord> = self
            .records
            .iter()
            .filter(|record| {
                record.title.to_lowercase().contains(&needle)
                    || record.author.to_lowercase().contains(&needle)
            })
            .take(max_results)
            .cloned()
            .collect();

        if matches.is_empty() {
            Ok(None)
        } else {
            Ok(Some(matches))
        }
    }
}
