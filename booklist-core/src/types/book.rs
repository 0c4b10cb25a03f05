//! The normalized book record - what every list and card is built from

use serde::{Deserialize, Serialize};

/// Title used when the catalog omits one
pub const DEFAULT_TITLE: &str = "No Title";

/// Author line used when the catalog lists no authors
pub const DEFAULT_AUTHOR: &str = "Unknown Author";

/// Year used when the catalog omits a publication date
pub const DEFAULT_YEAR: &str = "Unknown Year";

/// Description used when the catalog omits one
pub const DEFAULT_DESCRIPTION: &str = "No description available";

/// Cover shown for books without a thumbnail
pub const PLACEHOLDER_COVER: &str = "https://via.placeholder.com/150";

/// Where a record came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum BookSource {
    /// Normalized from a catalog search result
    #[default]
    Catalog,

    /// Entered by hand through the draft form
    Manual,
}

/// A normalized book record
///
/// Records are never edited after creation; the personal list only
/// appends them and search results are replaced wholesale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookRecord {
    /// Identifier, unique within its source
    pub id: String,

    /// Book title
    pub title: String,

    /// Comma-joined author names
    pub author: String,

    /// Raw publication date (or a placeholder)
    pub year: String,

    /// Full description; truncation happens at display time
    pub description: String,

    /// Cover thumbnail URL
    pub cover_image: String,

    /// Origin of the record
    #[serde(default)]
    pub source: BookSource,
}

impl BookRecord {
    /// Create a catalog record with every optional field at its default
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: DEFAULT_TITLE.to_string(),
            author: DEFAULT_AUTHOR.to_string(),
            year: DEFAULT_YEAR.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            cover_image: PLACEHOLDER_COVER.to_string(),
            source: BookSource::Catalog,
        }
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the author line
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Set the year
    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = year.into();
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the cover image URL
    pub fn with_cover_image(mut self, cover_image: impl Into<String>) -> Self {
        self.cover_image = cover_image.into();
        self
    }
}
