//! Draft record backing the manual-entry form

use super::{BookRecord, BookSource, PLACEHOLDER_COVER};
use serde::{Deserialize, Serialize};

/// Year stored for manual books entered without one
pub const MANUAL_YEAR: &str = "Not specified";

/// Description stored for manual books entered without one
pub const MANUAL_DESCRIPTION: &str = "No description";

/// The manual-entry form as a single value
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub year: String,
    pub description: String,
}

impl BookDraft {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            ..Self::default()
        }
    }

    /// Title and author are both present
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && !self.author.trim().is_empty()
    }

    /// Whether every field is blank
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Build the record for this draft under the given identifier
    pub fn to_record(&self, id: impl Into<String>) -> BookRecord {
        BookRecord {
            id: id.into(),
            title: self.title.clone(),
            author: self.author.clone(),
            year: or_default(&self.year, MANUAL_YEAR),
            description: or_default(&self.description, MANUAL_DESCRIPTION),
            cover_image: PLACEHOLDER_COVER.to_string(),
            source: BookSource::Manual,
        }
    }

    /// Reset to the empty form
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn or_default(value: &str, default: &str) -> String {
    if value.trim().is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}
