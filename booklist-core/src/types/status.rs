//! Reading status and the identifier-keyed status map

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Reading status of a book
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ReadingStatus {
    /// Not read yet (the status of every book never toggled)
    #[default]
    WantToRead,

    /// Already read
    Read,
}

impl ReadingStatus {
    /// The opposite status
    pub fn toggled(self) -> Self {
        match self {
            Self::WantToRead => Self::Read,
            Self::Read => Self::WantToRead,
        }
    }

    /// Button label shown on a book card
    pub fn label(self) -> &'static str {
        match self {
            Self::WantToRead => "📖 Want to Read",
            Self::Read => "✅ Already Read",
        }
    }

    /// CSS class used for the status button
    pub fn css_class(self) -> &'static str {
        match self {
            Self::WantToRead => "want-to-read",
            Self::Read => "read",
        }
    }
}

/// Status map shared by search results and the personal list
///
/// Only identifiers that were toggled at least once have an entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusMap {
    entries: HashMap<String, ReadingStatus>,
}

impl StatusMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current status for `id`; untracked identifiers read as the default
    pub fn get(&self, id: &str) -> ReadingStatus {
        self.entries.get(id).copied().unwrap_or_default()
    }

    /// Flip the status for `id` and return the new value
    pub fn toggle(&mut self, id: &str) -> ReadingStatus {
        let next = self.get(id).toggled();
        self.entries.insert(id.to_string(), next);
        next
    }

    /// Whether `id` has ever been toggled
    pub fn is_tracked(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Number of tracked identifiers
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
