//! Display helpers shared by every front end

use crate::types::{BookDraft, BookRecord, ReadingStatus, DEFAULT_DESCRIPTION};
use serde::Serialize;
use std::borrow::Cow;

/// Characters of description shown on a card
pub const DESCRIPTION_LIMIT: usize = 100;

/// Shorten a description for display
///
/// Longer than [`DESCRIPTION_LIMIT`] characters: cut and suffixed with `...`.
/// Counts characters, not bytes, so multi-byte text is never split.
pub fn truncate_description(description: &str) -> Cow<'_, str> {
    if description.is_empty() {
        return Cow::Borrowed(DEFAULT_DESCRIPTION);
    }

    match description.char_indices().nth(DESCRIPTION_LIMIT) {
        Some((cut, _)) => Cow::Owned(format!("{}...", &description[..cut])),
        None => Cow::Borrowed(description),
    }
}

/// Everything needed to draw one book card
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BookCard {
    pub id: String,
    pub title: String,
    pub author: String,
    pub year: String,
    pub description: String,
    pub cover_image: String,
    pub status: ReadingStatus,
    pub status_label: &'static str,
    pub status_class: &'static str,
}

impl BookCard {
    pub fn new(record: &BookRecord, status: ReadingStatus) -> Self {
        Self {
            id: record.id.clone(),
            title: record.title.clone(),
            author: record.author.clone(),
            year: record.year.clone(),
            description: truncate_description(&record.description).into_owned(),
            cover_image: record.cover_image.clone(),
            status,
            status_label: status.label(),
            status_class: status.css_class(),
        }
    }
}

/// Read-only snapshot of the whole session for renderers
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub results: Vec<BookCard>,
    pub my_books: Vec<BookCard>,
    pub busy: bool,
    pub draft: BookDraft,
}

impl SessionView {
    /// Label for the search button
    pub fn search_label(&self) -> &'static str {
        if self.busy {
            "Searching..."
        } else {
            "Search Books"
        }
    }
}
