//! The personal reading list

use super::BookRecord;
use crate::error::{ActionError, Result};
use serde::{Deserialize, Serialize};

/// Insertion-ordered, append-only list with unique identifiers
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PersonalList {
    books: Vec<BookRecord>,
}

impl PersonalList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a book with this identifier is already in the list
    pub fn contains(&self, id: &str) -> bool {
        self.books.iter().any(|book| book.id == id)
    }

    /// Append a record unless its identifier is already present
    pub fn insert(&mut self, record: BookRecord) -> Result<()> {
        if self.contains(&record.id) {
            return Err(ActionError::AlreadyInList);
        }
        self.books.push(record);
        Ok(())
    }

    /// Identifier for a manual entry created at `now_millis`
    ///
    /// Bumps the timestamp until it no longer collides with an existing entry.
    pub fn fresh_manual_id(&self, now_millis: i64) -> String {
        let mut millis = now_millis;
        loop {
            let id = format!("manual-{}", millis);
            if !self.contains(&id) {
                return id;
            }
            millis += 1;
        }
    }

    pub fn get(&self, id: &str) -> Option<&BookRecord> {
        self.books.iter().find(|book| book.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BookRecord> {
        self.books.iter()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
