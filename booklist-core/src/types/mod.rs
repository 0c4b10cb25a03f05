//! Core types for the BookList session state

mod book;
mod draft;
mod list;
mod status;

pub use book::{
    BookRecord, BookSource, DEFAULT_AUTHOR, DEFAULT_DESCRIPTION, DEFAULT_TITLE, DEFAULT_YEAR,
    PLACEHOLDER_COVER,
};
pub use draft::{BookDraft, MANUAL_DESCRIPTION, MANUAL_YEAR};
pub use list::PersonalList;
pub use status::{ReadingStatus, StatusMap};
