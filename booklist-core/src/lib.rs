//! BookList Core Library
//!
//! Session state and catalog access for the BookList reading tracker.
//! Catalog hits are normalized into [`BookRecord`]s; a [`Session`] keeps the
//! current search results, the personal list and the reading statuses, and
//! [`BookTracker`] drives searches against a [`Catalog`] asynchronously.

pub mod catalog;
pub mod display;
pub mod error;
pub mod session;
pub mod tracker;
pub mod types;

pub use catalog::{Catalog, GoogleBooksCatalog, StaticCatalog, DEFAULT_QUERY, MAX_RESULTS};
pub use display::{truncate_description, BookCard, SessionView, DESCRIPTION_LIMIT};
pub use error::{ActionError, CatalogError, CatalogResult, Result};
pub use session::{ActionOutcome, SearchTicket, Session};
pub use tracker::BookTracker;
pub use types::{BookDraft, BookRecord, BookSource, PersonalList, ReadingStatus, StatusMap};
