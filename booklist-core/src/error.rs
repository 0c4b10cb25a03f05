//! Error types for BookList Core

use thiserror::Error;

/// Result type alias for session actions
pub type Result<T> = std::result::Result<T, ActionError>;

/// Result type for catalog requests
pub type CatalogResult<T> = std::result::Result<T, CatalogError>;

/// A user action that was rejected
///
/// The display text is the notice shown to the user.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ActionError {
    #[error("Please enter a search term!")]
    EmptyQuery,

    #[error("Error searching books. Please try again.")]
    CatalogUnavailable,

    #[error("Book already in your list!")]
    AlreadyInList,

    #[error("Please fill in Title and Author!")]
    MissingRequiredFields,

    #[error("Book not found in search results: {0}")]
    UnknownBook(String),
}

impl ActionError {
    /// Stable machine-readable name
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmptyQuery => "empty_query",
            Self::CatalogUnavailable => "catalog_unavailable",
            Self::AlreadyInList => "already_in_list",
            Self::MissingRequiredFields => "missing_required_fields",
            Self::UnknownBook(_) => "unknown_book",
        }
    }
}

/// Errors that occur while querying the remote catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Catalog returned HTTP {0}")]
    Status(u16),
}
