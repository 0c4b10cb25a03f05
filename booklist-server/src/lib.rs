//! BookList Server Library
//!
//! Serves the BookList page and its JSON API. Exported for testing and reuse.

pub mod config;
pub mod handlers;
pub mod html;
pub mod routes;
pub mod state;
