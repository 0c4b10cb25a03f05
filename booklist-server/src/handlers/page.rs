//! Form handlers for the server-rendered page
//!
//! Every action re-renders the page directly, with a notice banner for
//! its outcome, so the browser needs no script.

use crate::html::{render_page, Notice};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    Form,
};
use booklist_core::BookDraft;
use serde::Deserialize;

type PageResult = Result<Html<String>, (StatusCode, String)>;

/// Search form submission
#[derive(Debug, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub query: String,
}

/// Add-to-list form submission
#[derive(Debug, Deserialize)]
pub struct AddBookForm {
    pub id: String,
}

async fn render(state: &AppState, query: &str, notice: Option<Notice>) -> PageResult {
    let view = state.tracker.view().await;
    render_page(&view, query, notice.as_ref())
        .map(Html)
        .map_err(|e| {
            tracing::error!("Failed to render page: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        })
}

/// Show the page
pub async fn index(State(state): State<AppState>) -> PageResult {
    render(&state, "", None).await
}

/// Run a catalog search
pub async fn search_page(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> PageResult {
    let result = state.tracker.search(&form.query).await;
    render(&state, &form.query, Notice::for_result(&result)).await
}

/// Add a search result to the personal list
pub async fn add_book_page(
    State(state): State<AppState>,
    Form(form): Form<AddBookForm>,
) -> PageResult {
    let result = state.tracker.add_from_results(&form.id).await;
    render(&state, "", Notice::for_result(&result)).await
}

/// Add a manually entered book
pub async fn new_book_page(
    State(state): State<AppState>,
    Form(draft): Form<BookDraft>,
) -> PageResult {
    let result = state.tracker.add_manual(draft).await;
    render(&state, "", Notice::for_result(&result)).await
}

/// Flip a book's reading status
pub async fn toggle_status_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> PageResult {
    state.tracker.toggle_status(&id).await;
    render(&state, "", None).await
}
