//! JSON API over the same session actions as the page

use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use booklist_core::{ActionError, ActionOutcome, BookDraft, SessionView};
use serde::{Deserialize, Serialize};

/// Search request body
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: String,
}

/// Add-to-list request body
#[derive(Debug, Deserialize)]
pub struct AddBookRequest {
    pub id: String,
}

/// Result of an action plus the state after it
#[derive(Debug, Serialize)]
pub struct ActionResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<ActionOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub state: SessionView,
}

/// HTTP status for a rejected action
fn status_for(error: &ActionError) -> StatusCode {
    match error {
        ActionError::EmptyQuery
        | ActionError::AlreadyInList
        | ActionError::MissingRequiredFields => StatusCode::BAD_REQUEST,
        ActionError::UnknownBook(_) => StatusCode::NOT_FOUND,
        ActionError::CatalogUnavailable => StatusCode::BAD_GATEWAY,
    }
}

async fn respond(
    state: &AppState,
    result: Result<ActionOutcome, ActionError>,
) -> (StatusCode, Json<ActionResponse>) {
    let view = state.tracker.view().await;
    match result {
        Ok(outcome) => (
            StatusCode::OK,
            Json(ActionResponse {
                ok: true,
                message: outcome.notice().map(str::to_string),
                outcome: Some(outcome),
                error: None,
                state: view,
            }),
        ),
        Err(e) => (
            status_for(&e),
            Json(ActionResponse {
                ok: false,
                outcome: None,
                error: Some(e.kind()),
                message: Some(e.to_string()),
                state: view,
            }),
        ),
    }
}

/// Current session state
pub async fn get_books(State(state): State<AppState>) -> Json<SessionView> {
    Json(state.tracker.view().await)
}

/// Search the catalog
pub async fn search_books(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> (StatusCode, Json<ActionResponse>) {
    let result = state.tracker.search(&request.query).await;
    respond(&state, result).await
}

/// Add a search result to the personal list
pub async fn add_book(
    State(state): State<AppState>,
    Json(request): Json<AddBookRequest>,
) -> (StatusCode, Json<ActionResponse>) {
    let result = state.tracker.add_from_results(&request.id).await;
    respond(&state, result).await
}

/// Add a manually entered book
///
/// The page's manual-entry draft is left as it was.
pub async fn create_book(
    State(state): State<AppState>,
    Json(draft): Json<BookDraft>,
) -> (StatusCode, Json<ActionResponse>) {
    let result = state.tracker.create_book(&draft).await;
    respond(&state, result).await
}

/// Flip a book's reading status
pub async fn toggle_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> (StatusCode, Json<ActionResponse>) {
    let outcome = state.tracker.toggle_status(&id).await;
    respond(&state, Ok(outcome)).await
}
