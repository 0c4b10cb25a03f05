//! Async orchestration of catalog requests and session transitions
//!
//! The session lock is never held across a catalog request: a search takes
//! its ticket under the lock, releases it for the request, and re-acquires
//! it to apply the response. A search dropped in between (for example when
//! the HTTP client disconnects) gives the busy flag back on drop.

use crate::catalog::{Catalog, MAX_RESULTS};
use crate::display::SessionView;
use crate::error::Result;
use crate::session::{ActionOutcome, SearchTicket, Session};
use crate::types::{BookDraft, ReadingStatus};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared handle on one session and the catalog it searches
pub struct BookTracker {
    session: Arc<RwLock<Session>>,
    catalog: Arc<dyn Catalog>,
}

impl BookTracker {
    pub fn new(catalog: Arc<dyn Catalog>) -> Self {
        Self {
            session: Arc::new(RwLock::new(Session::new())),
            catalog,
        }
    }

    /// Populate results with `query`; failures are logged and dropped
    pub async fn load_initial(&self, query: &str) {
        let ticket = self.session.write().await.begin_initial_load(query);
        match self.run(ticket).await {
            Ok(outcome) => tracing::info!(?outcome, "Initial books loaded"),
            Err(e) => tracing::debug!("Initial load produced no books: {}", e),
        }
    }

    /// Search the catalog and replace the current results
    pub async fn search(&self, query: &str) -> Result<ActionOutcome> {
        let ticket = self.session.write().await.begin_search(query)?;
        self.run(ticket).await
    }

    async fn run(&self, ticket: SearchTicket) -> Result<ActionOutcome> {
        let mut guard = InFlight::new(&self.session, &ticket);

        let response = self.catalog.search(ticket.query(), MAX_RESULTS).await;
        if let Err(e) = &response {
            tracing::error!(query = ticket.query(), "Error fetching books: {}", e);
        }

        let outcome = self.session.write().await.finish_search(&ticket, response);
        guard.settle();
        if let Ok(ActionOutcome::Superseded) = outcome {
            tracing::warn!(
                seq = ticket.seq(),
                query = ticket.query(),
                "Discarding response for superseded search"
            );
        }
        outcome
    }

    /// Add the search result `id` to the personal list
    pub async fn add_from_results(&self, id: &str) -> Result<ActionOutcome> {
        let outcome = self.session.write().await.add_from_results(id);
        log_rejection("add_from_results", &outcome);
        outcome
    }

    /// Submit the manual-entry form
    ///
    /// The form contents become the session draft; a rejected draft stays
    /// there so the form can be redrawn.
    pub async fn add_manual(&self, draft: BookDraft) -> Result<ActionOutcome> {
        let now = chrono::Utc::now().timestamp_millis();
        let mut session = self.session.write().await;
        session.set_draft(draft);
        let outcome = session.submit_draft(now);
        log_created("add_manual", &outcome);
        outcome
    }

    /// Add a manual entry without storing it as the session draft
    pub async fn create_book(&self, draft: &BookDraft) -> Result<ActionOutcome> {
        let now = chrono::Utc::now().timestamp_millis();
        let outcome = self.session.write().await.add_manual(draft, now);
        log_created("create_book", &outcome);
        outcome
    }

    pub async fn toggle_status(&self, id: &str) -> ActionOutcome {
        self.session.write().await.toggle_status(id)
    }

    pub async fn status_of(&self, id: &str) -> ReadingStatus {
        self.session.read().await.status_of(id)
    }

    pub async fn is_busy(&self) -> bool {
        self.session.read().await.is_busy()
    }

    pub async fn view(&self) -> SessionView {
        self.session.read().await.view()
    }
}

/// Busy-flag owner for one dispatched search
///
/// Dropped unsettled, it abandons its ticket so the session is not left busy.
struct InFlight {
    session: Arc<RwLock<Session>>,
    seq: u64,
    settled: bool,
}

impl InFlight {
    fn new(session: &Arc<RwLock<Session>>, ticket: &SearchTicket) -> Self {
        Self {
            session: Arc::clone(session),
            seq: ticket.seq(),
            settled: false,
        }
    }

    fn settle(&mut self) {
        self.settled = true;
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        if self.settled {
            return;
        }

        let seq = self.seq;
        tracing::debug!(seq, "Search dropped before completion");
        match self.session.try_write() {
            Ok(mut session) => session.abandon_search(seq),
            Err(_) => {
                // Lock is contended; release the flag once it frees up
                let session = Arc::clone(&self.session);
                if let Ok(handle) = tokio::runtime::Handle::try_current() {
                    handle.spawn(async move {
                        session.write().await.abandon_search(seq);
                    });
                }
            }
        }
    }
}

fn log_created(action: &str, outcome: &Result<ActionOutcome>) {
    log_rejection(action, outcome);
    if let Ok(ActionOutcome::Created { id }) = outcome {
        tracing::info!(%id, "Manual book added");
    }
}

fn log_rejection(action: &str, outcome: &Result<ActionOutcome>) {
    if let Err(e) = outcome {
        tracing::debug!(action, kind = e.kind(), "Action rejected: {}", e);
    }
}
