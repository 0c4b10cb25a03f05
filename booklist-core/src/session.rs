//! Session state and its transitions
//!
//! [`Session`] holds the three pieces of state (search results, personal
//! list, status map) plus the manual-entry draft and the search sequencing.
//! Every transition is synchronous; the network half of a search lives in
//! [`crate::tracker`].

use crate::catalog::MAX_RESULTS;
use crate::display::{BookCard, SessionView};
use crate::error::{ActionError, CatalogResult, Result};
use crate::types::{BookDraft, BookRecord, PersonalList, ReadingStatus, StatusMap};
use serde::Serialize;

/// Successful outcome of a user action
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActionOutcome {
    /// Search results were replaced
    Searched { count: usize },

    /// The catalog reported no items; previous results kept
    NoResults,

    /// A newer search was dispatched before this one finished
    Superseded,

    /// A search result was added to the personal list
    Added { id: String },

    /// A manual entry was added to the personal list
    Created { id: String },

    /// A status was flipped
    Toggled { id: String, status: ReadingStatus },
}

impl ActionOutcome {
    /// Notice to show the user, if this outcome warrants one
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            Self::Added { .. } => Some("Book added to your personal list!"),
            _ => None,
        }
    }
}

/// Handle for a dispatched search request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    seq: u64,
    query: String,
}

impl SearchTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn query(&self) -> &str {
        &self.query
    }
}

/// All state for one user session
#[derive(Debug, Default)]
pub struct Session {
    results: Vec<BookRecord>,
    my_books: PersonalList,
    statuses: StatusMap,
    draft: BookDraft,
    last_dispatched: u64,
    pending: Option<u64>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a user search; blank queries are rejected before dispatch
    pub fn begin_search(&mut self, query: &str) -> Result<SearchTicket> {
        if query.trim().is_empty() {
            return Err(ActionError::EmptyQuery);
        }
        Ok(self.dispatch(query))
    }

    /// Start the search that populates results on first load
    pub fn begin_initial_load(&mut self, query: &str) -> SearchTicket {
        self.dispatch(query)
    }

    fn dispatch(&mut self, query: &str) -> SearchTicket {
        self.last_dispatched += 1;
        self.pending = Some(self.last_dispatched);
        SearchTicket {
            seq: self.last_dispatched,
            query: query.to_string(),
        }
    }

    /// Apply the catalog's answer for `ticket`
    ///
    /// Answers for anything but the latest dispatched ticket are dropped.
    pub fn finish_search(
        &mut self,
        ticket: &SearchTicket,
        response: CatalogResult<Option<Vec<BookRecord>>>,
    ) -> Result<ActionOutcome> {
        if ticket.seq != self.last_dispatched {
            return Ok(ActionOutcome::Superseded);
        }
        self.pending = None;

        match response {
            Ok(Some(mut records)) => {
                records.truncate(MAX_RESULTS);
                let count = records.len();
                self.results = records;
                Ok(ActionOutcome::Searched { count })
            }
            Ok(None) => Ok(ActionOutcome::NoResults),
            Err(_) => Err(ActionError::CatalogUnavailable),
        }
    }

    /// Drop the busy flag for a search whose answer will never be applied
    ///
    /// Only the latest dispatched search owns the flag; abandoning an older
    /// one leaves it alone.
    pub fn abandon_search(&mut self, seq: u64) {
        if self.pending == Some(seq) {
            self.pending = None;
        }
    }

    /// A search is outstanding
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Add the search result with this identifier to the personal list
    pub fn add_from_results(&mut self, id: &str) -> Result<ActionOutcome> {
        let record = self
            .results
            .iter()
            .find(|record| record.id == id)
            .cloned()
            .ok_or_else(|| ActionError::UnknownBook(id.to_string()))?;
        self.add_book(record)
    }

    /// Add a record to the personal list unless already present
    pub fn add_book(&mut self, record: BookRecord) -> Result<ActionOutcome> {
        let id = record.id.clone();
        self.my_books.insert(record)?;
        Ok(ActionOutcome::Added { id })
    }

    pub fn draft(&self) -> &BookDraft {
        &self.draft
    }

    /// Replace the draft with the form's current contents
    pub fn set_draft(&mut self, draft: BookDraft) {
        self.draft = draft;
    }

    /// Turn the draft into a personal-list entry created at `now_millis`
    ///
    /// On success the draft is cleared; on failure it is left untouched.
    pub fn submit_draft(&mut self, now_millis: i64) -> Result<ActionOutcome> {
        let draft = self.draft.clone();
        let outcome = self.add_manual(&draft, now_millis)?;
        self.draft.clear();
        Ok(outcome)
    }

    /// Add a manual entry without touching the stored draft
    pub fn add_manual(&mut self, draft: &BookDraft, now_millis: i64) -> Result<ActionOutcome> {
        if !draft.is_complete() {
            return Err(ActionError::MissingRequiredFields);
        }

        let id = self.my_books.fresh_manual_id(now_millis);
        self.my_books.insert(draft.to_record(id.clone()))?;
        Ok(ActionOutcome::Created { id })
    }

    /// Flip the reading status for `id`
    pub fn toggle_status(&mut self, id: &str) -> ActionOutcome {
        let status = self.statuses.toggle(id);
        ActionOutcome::Toggled {
            id: id.to_string(),
            status,
        }
    }

    pub fn status_of(&self, id: &str) -> ReadingStatus {
        self.statuses.get(id)
    }

    pub fn results(&self) -> &[BookRecord] {
        &self.results
    }

    pub fn my_books(&self) -> &PersonalList {
        &self.my_books
    }

    pub fn statuses(&self) -> &StatusMap {
        &self.statuses
    }

    /// Snapshot for rendering
    pub fn view(&self) -> SessionView {
        let card = |record: &BookRecord| BookCard::new(record, self.status_of(&record.id));
        SessionView {
            results: self.results.iter().map(card).collect(),
            my_books: self.my_books.iter().map(card).collect(),
            busy: self.is_busy(),
            draft: self.draft.clone(),
        }
    }
}
