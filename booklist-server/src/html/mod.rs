//! Server-rendered single page
//!
//! The page is generated with quick-xml so every title, description and
//! form value is escaped on the way out.

mod page;

pub use page::render_page;

use booklist_core::{ActionError, ActionOutcome};

/// Severity of a notice banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Banner shown above the page after an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }

    /// Notice for an action result, if it warrants one
    pub fn for_result(result: &Result<ActionOutcome, ActionError>) -> Option<Self> {
        match result {
            Ok(outcome) => outcome.notice().map(Self::info),
            Err(e) => Some(Self::error(e.to_string())),
        }
    }

    fn css_class(&self) -> &'static str {
        match self.kind {
            NoticeKind::Info => "notice notice-info",
            NoticeKind::Error => "notice notice-error",
        }
    }
}
