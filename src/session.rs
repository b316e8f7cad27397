//! A pencil paired with the page it writes on

use serde::Serialize;

use crate::config::PencilConfig;
use crate::page::Page;
use crate::pencil::{Pencil, PencilStatus};

/// One pencil and one page
///
/// The pair is the unit of exclusive access: nothing inside it is shared.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub pencil: Pencil,
    pub page: Page,
}

/// An action that failed while running a script
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    /// Zero-based position of the action in the script
    pub step: usize,
    /// The action as written
    pub action: String,
    /// Why it failed
    pub error: String,
}

/// Final state of a session, as printed by `pencil --json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub text: String,
    pub line_count: usize,
    pub pencil: PencilStatus,
    pub edit_indexes: Vec<usize>,
    pub failures: Vec<Failure>,
}

impl Session {
    /// Fresh pencil on a blank page
    pub fn new(config: PencilConfig) -> Self {
        Self {
            pencil: Pencil::new(config),
            page: Page::new(),
        }
    }

    /// Fresh pencil on a page that already has `text` on it
    pub fn with_text(config: PencilConfig, text: &str) -> Self {
        Self {
            pencil: Pencil::new(config),
            page: Page::with_text(text),
        }
    }

    /// Current page content
    pub fn text(&self) -> String {
        self.page.text()
    }

    /// Snapshot the session
    pub fn report(&self, failures: Vec<Failure>) -> Report {
        Report {
            text: self.page.text(),
            line_count: self.page.line_count(),
            pencil: self.pencil.status(),
            edit_indexes: self.page.edit_indexes().collect(),
            failures,
        }
    }
}
