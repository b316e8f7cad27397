//! Message types for pencil actions
//!
//! All changes to a [`Session`](crate::session::Session) flow through these
//! messages. They double as the entries of an action script:
//!
//! ```yaml
//! - write: "She sells sea shells"
//! - erase: "sea"
//! - edit: { index: 10, text: "tea" }
//! - sharpen
//! ```

use serde::{Deserialize, Serialize};

/// One thing a pencil can do to a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PencilMsg {
    /// Append text at the end of the page
    Write(String),
    /// Erase the last occurrence of a span
    Erase(String),
    /// Write over a previously erased region
    Edit { index: usize, text: String },
    /// Restore the point at the cost of one unit of length
    Sharpen,
}

impl PencilMsg {
    /// Short name used in logs and reports
    pub fn name(&self) -> &'static str {
        match self {
            Self::Write(_) => "write",
            Self::Erase(_) => "erase",
            Self::Edit { .. } => "edit",
            Self::Sharpen => "sharpen",
        }
    }
}

impl std::fmt::Display for PencilMsg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Write(text) => write!(f, "write {:?}", text),
            Self::Erase(span) => write!(f, "erase {:?}", span),
            Self::Edit { index, text } => write!(f, "edit {:?} at {}", text, index),
            Self::Sharpen => write!(f, "sharpen"),
        }
    }
}
