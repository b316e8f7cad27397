//! Errors raised by pencil actions

/// Errors that can occur when a pencil works on a page
///
/// All of these are caller errors: when one is returned, neither the page
/// nor the pencil has been changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PencilError {
    /// Edit attempted at an index no erase has registered
    EditWithoutErase { index: usize },
    /// Erase target is empty or not on the page
    SpanNotFound { span: String },
    /// Edit index lies past the end of the page
    IndexOutOfBounds { index: usize, len: usize },
}

impl std::fmt::Display for PencilError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EditWithoutErase { index } => {
                write!(f, "need to erase before you can edit (index {})", index)
            }
            Self::SpanNotFound { span } => write!(f, "text not found on page: {:?}", span),
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {} is past the end of the page ({} chars)", index, len)
            }
        }
    }
}

impl std::error::Error for PencilError {}
