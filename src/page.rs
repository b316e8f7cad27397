//! The page a pencil writes on
//!
//! Holds the text (backed by `ropey::Rope`) and the set of char offsets
//! where an erase has left room for an edit.

use ropey::Rope;
use std::collections::BTreeSet;

/// A sheet of paper: text plus the edit indexes left behind by erasing
#[derive(Debug, Clone, Default)]
pub struct Page {
    rope: Rope,
    edit_indexes: BTreeSet<usize>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a page that already has text on it
    pub fn with_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            edit_indexes: BTreeSet::new(),
        }
    }

    /// Full page content
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Replace the page content
    pub fn set_text(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
    }

    /// Append text at the end of the page
    pub fn append(&mut self, text: &str) {
        let end = self.rope.len_chars();
        self.rope.insert(end, text);
    }

    /// Total length in characters
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Number of lines (always >= 1)
    pub fn line_count(&self) -> usize {
        self.rope.len_lines().max(1)
    }

    /// Mark `index` as the start of an erased region
    pub fn add_edit_index(&mut self, index: usize) {
        self.edit_indexes.insert(index);
    }

    /// Forget an edit index; a no-op if it isn't registered
    pub fn remove_edit_index(&mut self, index: usize) {
        self.edit_indexes.remove(&index);
    }

    /// Check whether an edit is allowed at `index`
    pub fn has_edit_index(&self, index: usize) -> bool {
        self.edit_indexes.contains(&index)
    }

    /// Registered edit indexes in ascending order
    pub fn edit_indexes(&self) -> impl Iterator<Item = usize> + '_ {
        self.edit_indexes.iter().copied()
    }
}
