//! The pencil: durability counters plus write/erase/edit/sharpen actions
//!
//! Each action hands the current page text and the relevant budget to a
//! processor, then reassigns its own counter from the processor's
//! remainder and pushes the new text to the page.

use serde::Serialize;

use crate::config::PencilConfig;
use crate::cost::text_cost;
use crate::error::PencilError;
use crate::page::Page;
use crate::processors::{edit_with_cost, erase_with_cost, write};

/// A pencil with a wearing point, a finite length and a wearing eraser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pencil {
    point_durability: u32,
    initial_point_durability: u32,
    length: u32,
    eraser_durability: u32,
}

/// Snapshot of a pencil's counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PencilStatus {
    pub point_durability: u32,
    pub initial_point_durability: u32,
    pub length: u32,
    pub eraser_durability: u32,
}

impl Pencil {
    pub fn new(config: PencilConfig) -> Self {
        let point_durability = config.point_durability();
        Self {
            point_durability,
            initial_point_durability: point_durability,
            length: config.length(),
            eraser_durability: config.eraser_durability(),
        }
    }

    pub fn point_durability(&self) -> u32 {
        self.point_durability
    }

    pub fn initial_point_durability(&self) -> u32 {
        self.initial_point_durability
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    pub fn eraser_durability(&self) -> u32 {
        self.eraser_durability
    }

    pub fn status(&self) -> PencilStatus {
        PencilStatus {
            point_durability: self.point_durability,
            initial_point_durability: self.initial_point_durability,
            length: self.length,
            eraser_durability: self.eraser_durability,
        }
    }

    /// Write `text` at the end of the page
    pub fn write(&mut self, page: &mut Page, text: &str) {
        let result = write(text, self.point_durability);

        tracing::info!(
            cost = text_cost(text),
            point_before = self.point_durability,
            point_after = result.remainder,
            "write {:?}",
            text
        );

        self.point_durability = result.remainder;
        page.append(&result.text);
    }

    /// Erase the last occurrence of `span`, returning the edit index it leaves
    ///
    /// # Errors
    ///
    /// [`PencilError::SpanNotFound`] if `span` is empty or not on the page.
    /// The eraser is not worn in that case.
    pub fn erase(&mut self, page: &mut Page, span: &str) -> Result<usize, PencilError> {
        let result = erase_with_cost(&page.text(), span, self.eraser_durability)?;

        tracing::info!(
            eraser_before = self.eraser_durability,
            eraser_after = result.remainder,
            erase_index = result.erase_index,
            "erase {:?}",
            span
        );

        self.eraser_durability = result.remainder;
        page.set_text(&result.text);
        page.add_edit_index(result.erase_index);
        Ok(result.erase_index)
    }

    /// Write `text` over the erased region starting at `index`
    ///
    /// # Errors
    ///
    /// [`PencilError::EditWithoutErase`] if the page has no edit registered
    /// at `index`, [`PencilError::IndexOutOfBounds`] if `index` lies past the
    /// end of the page. Neither the page nor the pencil changes on error.
    pub fn edit(&mut self, page: &mut Page, text: &str, index: usize) -> Result<(), PencilError> {
        if !page.has_edit_index(index) {
            return Err(PencilError::EditWithoutErase { index });
        }

        let len = page.len_chars();
        if index > len {
            return Err(PencilError::IndexOutOfBounds { index, len });
        }

        let result = edit_with_cost(&page.text(), index, text, self.point_durability);

        tracing::info!(
            point_before = self.point_durability,
            point_after = result.remainder,
            index,
            "edit {:?}",
            text
        );

        self.point_durability = result.remainder;
        page.set_text(&result.text);
        page.remove_edit_index(index);
        Ok(())
    }

    /// Restore the point, shortening the pencil by one
    ///
    /// Returns `false` (and changes nothing) once the pencil is worn down to
    /// nothing.
    pub fn sharpen(&mut self) -> bool {
        if self.length == 0 {
            tracing::debug!("sharpen ignored, pencil has no length left");
            return false;
        }

        self.point_durability = self.initial_point_durability;
        self.length -= 1;
        tracing::info!(
            point = self.point_durability,
            length = self.length,
            "sharpened"
        );
        true
    }
}

impl Default for Pencil {
    fn default() -> Self {
        Self::new(PencilConfig::default())
    }
}
