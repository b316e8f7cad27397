//! Cost-tracking text processors
//!
//! Pure functions that apply a durability budget to a span of text. Each
//! returns the resulting text plus whatever budget is left over; callers
//! reassign their own counters from the result.
//!
//! - [`write_with_cost`]: append text, masking what the point can't afford
//! - [`erase_with_cost`]: blank the last occurrence of a span, tail first
//! - [`edit_with_cost`]: overlay text onto an erased span, marking collisions
//!
//! All offsets are char offsets.

mod edit;
mod erase;
mod mask;
mod write;

pub use edit::edit_with_cost;
pub use erase::{erase_with_cost, Erased};
pub use mask::Mask;
pub use write::{write, write_with_cost};

/// Result of running text through a processor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Processed {
    /// Text after costing and masking
    pub text: String,
    /// Budget left over, never below zero
    pub remainder: u32,
}
