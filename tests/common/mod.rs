//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use pencil::{Page, Pencil, PencilConfig};

/// Pencil config with every field set explicitly
pub fn config(point: u32, length: u32, eraser: u32) -> PencilConfig {
    PencilConfig {
        point_durability: Some(point),
        length: Some(length),
        eraser_durability: Some(eraser),
    }
}

/// Pencil with the given point durability, default length and eraser
pub fn pencil_with_point(point: u32) -> Pencil {
    Pencil::new(PencilConfig {
        point_durability: Some(point),
        ..PencilConfig::default()
    })
}

/// Pencil with the given eraser durability, default point and length
pub fn pencil_with_eraser(eraser: u32) -> Pencil {
    Pencil::new(PencilConfig {
        eraser_durability: Some(eraser),
        ..PencilConfig::default()
    })
}

/// Page with text and an edit index already registered
pub fn page_with_edit(text: &str, index: usize) -> Page {
    let mut page = Page::with_text(text);
    page.add_edit_index(index);
    page
}
