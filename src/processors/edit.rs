use super::{write_with_cost, Mask, Processed};
use crate::cost::{is_free, BLANK, COLLISION};

/// Overlay `edit_text` onto `full_text` starting at char offset `edit_index`.
///
/// Where the page already has a non-blank character the overlay gets `@`
/// instead of the new character. The overlay is then written with
/// `max_cost` units of graphite; characters the point can't afford reveal
/// whatever was on the page before rather than blank paper.
///
/// Positions past the end of the page are blank paper, so an overlay that
/// runs off the end lengthens the page.
pub fn edit_with_cost(full_text: &str, edit_index: usize, edit_text: &str, max_cost: u32) -> Processed {
    let mut page: Vec<char> = full_text.chars().collect();
    if page.len() < edit_index {
        page.resize(edit_index, BLANK);
    }

    let overlay: String = edit_text
        .chars()
        .enumerate()
        .map(|(i, ch)| match page.get(edit_index + i) {
            Some(&existing) if !is_free(existing) => COLLISION,
            _ => ch,
        })
        .collect();

    let mask = Mask::RevealOriginal {
        source: &page,
        offset: edit_index,
    };
    let written = write_with_cost(&overlay, max_cost, &mask);

    let overlay_end = edit_index + edit_text.chars().count();
    let mut text: String = page[..edit_index].iter().collect();
    text.push_str(&written.text);
    if overlay_end < page.len() {
        text.extend(&page[overlay_end..]);
    }

    tracing::trace!(
        edit_index,
        overlay = %overlay,
        remainder = written.remainder,
        "edit processed"
    );

    Processed {
        text,
        remainder: written.remainder,
    }
}
