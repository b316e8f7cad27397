use super::{Mask, Processed};
use crate::cost::char_class;

/// Write `text` with `max_cost` units of graphite, blanking what can't be afforded
pub fn write(text: &str, max_cost: u32) -> Processed {
    write_with_cost(text, max_cost, &Mask::BLANK)
}

/// Scan `text` left to right, charging each chargeable character against
/// `max_cost`.
///
/// Once the running cost exceeds the budget every further chargeable
/// character is replaced by `mask.at(i)`, where `i` is the char position in
/// `text`. Spaces and line breaks are always copied through. Characters
/// written before the budget ran out are never revisited.
pub fn write_with_cost(text: &str, max_cost: u32, mask: &Mask<'_>) -> Processed {
    let mut spent: u32 = 0;
    let mut out = String::with_capacity(text.len());

    for (i, ch) in text.chars().enumerate() {
        let class = char_class(ch);
        if class.is_free() {
            out.push(ch);
            continue;
        }

        spent = spent.saturating_add(class.cost());
        if spent > max_cost {
            out.push(mask.at(i));
        } else {
            out.push(ch);
        }
    }

    let remainder = max_cost.saturating_sub(spent);
    tracing::trace!(spent, max_cost, remainder, "write processed");

    Processed {
        text: out,
        remainder,
    }
}
