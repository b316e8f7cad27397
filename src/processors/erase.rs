use crate::cost::BLANK;
use crate::error::PencilError;

/// Result of an erase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Erased {
    /// Text with the erased characters blanked
    pub text: String,
    /// Eraser budget left over
    pub remainder: u32,
    /// Char offset where the erased occurrence starts
    pub erase_index: usize,
}

/// Blank the last occurrence of `target` in `full_text`.
///
/// Each character of `target` costs one unit of eraser. When the eraser
/// can't cover the whole span it works from the end of the span backwards,
/// so a prefix of `len(target) - max_cost` characters survives.
///
/// `erase_index` is always the start of the full occurrence, even for a
/// partial erase, so a following edit covers the whole original span.
///
/// # Errors
///
/// Returns [`PencilError::SpanNotFound`] if `target` is empty or does not
/// occur in `full_text`.
pub fn erase_with_cost(full_text: &str, target: &str, max_cost: u32) -> Result<Erased, PencilError> {
    if target.is_empty() {
        return Err(PencilError::SpanNotFound {
            span: target.to_string(),
        });
    }

    let byte_start = full_text
        .rfind(target)
        .ok_or_else(|| PencilError::SpanNotFound {
            span: target.to_string(),
        })?;

    let erase_index = full_text[..byte_start].chars().count();
    let span_len = target.chars().count();
    let budget = usize::try_from(max_cost).unwrap_or(usize::MAX);

    let (blank_len, remainder) = if span_len <= budget {
        (span_len, max_cost - span_len as u32)
    } else {
        (budget, 0)
    };

    let mask_start = erase_index + (span_len - blank_len);
    let mask_end = erase_index + span_len;

    let text: String = full_text
        .chars()
        .enumerate()
        .map(|(i, ch)| {
            if (mask_start..mask_end).contains(&i) {
                BLANK
            } else {
                ch
            }
        })
        .collect();

    tracing::trace!(
        erase_index,
        blanked = blank_len,
        remainder,
        "erase processed"
    );

    Ok(Erased {
        text,
        remainder,
        erase_index,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const WOODCHUCK: &str =
        "How much wood would a woodchuck chuck if a woodchuck could chuck wood?";

    #[test]
    fn test_erases_last_occurrence() {
        let result = erase_with_cost(WOODCHUCK, "chuck", 100).unwrap();
        assert_eq!(
            result.text,
            "How much wood would a woodchuck chuck if a woodchuck could       wood?"
        );
        assert_eq!(result.remainder, 95);
        assert_eq!(result.erase_index, 59);
    }

    #[test]
    fn test_second_erase_finds_previous_occurrence() {
        let first = erase_with_cost(WOODCHUCK, "chuck", 100).unwrap();
        let second = erase_with_cost(&first.text, "chuck", first.remainder).unwrap();
        assert_eq!(
            second.text,
            "How much wood would a woodchuck chuck if a wood      could       wood?"
        );
        assert_eq!(second.remainder, 90);
        assert_eq!(second.erase_index, 47);
    }

    #[test]
    fn test_partial_erase_works_from_the_tail() {
        let result = erase_with_cost("Buffalo Bill", "Bill", 3).unwrap();
        assert_eq!(result.text, "Buffalo B   ");
        assert_eq!(result.remainder, 0);
        assert_eq!(result.erase_index, 8);
    }

    #[test]
    fn test_exhausted_eraser_changes_nothing_but_registers_index() {
        let result = erase_with_cost("Buffalo Bill", "Bill", 0).unwrap();
        assert_eq!(result.text, "Buffalo Bill");
        assert_eq!(result.remainder, 0);
        assert_eq!(result.erase_index, 8);
    }

    #[test]
    fn test_exact_budget() {
        let result = erase_with_cost("Buffalo Bill", "Bill", 4).unwrap();
        assert_eq!(result.text, "Buffalo     ");
        assert_eq!(result.remainder, 0);
    }

    #[test]
    fn test_erase_preserves_length() {
        for budget in 0..8 {
            let result = erase_with_cost(WOODCHUCK, "woodchuck", budget).unwrap();
            assert_eq!(result.text.chars().count(), WOODCHUCK.chars().count());
        }
    }

    #[test]
    fn test_missing_span_is_an_error() {
        let err = erase_with_cost("Buffalo Bill", "Bob", 10).unwrap_err();
        assert_eq!(
            err,
            PencilError::SpanNotFound {
                span: "Bob".to_string()
            }
        );
    }

    #[test]
    fn test_empty_span_is_an_error() {
        assert!(matches!(
            erase_with_cost("Buffalo Bill", "", 10),
            Err(PencilError::SpanNotFound { .. })
        ));
    }

    #[test]
    fn test_erase_index_counts_chars_not_bytes() {
        let result = erase_with_cost("café latte", "latte", 10).unwrap();
        assert_eq!(result.erase_index, 5);
        assert_eq!(result.text, "café      ");
    }
}
