//! Mask strategies used when a budget runs out mid-write

use crate::cost::BLANK;

/// What gets written in place of a character the budget can't cover
///
/// `at` always yields exactly one character, so a mask can never change the
/// length of the text it is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mask<'a> {
    /// Same character at every position
    Constant(char),
    /// The character that was on the page before, starting at `offset`.
    /// Positions beyond the end of `source` are blank paper.
    RevealOriginal { source: &'a [char], offset: usize },
}

impl Mask<'static> {
    /// Plain writes leave blank paper behind
    pub const BLANK: Self = Mask::Constant(BLANK);
}

impl Mask<'_> {
    /// Character to emit for position `index` of the processed text
    pub fn at(&self, index: usize) -> char {
        match *self {
            Self::Constant(ch) => ch,
            Self::RevealOriginal { source, offset } => {
                source.get(offset + index).copied().unwrap_or(BLANK)
            }
        }
    }
}

impl Default for Mask<'_> {
    fn default() -> Self {
        Self::Constant(BLANK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_mask() {
        let mask = Mask::Constant('#');
        assert_eq!(mask.at(0), '#');
        assert_eq!(mask.at(1000), '#');
        assert_eq!(Mask::default().at(3), ' ');
    }

    #[test]
    fn test_reveal_original_is_offset() {
        let source: Vec<char> = "An onion a day".chars().collect();
        let mask = Mask::RevealOriginal {
            source: &source,
            offset: 3,
        };
        assert_eq!(mask.at(0), 'o');
        assert_eq!(mask.at(4), 'n');
        assert_eq!(mask.at(5), ' ');
    }

    #[test]
    fn test_reveal_original_past_end_is_blank() {
        let source: Vec<char> = "abc".chars().collect();
        let mask = Mask::RevealOriginal {
            source: &source,
            offset: 2,
        };
        assert_eq!(mask.at(0), 'c');
        assert_eq!(mask.at(1), ' ');
        assert_eq!(mask.at(50), ' ');
    }
}
