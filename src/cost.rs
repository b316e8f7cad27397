//! Cost model for graphite and eraser wear
//!
//! Every character on the page has a cost. Spaces and line breaks are free:
//! they never wear the point down and are never masked out.

/// Character written when the pencil fails to record a character
pub const BLANK: char = ' ';

/// Character written when an edit lands on text that is already there
pub const COLLISION: char = '@';

/// Character class used for costing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// `'\n'`
    LineBreak,
    /// `' '`
    Space,
    /// ASCII `A`-`Z`
    Uppercase,
    /// Lowercase letters, digits, punctuation and everything else
    Other,
}

impl CharClass {
    /// Units of durability consumed by one character of this class
    pub fn cost(self) -> u32 {
        match self {
            Self::LineBreak | Self::Space => 0,
            Self::Uppercase => 2,
            Self::Other => 1,
        }
    }

    /// Free characters cost nothing and pass through masking untouched
    pub fn is_free(self) -> bool {
        matches!(self, Self::LineBreak | Self::Space)
    }
}

/// Get the cost class of a character
pub fn char_class(ch: char) -> CharClass {
    match ch {
        '\n' => CharClass::LineBreak,
        ' ' => CharClass::Space,
        'A'..='Z' => CharClass::Uppercase,
        _ => CharClass::Other,
    }
}

/// Cost of a single character
pub fn cost_of(ch: char) -> u32 {
    char_class(ch).cost()
}

/// Check if a character is free (space or line break)
pub fn is_free(ch: char) -> bool {
    char_class(ch).is_free()
}

/// Total cost of a string
pub fn text_cost(text: &str) -> u32 {
    text.chars().map(cost_of).fold(0, u32::saturating_add)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_characters_cost_nothing() {
        assert_eq!(cost_of(' '), 0);
        assert_eq!(cost_of('\n'), 0);
        assert!(is_free(' '));
        assert!(is_free('\n'));
    }

    #[test]
    fn test_uppercase_costs_two() {
        for ch in 'A'..='Z' {
            assert_eq!(cost_of(ch), 2, "{ch}");
        }
    }

    #[test]
    fn test_other_characters_cost_one() {
        for ch in ['a', 'z', '0', '9', '?', '@', '\t', 'é'] {
            assert_eq!(cost_of(ch), 1, "{ch:?}");
            assert!(!is_free(ch));
        }
    }

    #[test]
    fn test_char_class() {
        assert_eq!(char_class('\n'), CharClass::LineBreak);
        assert_eq!(char_class(' '), CharClass::Space);
        assert_eq!(char_class('Q'), CharClass::Uppercase);
        assert_eq!(char_class('q'), CharClass::Other);
    }

    #[test]
    fn test_text_cost() {
        assert_eq!(text_cost(""), 0);
        assert_eq!(text_cost("text"), 4);
        assert_eq!(text_cost("Text"), 5);
        assert_eq!(text_cost("She sells\nsea shells"), 18);
        assert_eq!(text_cost("ABC"), 6);
    }
}
