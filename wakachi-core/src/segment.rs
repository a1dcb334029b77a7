//! Segment value types shared by the word and char passes

use std::fmt;

use serde::{Deserialize, Serialize};

/// Granularity a segment was produced at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    /// A word-level unit (an atomic run, a grapheme, or a UAX #29 word)
    Word,
    /// A grapheme cluster inside a word
    Char,
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentKind::Word => write!(f, "word"),
            SegmentKind::Char => write!(f, "char"),
        }
    }
}

/// One unit of the final, merged segmentation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Word or char
    pub kind: SegmentKind,
    /// Text covered by this segment
    pub text: String,
    /// True when the segment's first character is U+0020
    pub is_whitespace: bool,
    /// 0-based position among segments of the same kind, in document order
    pub ordinal: u32,
}

impl Segment {
    /// Create a segment, deriving the whitespace flag from its text
    pub fn new(kind: SegmentKind, text: impl Into<String>, ordinal: u32) -> Self {
        let text = text.into();
        let is_whitespace = starts_with_space(&text);
        Self {
            kind,
            text,
            is_whitespace,
            ordinal,
        }
    }
}

/// Whitespace tokens are recognised by a leading U+0020 only
pub fn starts_with_space(text: &str) -> bool {
    text.starts_with(' ')
}

/// True when `text` has no non-whitespace character (U+00A0 counts as whitespace)
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_flag_uses_leading_space_only() {
        assert!(Segment::new(SegmentKind::Word, " ", 0).is_whitespace);
        assert!(!Segment::new(SegmentKind::Word, "\u{00A0}", 0).is_whitespace);
        assert!(!Segment::new(SegmentKind::Char, "a ", 3).is_whitespace);
    }

    #[test]
    fn test_blank_includes_no_break_space() {
        assert!(is_blank(""));
        assert!(is_blank(" "));
        assert!(is_blank("\u{00A0}"));
        assert!(!is_blank(" x "));
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(SegmentKind::Word.to_string(), "word");
        assert_eq!(SegmentKind::Char.to_string(), "char");
    }
}
