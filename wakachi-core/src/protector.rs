//! Atomic-run protection
//!
//! Finds maximal runs of "Latin-like word with punctuation" characters: any
//! letter whose script extensions include none of Han, Hangul, Hiragana and
//! Katakana, plus ASCII
//! punctuation and symbols (hyphen-minus and `?` excluded) and U+00A0. Digits fall in
//! that ASCII range, so `3.14`, `don't`, `e.g.` and URLs each form one run.

use std::sync::OnceLock;

use regex::Regex;

const ATOMIC_RUN_PATTERN: &str = concat!(
    r"[",
    r"[\p{L}&&[^\p{scx=Han}\p{scx=Hangul}\p{scx=Hiragana}\p{scx=Katakana}]]",
    r"\x21-\x2C\x2E-\x3E\x40\x5B-\x60\x7B-\x7E\xA0",
    r"]+",
);

fn atomic_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(ATOMIC_RUN_PATTERN).expect("static pattern"))
}

/// A slice of a text run after protection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece<'a> {
    /// Ordinary text, segmented normally
    Text(&'a str),
    /// A protected run that becomes exactly one word
    Atomic(&'a str),
}

impl<'a> Piece<'a> {
    /// Text covered by this piece
    pub fn as_str(&self) -> &'a str {
        match self {
            Piece::Text(text) | Piece::Atomic(text) => text,
        }
    }
}

/// Split `text` into ordinary and atomic pieces, in order
///
/// Concatenating the pieces yields `text` again. Empty input yields no
/// pieces; input without any match yields a single [`Piece::Text`].
pub fn protect_atomic_runs(text: &str) -> Vec<Piece<'_>> {
    let mut pieces = Vec::new();
    let mut cursor = 0;

    for found in atomic_run().find_iter(text) {
        if found.start() > cursor {
            pieces.push(Piece::Text(&text[cursor..found.start()]));
        }
        pieces.push(Piece::Atomic(found.as_str()));
        cursor = found.end();
    }

    if cursor < text.len() {
        pieces.push(Piece::Text(&text[cursor..]));
    }

    pieces
}
