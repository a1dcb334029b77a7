//! Locale-aware segmentation adapters
//!
//! The engine only needs two granularities: grapheme clusters and word
//! boundaries. Both are reached through the [`Segmenter`] trait so that an
//! embedder can plug in a tailored implementation.

use std::borrow::Cow;
use std::sync::OnceLock;

use icu_segmenter::options::WordBreakInvariantOptions;
use icu_segmenter::WordSegmenter;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use crate::language::LanguageTag;

/// Boundary algorithm requested from a [`Segmenter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Granularity {
    /// User-perceived characters
    Grapheme,
    /// Word boundaries; non-word runs (punctuation, spaces) come out as
    /// their own tokens
    Word,
}

/// Boundary segmentation for a single piece of text
pub trait Segmenter: Send + Sync {
    /// Split `text` into contiguous, non-empty tokens covering all of it
    fn segment<'a>(
        &self,
        text: &'a str,
        language: &LanguageTag,
        granularity: Granularity,
    ) -> Vec<&'a str>;

    /// First grapheme cluster of `text`, if any
    fn first_grapheme<'a>(&self, text: &'a str, language: &LanguageTag) -> Option<&'a str> {
        self.segment(text, language, Granularity::Grapheme)
            .into_iter()
            .next()
    }
}

/// Unicode segmentation: UAX #29 grapheme clusters from
/// `unicode-segmentation`, word boundaries from the ICU4X word segmenter
///
/// The ICU segmenter picks its model from the script of the text: Chinese and
/// Japanese runs are split with the CJ dictionary, Southeast Asian scripts
/// with the LSTM models, everything else by the UAX #29 rules. The language
/// tag is therefore not consulted.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeSegmenter;

impl UnicodeSegmenter {
    /// Create the segmenter
    pub fn new() -> Self {
        Self
    }
}

impl Segmenter for UnicodeSegmenter {
    fn segment<'a>(
        &self,
        text: &'a str,
        _language: &LanguageTag,
        granularity: Granularity,
    ) -> Vec<&'a str> {
        match granularity {
            Granularity::Grapheme => text.graphemes(true).collect(),
            Granularity::Word => word_bounds(text),
        }
    }

    fn first_grapheme<'a>(&self, text: &'a str, _language: &LanguageTag) -> Option<&'a str> {
        text.graphemes(true).next()
    }
}

fn word_bounds(text: &str) -> Vec<&str> {
    let breakpoints: Vec<usize> = WordSegmenter::new_auto(WordBreakInvariantOptions::default())
        .segment_str(text)
        .collect();

    breakpoints
        .windows(2)
        .map(|pair| &text[pair[0]..pair[1]])
        .filter(|token| !token.is_empty())
        .collect()
}

fn control_whitespace() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\t\r\n]").expect("static pattern"))
}

fn whitespace_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s{2,}").expect("static pattern"))
}

/// Inline whitespace normalization applied before segmentation
///
/// Tabs, carriage returns and line feeds are removed, then every run of two
/// or more whitespace characters collapses to a single U+0020. Text that
/// needs no change is borrowed.
pub fn normalize_whitespace(text: &str) -> Cow<'_, str> {
    let stripped = control_whitespace().replace_all(text, "");
    if !whitespace_run().is_match(&stripped) {
        return stripped;
    }
    Cow::Owned(whitespace_run().replace_all(&stripped, " ").into_owned())
}
