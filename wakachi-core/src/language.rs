//! Language tags and locale resolution

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Locale used when nothing in the tree or configuration names one
pub const DEFAULT_LANGUAGE: &str = "en";

/// A parsed BCP 47 language tag
///
/// Only the shape is checked: a 2–8 letter primary subtag followed by
/// alphanumeric subtags of up to eight characters. The primary subtag is
/// lowercased; `_` is accepted as a separator and normalised to `-`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LanguageTag {
    tag: String,
    primary_len: usize,
}

impl LanguageTag {
    /// Parse a tag, returning `None` when it is not well formed
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        let mut subtags = raw.split(['-', '_']);
        let primary = subtags.next()?;
        if !(2..=8).contains(&primary.len()) || !primary.chars().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }

        let mut tag = primary.to_ascii_lowercase();
        for subtag in subtags {
            if subtag.is_empty()
                || subtag.len() > 8
                || !subtag.chars().all(|c| c.is_ascii_alphanumeric())
            {
                return None;
            }
            tag.push('-');
            tag.push_str(subtag);
        }

        Some(Self {
            tag,
            primary_len: primary.len(),
        })
    }

    /// The default locale
    pub fn default_tag() -> Self {
        Self {
            tag: DEFAULT_LANGUAGE.to_string(),
            primary_len: DEFAULT_LANGUAGE.len(),
        }
    }

    /// Resolve the first well-formed tag among `candidates`, falling back to
    /// [`DEFAULT_LANGUAGE`]. Candidates are tried in order; `None` and empty
    /// entries are skipped, malformed ones are skipped with a debug event.
    pub fn resolve<'a, I>(candidates: I) -> Self
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        for candidate in candidates.into_iter().flatten() {
            if candidate.trim().is_empty() {
                continue;
            }
            match Self::parse(candidate) {
                Some(tag) => return tag,
                None => debug!(tag = candidate, "unresolvable language tag, trying next"),
            }
        }
        Self::default_tag()
    }

    /// Full tag text
    pub fn as_str(&self) -> &str {
        &self.tag
    }

    /// Primary language subtag, lowercased
    pub fn primary(&self) -> &str {
        &self.tag[..self.primary_len]
    }

    /// Language family of this tag
    pub fn language(&self) -> Language {
        Language::from_code(self.primary())
    }
}

impl Default for LanguageTag {
    fn default() -> Self {
        Self::default_tag()
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag)
    }
}

impl FromStr for LanguageTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("malformed language tag: {s:?}"))
    }
}

impl TryFrom<String> for LanguageTag {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LanguageTag> for String {
    fn from(tag: LanguageTag) -> Self {
        tag.tag
    }
}

/// Language families the segmenter distinguishes
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// English and other space-delimited Latin-script languages
    #[default]
    English,
    /// Japanese
    Japanese,
    /// Chinese
    Chinese,
    /// Korean
    Korean,
    /// Any other primary subtag
    Other(String),
}

impl Language {
    /// Create a Language from a primary subtag
    pub fn from_code(code: &str) -> Self {
        match code.to_ascii_lowercase().as_str() {
            "en" | "eng" => Language::English,
            "ja" | "jpn" => Language::Japanese,
            "zh" | "zho" | "chi" => Language::Chinese,
            "ko" | "kor" => Language::Korean,
            other => Language::Other(other.to_string()),
        }
    }

    /// Whether text in this language is written without inter-word spaces
    pub fn is_cjk(&self) -> bool {
        matches!(
            self,
            Language::Japanese | Language::Chinese | Language::Korean
        )
    }

    /// Get the language code
    pub fn code(&self) -> &str {
        match self {
            Language::English => "en",
            Language::Japanese => "ja",
            Language::Chinese => "zh",
            Language::Korean => "ko",
            Language::Other(code) => code,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
