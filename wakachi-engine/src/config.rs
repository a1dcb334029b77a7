//! Splitter configuration

use wakachi_core::LanguageTag;

use crate::error::{EngineError, Result};

/// Options for one transform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitterConfig {
    /// Run the line-break merge over chars instead of words
    pub concat_char: bool,
    /// Run the line-break merge at all
    pub line_breaking_rules: bool,
    /// Split ordinary text at word boundaries instead of grapheme clusters
    pub word_segmenter: bool,
    /// Locale used when neither the tree nor its document names one
    pub fallback_language: Option<LanguageTag>,
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            concat_char: false,
            line_breaking_rules: true,
            word_segmenter: false,
            fallback_language: None,
        }
    }
}

impl SplitterConfig {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Whether the word-level merge runs
    pub fn merges_words(&self) -> bool {
        self.line_breaking_rules && !self.concat_char
    }

    /// Whether the char-level merge runs
    pub fn merges_chars(&self) -> bool {
        self.line_breaking_rules && self.concat_char
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    concat_char: Option<bool>,
    line_breaking_rules: Option<bool>,
    word_segmenter: Option<bool>,
    fallback_language: Option<String>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge at char level instead of word level
    pub fn concat_char(mut self, enabled: bool) -> Self {
        self.concat_char = Some(enabled);
        self
    }

    /// Enable or disable the line-break merge
    pub fn line_breaking_rules(mut self, enabled: bool) -> Self {
        self.line_breaking_rules = Some(enabled);
        self
    }

    /// Use word-boundary segmentation for the word pass
    pub fn word_segmenter(mut self, enabled: bool) -> Self {
        self.word_segmenter = Some(enabled);
        self
    }

    /// Set the fallback language by tag
    pub fn fallback_language(mut self, tag: impl Into<String>) -> Self {
        self.fallback_language = Some(tag.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<SplitterConfig> {
        let mut config = SplitterConfig::default();

        if let Some(enabled) = self.concat_char {
            config.concat_char = enabled;
        }
        if let Some(enabled) = self.line_breaking_rules {
            config.line_breaking_rules = enabled;
        }
        if let Some(enabled) = self.word_segmenter {
            config.word_segmenter = enabled;
        }
        if let Some(tag) = self.fallback_language {
            let parsed = LanguageTag::parse(&tag).ok_or_else(|| {
                EngineError::Configuration(format!("fallback_language {tag:?} is not a language tag"))
            })?;
            config.fallback_language = Some(parsed);
        }

        Ok(config)
    }
}
