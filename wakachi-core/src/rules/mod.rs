//! Kinsoku line-break rules
//!
//! Three independent character-class predicates decide which units must be
//! fused together:
//!
//! - *prohibited line start*: closing brackets, small kana, prolonged sound
//!   marks, sentence punctuation, quotation marks. Tested on the first
//!   grapheme of a unit.
//! - *prohibited line end*: opening brackets and quotes, currency symbols,
//!   no-break space. Tested on the last character of a unit.
//! - *inseparable*: dashes and leaders that render as one continuous stroke.

mod config;
mod loader;

use std::path::Path;
use std::sync::Arc;

use regex::Regex;

use crate::error::{Result, RulesError};

pub use config::{CharClass, LineStartClasses, Metadata, RuleSetConfig};
pub use loader::{default_rules, DEFAULT_RULES_TOML};

/// Character-class predicates consulted by the merge passes
///
/// Implementations must be pure: the same input always yields the same
/// answer.
pub trait LineBreakRules: Send + Sync {
    /// Whether a unit whose first grapheme is `grapheme` may not start a line
    fn prohibits_line_start(&self, grapheme: &str) -> bool;

    /// Whether `text` ends with a character that may not end a line
    fn prohibits_line_end(&self, text: &str) -> bool;

    /// Whether every character of `text` is one that may not end a line
    fn is_line_end_run(&self, text: &str) -> bool;

    /// Whether `text` contains an inseparable mark
    fn is_inseparable(&self, text: &str) -> bool;
}

/// Regex-backed rule set compiled from a [`RuleSetConfig`]
#[derive(Debug, Clone)]
pub struct KinsokuRules {
    name: String,
    line_start_leading: Regex,
    line_start_anywhere: Option<Regex>,
    line_end_trailing: Regex,
    line_end_run: Regex,
    inseparable: Regex,
}

impl KinsokuRules {
    /// Shared instance of the embedded default rule set
    pub fn default_rules() -> Arc<KinsokuRules> {
        default_rules()
    }

    /// Compile a rule set from configuration
    pub fn from_config(config: &RuleSetConfig) -> Result<Self> {
        config.validate()?;

        let start = &config.prohibited_line_start;
        let end = &config.prohibited_line_end.chars;

        Ok(Self {
            name: config.metadata.name.clone(),
            line_start_leading: compile(
                "prohibited_line_start.leading",
                &format!("^[{}]", start.leading),
            )?,
            line_start_anywhere: start
                .anywhere
                .as_deref()
                .map(|body| compile("prohibited_line_start.anywhere", &format!("[{body}]")))
                .transpose()?,
            line_end_trailing: compile("prohibited_line_end.chars", &format!("[{end}]$"))?,
            line_end_run: compile("prohibited_line_end.chars", &format!("^[{end}]+$"))?,
            inseparable: compile(
                "inseparable.chars",
                &format!("[{}]", config.inseparable.chars),
            )?,
        })
    }

    /// Parse and compile a TOML rule set
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Self::from_config(&RuleSetConfig::from_toml_str(source)?)
    }

    /// Load and compile a TOML rule set from disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Name from the rule set's metadata
    pub fn name(&self) -> &str {
        &self.name
    }
}

fn compile(class: &'static str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| RulesError::InvalidPattern { class, source })
}

impl LineBreakRules for KinsokuRules {
    fn prohibits_line_start(&self, grapheme: &str) -> bool {
        self.line_start_leading.is_match(grapheme)
            || self
                .line_start_anywhere
                .as_ref()
                .is_some_and(|anywhere| anywhere.is_match(grapheme))
    }

    fn prohibits_line_end(&self, text: &str) -> bool {
        self.line_end_trailing.is_match(text)
    }

    fn is_line_end_run(&self, text: &str) -> bool {
        self.line_end_run.is_match(text)
    }

    fn is_inseparable(&self, text: &str) -> bool {
        self.inseparable.is_match(text)
    }
}
