//! Error types for rule configuration
//!
//! Segmentation and merging are total; only building a rule set can fail.

use thiserror::Error;

/// Errors raised while loading or compiling a line-break rule set
#[derive(Debug, Error)]
pub enum RulesError {
    /// A character class did not compile as a regular expression
    #[error("invalid pattern for class '{class}': {source}")]
    InvalidPattern {
        /// Name of the offending class (e.g. `prohibited_line_start`)
        class: &'static str,
        /// Underlying regex compilation error
        #[source]
        source: regex::Error,
    },

    /// A character class was left empty
    #[error("character class '{0}' must not be empty")]
    EmptyClass(String),

    /// The TOML document could not be parsed
    #[error("failed to parse rule set: {0}")]
    Parse(#[from] toml::de::Error),

    /// The rule file could not be read
    #[error("failed to read rule set: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for rule configuration
pub type Result<T> = std::result::Result<T, RulesError>;
