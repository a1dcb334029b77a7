//! TOML schema for line-break rule sets

use serde::{Deserialize, Serialize};

use crate::error::{Result, RulesError};

/// Root rule-set configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleSetConfig {
    pub metadata: Metadata,
    pub prohibited_line_start: LineStartClasses,
    pub prohibited_line_end: CharClass,
    pub inseparable: CharClass,
}

/// Rule-set metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Classes that may not begin a line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineStartClasses {
    /// Characters the first grapheme may not start with
    pub leading: String,
    /// Characters the first grapheme may not contain at all
    #[serde(default)]
    pub anywhere: Option<String>,
}

/// A single character class body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharClass {
    pub chars: String,
}

impl RuleSetConfig {
    /// Parse a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: RuleSetConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<()> {
        let classes = [
            ("prohibited_line_start.leading", &self.prohibited_line_start.leading),
            ("prohibited_line_end.chars", &self.prohibited_line_end.chars),
            ("inseparable.chars", &self.inseparable.chars),
        ];

        for (name, body) in classes {
            if body.trim().is_empty() {
                return Err(RulesError::EmptyClass(name.to_string()));
            }
        }

        if let Some(anywhere) = &self.prohibited_line_start.anywhere {
            if anywhere.trim().is_empty() {
                return Err(RulesError::EmptyClass(
                    "prohibited_line_start.anywhere".to_string(),
                ));
            }
        }

        Ok(())
    }
}
