//! Engine error types
//!
//! Splitting and reverting never fail; errors only arise while building a
//! splitter from configuration.

use thiserror::Error;
use wakachi_core::RulesError;

/// Errors raised while configuring a [`crate::TextSplitter`]
#[derive(Error, Debug)]
pub enum EngineError {
    /// The line-break rule set could not be loaded
    #[error("rule set error: {0}")]
    Rules(#[from] RulesError),

    /// Invalid configuration value
    #[error("invalid configuration: {0}")]
    Configuration(String),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
