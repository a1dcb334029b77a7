//! Embedded rule sets
//!
//! The default rule set ships inside the binary and is compiled once per
//! process.

use std::sync::{Arc, OnceLock};

use tracing::debug;

use super::KinsokuRules;

/// TOML source of the default kinsoku rule set
pub const DEFAULT_RULES_TOML: &str = include_str!("../../configs/rules/kinsoku.toml");

static DEFAULT: OnceLock<Arc<KinsokuRules>> = OnceLock::new();

/// Shared instance of the embedded default rule set
pub fn default_rules() -> Arc<KinsokuRules> {
    DEFAULT
        .get_or_init(|| {
            let rules = KinsokuRules::from_toml_str(DEFAULT_RULES_TOML)
                .expect("embedded kinsoku rule set should always compile");
            debug!(name = rules.name(), "compiled embedded rule set");
            Arc::new(rules)
        })
        .clone()
}
