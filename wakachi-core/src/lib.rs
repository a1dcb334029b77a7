//! Text segmentation primitives and line-break merge rules
//!
//! This crate contains the DOM-free half of wakachi: everything that works on
//! plain strings and ordered unit lists.
//!
//! # Architecture
//!
//! - **Atomic runs** ([`protector`]): carve Latin-like words with embedded
//!   punctuation (`don't`, `e.g.`, `3.14`, URLs) out of a text run so that the
//!   generic segmenter never splits them.
//! - **Segmentation** ([`segmenter`]): whitespace normalization plus the
//!   [`Segmenter`] trait and its UAX #29 implementation.
//! - **Rules** ([`rules`]): the three kinsoku character classes behind the
//!   [`LineBreakRules`] trait, configurable through TOML.
//! - **Merge** ([`merge`]): the three-pass merge that fuses units so no unit
//!   boundary would start or end a wrapped line with a prohibited character.
//!
//! # Example
//!
//! ```rust
//! use wakachi_core::merge::{merge_units, MergeUnit};
//! use wakachi_core::rules::KinsokuRules;
//!
//! let rules = KinsokuRules::default_rules();
//! let units = vec![MergeUnit::new(0, "「"), MergeUnit::new(1, "はい"), MergeUnit::new(2, "」")];
//! let merged = merge_units(units, rules.as_ref());
//!
//! let texts: Vec<&str> = merged.iter().map(|unit| unit.text()).collect();
//! assert_eq!(texts, vec!["「はい」"]);
//! ```

pub mod error;
pub mod language;
pub mod merge;
pub mod protector;
pub mod rules;
pub mod segment;
pub mod segmenter;

pub use error::{Result, RulesError};
pub use language::{Language, LanguageTag, DEFAULT_LANGUAGE};
pub use merge::{merge_units, MergeUnit};
pub use protector::{protect_atomic_runs, Piece};
pub use rules::{KinsokuRules, LineBreakRules, RuleSetConfig};
pub use segment::{Segment, SegmentKind};
pub use segmenter::{normalize_whitespace, Granularity, Segmenter, UnicodeSegmenter};
