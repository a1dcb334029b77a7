//! Word and char splitting over an abstract content tree
//!
//! This crate applies the primitives of `wakachi-core` to a [`ContentTree`]:
//! it protects atomic runs, splits text into words and chars, fuses units
//! that would break kinsoku line-break rules, and rewrites the tree into
//! decorated [`WordNode`]s and [`CharNode`]s. Every transform can be reverted
//! once.
//!
//! # Example
//!
//! ```rust
//! use wakachi_engine::{Container, ContentTree, SplitterConfig, TextSplitter};
//!
//! let mut tree = ContentTree::new(Container::new().with_lang("ja").child("「はい」"));
//! let splitter = TextSplitter::with_config(SplitterConfig::default());
//! let mut split = splitter.transform(&mut tree);
//!
//! let words: Vec<&str> = split.words().iter().map(|w| w.text.as_str()).collect();
//! assert_eq!(words, vec!["「は", "い」"]);
//!
//! assert!(split.revert(&mut tree));
//! assert_eq!(tree.text_content(), "「はい」");
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
mod pipeline;
pub mod snapshot;
pub mod splitter;
pub mod tree;

// Re-export key types
pub use config::{ConfigBuilder, SplitterConfig};
pub use error::{EngineError, Result};
pub use snapshot::Snapshot;
pub use splitter::{transform, Split, SplitOutput, TextSplitter};
pub use tree::{CharNode, Container, ContentTree, Node, SegmentCounts, WordNode};

// Re-export from core for convenience
pub use wakachi_core::{KinsokuRules, LanguageTag, LineBreakRules, Segment, SegmentKind, Segmenter};
