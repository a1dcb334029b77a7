//! Public splitting API

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, debug_span};
use wakachi_core::{KinsokuRules, LineBreakRules, Segment, Segmenter, UnicodeSegmenter};

use crate::config::SplitterConfig;
use crate::error::Result;
use crate::pipeline::Pipeline;
use crate::snapshot::Snapshot;
use crate::tree::{ContentTree, SegmentCounts};

/// Splits content trees into words and chars
///
/// A splitter is immutable and can be shared between threads; each
/// [`TextSplitter::transform`] call owns its own working state.
#[derive(Clone)]
pub struct TextSplitter {
    config: SplitterConfig,
    rules: Arc<dyn LineBreakRules>,
    segmenter: Arc<dyn Segmenter>,
}

impl TextSplitter {
    /// Splitter with the default configuration and the built-in kinsoku rules
    pub fn new() -> Self {
        Self::with_config(SplitterConfig::default())
    }

    /// Splitter with a custom configuration and the built-in kinsoku rules
    pub fn with_config(config: SplitterConfig) -> Self {
        Self {
            config,
            rules: KinsokuRules::default_rules(),
            segmenter: Arc::new(UnicodeSegmenter),
        }
    }

    /// Splitter with a rule set loaded from a TOML file
    pub fn from_rules_file<P: AsRef<Path>>(config: SplitterConfig, path: P) -> Result<Self> {
        let rules = KinsokuRules::from_path(path)?;
        Ok(Self::with_config(config).with_rules(Arc::new(rules)))
    }

    /// Replace the line-break rules
    pub fn with_rules(mut self, rules: Arc<dyn LineBreakRules>) -> Self {
        self.rules = rules;
        self
    }

    /// Replace the segmenter
    pub fn with_segmenter(mut self, segmenter: Arc<dyn Segmenter>) -> Self {
        self.segmenter = segmenter;
        self
    }

    /// Active configuration
    pub fn config(&self) -> &SplitterConfig {
        &self.config
    }

    /// Rewrite `tree` in place and return the split handle
    ///
    /// The root's children are replaced by word nodes (inside copies of the
    /// original containers) in a single assignment, and the word and char
    /// totals are published on the tree. Words or chars already present in
    /// the input are flattened back to text first.
    pub fn transform(&self, tree: &mut ContentTree) -> Split {
        let span = debug_span!("transform", document_lang = ?tree.document_lang);
        let _guard = span.enter();

        let snapshot = Snapshot::capture(tree);
        let assembled = Pipeline::new(
            &self.config,
            self.rules.as_ref(),
            self.segmenter.as_ref(),
            tree.document_lang.as_deref(),
        )
        .run(tree);

        tree.root.children = assembled.children;
        tree.counts = Some(SegmentCounts {
            words: assembled.words.len() as u32,
            chars: assembled.chars.len() as u32,
        });
        debug!(
            words = assembled.words.len(),
            chars = assembled.chars.len(),
            "tree split"
        );

        Split {
            snapshot,
            words: assembled.words,
            chars: assembled.chars,
        }
    }
}

impl Default for TextSplitter {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TextSplitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextSplitter")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Handle to one applied transform
#[derive(Debug, Clone)]
pub struct Split {
    snapshot: Snapshot,
    words: Vec<Segment>,
    chars: Vec<Segment>,
}

impl Split {
    /// Final words in document order
    pub fn words(&self) -> &[Segment] {
        &self.words
    }

    /// Final chars in document order
    pub fn chars(&self) -> &[Segment] {
        &self.chars
    }

    /// Word and char totals
    pub fn counts(&self) -> SegmentCounts {
        SegmentCounts {
            words: self.words.len() as u32,
            chars: self.chars.len() as u32,
        }
    }

    /// Copy of the result as a plain value
    pub fn output(&self) -> SplitOutput {
        SplitOutput {
            word_segments: self.words.clone(),
            char_segments: self.chars.clone(),
            word_count: self.words.len(),
            char_count: self.chars.len(),
        }
    }

    /// Consume the handle into its result
    pub fn into_output(self) -> SplitOutput {
        let word_count = self.words.len();
        let char_count = self.chars.len();
        SplitOutput {
            word_segments: self.words,
            char_segments: self.chars,
            word_count,
            char_count,
        }
    }

    /// Restore the tree's pre-transform content
    ///
    /// Only the first call has an effect; it returns `true` and empties the
    /// word and char lists. Later calls return `false` and leave the tree
    /// alone.
    pub fn revert(&mut self, tree: &mut ContentTree) -> bool {
        if !self.snapshot.revert(tree) {
            return false;
        }
        self.words.clear();
        self.chars.clear();
        true
    }

    /// Whether [`Split::revert`] has run
    pub fn is_reverted(&self) -> bool {
        self.snapshot.is_reverted()
    }
}

/// Serializable result of a transform
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SplitOutput {
    /// Words in document order
    pub word_segments: Vec<Segment>,
    /// Chars in document order
    pub char_segments: Vec<Segment>,
    /// Number of words
    pub word_count: usize,
    /// Number of chars
    pub char_count: usize,
}

/// Split `tree` with `config` and the built-in rules
pub fn transform(tree: &mut ContentTree, config: SplitterConfig) -> Split {
    TextSplitter::with_config(config).transform(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{Container, Node};

    #[test]
    fn test_transform_publishes_counts() {
        let mut tree = ContentTree::new(Container::new().child("ab c"));
        let split = TextSplitter::new().transform(&mut tree);

        assert_eq!(split.counts(), SegmentCounts { words: 3, chars: 4 });
        assert_eq!(tree.counts, Some(split.counts()));
        assert!(tree.is_split());
        assert!(tree.root.children.iter().all(|node| matches!(node, Node::Word(_))));
    }

    #[test]
    fn test_revert_restores_original() {
        let original = ContentTree::new(
            Container::new()
                .with_lang("ja")
                .child("「東京」")
                .child(Container::labeled("em").child("へ")),
        );
        let mut tree = original.clone();
        let mut split = TextSplitter::new().transform(&mut tree);
        assert_ne!(tree, original);

        assert!(split.revert(&mut tree));
        assert_eq!(tree, original);
        assert!(split.words().is_empty());
        assert!(split.is_reverted());
        assert!(!split.revert(&mut tree));
    }

    #[test]
    fn test_output_matches_lists() {
        let mut tree = ContentTree::new(Container::new().child("x y"));
        let split = transform(&mut tree, SplitterConfig::default());
        let output = split.output();

        assert_eq!(output.word_count, 3);
        assert_eq!(output.char_count, 3);
        assert_eq!(output.word_segments, split.words());
        assert_eq!(split.clone().into_output(), output);
    }

    #[test]
    fn test_missing_rules_file_is_an_error() {
        let result = TextSplitter::from_rules_file(SplitterConfig::default(), "/nonexistent/rules.toml");
        assert!(result.is_err());
    }
}
