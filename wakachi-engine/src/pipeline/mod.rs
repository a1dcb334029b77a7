//! Split pipeline
//!
//! One transform runs these phases over a detached copy of the root's
//! children:
//!
//! 1. atomic-run protection (`protect`)
//! 2. word pass (`split`)
//! 3. word-level line-break merge, unless merging at char level (`linebreak`)
//! 4. char pass (`split`)
//! 5. char-level line-break merge and word resync (`linebreak`)
//! 6. decoration and tree assembly (`assembler`)
//!
//! Words and chars live in arenas indexed by id; the draft tree only holds
//! word ids, so merges never have to touch tree structure. Merged-away ids are
//! tombstoned and skipped when the final tree is assembled.

mod assembler;
mod linebreak;
mod protect;
mod split;

use tracing::debug;
use wakachi_core::{LanguageTag, LineBreakRules, Segment, Segmenter};

use crate::config::SplitterConfig;
use crate::tree::{Container, ContentTree, Node};

/// A word in the arena
#[derive(Debug, Clone)]
struct WordEntry {
    text: String,
    language: LanguageTag,
    inert: bool,
    chars: Vec<usize>,
}

/// A char in the arena
#[derive(Debug, Clone)]
struct CharEntry {
    text: String,
    language: LanguageTag,
}

/// Tree skeleton between the word pass and assembly
#[derive(Debug)]
enum Draft {
    Container {
        shell: Container,
        children: Vec<Draft>,
    },
    Word(usize),
}

/// Language and inertness inherited from ancestors
#[derive(Debug, Clone)]
struct Scope {
    language: LanguageTag,
    inert: bool,
}

/// Result of one pipeline run
#[derive(Debug)]
pub(crate) struct Assembled {
    pub children: Vec<Node>,
    pub words: Vec<Segment>,
    pub chars: Vec<Segment>,
}

/// State of one transform
pub(crate) struct Pipeline<'a> {
    config: &'a SplitterConfig,
    rules: &'a dyn LineBreakRules,
    segmenter: &'a dyn Segmenter,
    document_lang: Option<&'a str>,
    words: Vec<Option<WordEntry>>,
    chars: Vec<Option<CharEntry>>,
    word_order: Vec<usize>,
    char_order: Vec<usize>,
}

impl<'a> Pipeline<'a> {
    pub(crate) fn new(
        config: &'a SplitterConfig,
        rules: &'a dyn LineBreakRules,
        segmenter: &'a dyn Segmenter,
        document_lang: Option<&'a str>,
    ) -> Self {
        Self {
            config,
            rules,
            segmenter,
            document_lang,
            words: Vec::new(),
            chars: Vec::new(),
            word_order: Vec::new(),
            char_order: Vec::new(),
        }
    }

    /// Run every phase over a copy of `tree`'s children
    pub(crate) fn run(mut self, tree: &ContentTree) -> Assembled {
        let protected = protect::protect(tree.root.children.clone());

        let scope = self.root_scope(&tree.root);
        debug!(language = %scope.language, family = ?scope.language.language(), "root scope");
        let drafts = self.split_words(protected, &scope);
        debug!(words = self.word_order.len(), "word pass");

        if self.config.merges_words() {
            self.merge_words();
            debug!(words = self.word_order.len(), "word-level line-break merge");
        }

        self.split_chars();
        debug!(chars = self.char_order.len(), "char pass");

        if self.config.merges_chars() {
            self.merge_chars();
            self.resync_words();
            debug!(
                words = self.word_order.len(),
                chars = self.char_order.len(),
                "char-level line-break merge"
            );
        }

        self.assemble(drafts)
    }

    fn root_scope(&self, root: &Container) -> Scope {
        Scope {
            language: self.resolve_language(root.lang.as_deref()),
            inert: root.inert,
        }
    }

    fn enter(&self, parent: &Scope, container: &Container) -> Scope {
        let language = match container.lang.as_deref() {
            Some(lang) if !lang.trim().is_empty() => self.resolve_language(Some(lang)),
            _ => parent.language.clone(),
        };
        Scope {
            language,
            inert: parent.inert || container.inert,
        }
    }

    fn resolve_language(&self, own: Option<&str>) -> LanguageTag {
        let fallback = self.config.fallback_language.as_ref().map(LanguageTag::as_str);
        LanguageTag::resolve([own, self.document_lang, fallback])
    }
}
