//! Content tree
//!
//! An ordered, rooted tree of text runs and containers. Embedders build the
//! input tree from their own document model; the splitter rewrites the root's
//! children into [`WordNode`]s holding [`CharNode`]s.

/// A node of the content tree
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", content = "value", rename_all = "lowercase"))]
pub enum Node {
    /// Plain text
    Text(String),
    /// An element-like container
    Container(Container),
    /// A protected run that must become exactly one word
    Atomic(String),
    /// A word produced by the splitter
    Word(WordNode),
    /// A char outside any word (only seen in hand-built trees)
    Char(CharNode),
}

impl Node {
    /// Text node shorthand
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    /// Visible text of this node and its descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) | Node::Atomic(text) => out.push_str(text),
            Node::Container(container) => container.collect_text(out),
            Node::Word(word) => out.push_str(&word.visible_text()),
            Node::Char(ch) => out.push_str(&ch.text),
        }
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<Container> for Node {
    fn from(container: Container) -> Self {
        Node::Container(container)
    }
}

/// An element-like node owning ordered children
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Container {
    /// Opaque embedder label (e.g. `"em"`), carried through unchanged
    pub label: Option<String>,
    /// Explicit language tag
    pub lang: Option<String>,
    /// Hidden from assistive technology, inherited by descendants
    ///
    /// Words inside an inert subtree are still split and counted, but get no
    /// accessible duplicate (`alt` stays `None`).
    pub inert: bool,
    /// Ordered children
    pub children: Vec<Node>,
}

impl Container {
    /// Empty container
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty container with a label
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }

    /// Set the language tag
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    /// Mark the subtree inert
    pub fn inert(mut self) -> Self {
        self.inert = true;
        self
    }

    /// Append a child
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Visible text of all descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            child.collect_text(out);
        }
    }

    /// Detach the children, leaving an empty shell with the same attributes
    pub(crate) fn take_children(&mut self) -> Vec<Node> {
        std::mem::take(&mut self.children)
    }
}

/// A word produced by the splitter
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WordNode {
    /// 0-based position among all words
    pub index: u32,
    /// Cached word text
    pub text: String,
    /// Starts with U+0020
    pub whitespace: bool,
    /// Laid out as a non-wrapping inline unit
    pub nowrap: bool,
    /// Open to machine translation; always false on split words
    pub translatable: bool,
    /// Visually hidden accessible duplicate of the text
    pub alt: Option<String>,
    /// Chars of this word, in order
    pub chars: Vec<CharNode>,
}

impl WordNode {
    /// Visible text: the chars when present, the cached text otherwise
    pub fn visible_text(&self) -> String {
        if self.chars.is_empty() {
            self.text.clone()
        } else {
            self.chars.iter().map(|ch| ch.text.as_str()).collect()
        }
    }
}

/// A grapheme cluster (or merged cluster run) inside a word
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharNode {
    /// 0-based position among all chars
    pub index: u32,
    /// Char text
    pub text: String,
    /// Starts with U+0020
    pub whitespace: bool,
    /// Laid out as a non-wrapping inline unit
    pub nowrap: bool,
    /// Excluded from the accessibility tree
    pub presentational: bool,
}

/// Published word and char totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmentCounts {
    /// Number of words
    pub words: u32,
    /// Number of chars
    pub chars: u32,
}

/// Root of a content tree plus document-level context
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContentTree {
    /// Root container; its children are what gets split
    pub root: Container,
    /// Document-level language, consulted after the root's own tag
    pub document_lang: Option<String>,
    /// Totals published by the last transform, `None` when not split
    pub counts: Option<SegmentCounts>,
}

impl ContentTree {
    /// Tree over `root`
    pub fn new(root: Container) -> Self {
        Self {
            root,
            document_lang: None,
            counts: None,
        }
    }

    /// Set the document-level language
    pub fn with_document_lang(mut self, lang: impl Into<String>) -> Self {
        self.document_lang = Some(lang.into());
        self
    }

    /// Visible text of the whole tree
    pub fn text_content(&self) -> String {
        self.root.text_content()
    }

    /// Whether a transform has been applied and not reverted
    pub fn is_split(&self) -> bool {
        self.counts.is_some()
    }

    /// Words of the rewritten tree, in document order
    pub fn words(&self) -> Vec<&WordNode> {
        let mut words = Vec::new();
        collect_words(&self.root.children, &mut words);
        words
    }
}

fn collect_words<'a>(nodes: &'a [Node], out: &mut Vec<&'a WordNode>) {
    for node in nodes {
        match node {
            Node::Word(word) => out.push(word),
            Node::Container(container) => collect_words(&container.children, out),
            Node::Text(_) | Node::Atomic(_) | Node::Char(_) => {}
        }
    }
}
