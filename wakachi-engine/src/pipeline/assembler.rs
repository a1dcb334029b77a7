//! Decoration and tree assembly

use wakachi_core::segment::starts_with_space;
use wakachi_core::{Segment, SegmentKind};

use super::{Assembled, Draft, Pipeline};
use crate::tree::{CharNode, Node, WordNode};

impl Pipeline<'_> {
    /// Build the final children and segment lists from the surviving units
    pub(super) fn assemble(self, drafts: Vec<Draft>) -> Assembled {
        let mut word_ordinals = vec![None; self.words.len()];
        let mut words = Vec::with_capacity(self.word_order.len());
        for (ordinal, &id) in self.word_order.iter().enumerate() {
            if let Some(word) = &self.words[id] {
                let ordinal = ordinal as u32;
                word_ordinals[id] = Some(ordinal);
                words.push(Segment::new(SegmentKind::Word, word.text.clone(), ordinal));
            }
        }

        let mut char_ordinals = vec![None; self.chars.len()];
        let mut chars = Vec::with_capacity(self.char_order.len());
        for (ordinal, &id) in self.char_order.iter().enumerate() {
            if let Some(ch) = &self.chars[id] {
                let ordinal = ordinal as u32;
                char_ordinals[id] = Some(ordinal);
                chars.push(Segment::new(SegmentKind::Char, ch.text.clone(), ordinal));
            }
        }

        let builder = NodeBuilder {
            pipeline: &self,
            word_ordinals: &word_ordinals,
            char_ordinals: &char_ordinals,
        };
        let children = builder.build(drafts);

        Assembled {
            children,
            words,
            chars,
        }
    }
}

struct NodeBuilder<'p, 'a> {
    pipeline: &'p Pipeline<'a>,
    word_ordinals: &'p [Option<u32>],
    char_ordinals: &'p [Option<u32>],
}

impl NodeBuilder<'_, '_> {
    fn build(&self, drafts: Vec<Draft>) -> Vec<Node> {
        let mut nodes = Vec::with_capacity(drafts.len());
        for draft in drafts {
            match draft {
                Draft::Container {
                    mut shell,
                    children,
                } => {
                    shell.children = self.build(children);
                    nodes.push(Node::Container(shell));
                }
                Draft::Word(id) => nodes.extend(self.word(id).map(Node::Word)),
            }
        }
        nodes
    }

    fn word(&self, id: usize) -> Option<WordNode> {
        let entry = self.pipeline.words[id].as_ref()?;
        let index = self.word_ordinals[id]?;
        let whitespace = starts_with_space(&entry.text);

        let chars = entry
            .chars
            .iter()
            .filter_map(|&ch| {
                let text = self.pipeline.chars[ch].as_ref()?.text.clone();
                let index = self.char_ordinals[ch]?;
                let whitespace = starts_with_space(&text);
                Some(CharNode {
                    index,
                    text,
                    whitespace,
                    nowrap: !whitespace,
                    presentational: true,
                })
            })
            .collect();

        Some(WordNode {
            index,
            text: entry.text.clone(),
            whitespace,
            nowrap: !whitespace,
            translatable: false,
            alt: (!whitespace && !entry.inert).then(|| entry.text.clone()),
            chars,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::config::SplitterConfig;
    use crate::pipeline::{Assembled, Pipeline};
    use crate::tree::{Container, ContentTree, Node};
    use wakachi_core::{KinsokuRules, UnicodeSegmenter};

    fn run(tree: &ContentTree, config: &SplitterConfig) -> Assembled {
        let rules = KinsokuRules::default_rules();
        Pipeline::new(config, rules.as_ref(), &UnicodeSegmenter, None).run(tree)
    }

    #[test]
    fn test_words_are_decorated() {
        let tree = ContentTree::new(Container::new().child("hi there"));
        let assembled = run(&tree, &SplitterConfig::default());

        let words: Vec<_> = assembled
            .children
            .iter()
            .map(|node| match node {
                Node::Word(word) => word.clone(),
                other => panic!("expected a word, got {other:?}"),
            })
            .collect();

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text, "hi");
        assert_eq!(words[0].alt.as_deref(), Some("hi"));
        assert!(words[0].nowrap);
        assert!(!words[0].translatable);

        assert!(words[1].whitespace);
        assert!(!words[1].nowrap);
        assert!(words[1].alt.is_none());

        let indices: Vec<u32> = words.iter().map(|word| word.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);

        let char_indices: Vec<u32> = words[2].chars.iter().map(|ch| ch.index).collect();
        assert_eq!(char_indices, vec![3, 4, 5, 6, 7]);
        assert!(words[2].chars.iter().all(|ch| ch.presentational && ch.nowrap));
    }

    #[test]
    fn test_containers_keep_their_shell() {
        let tree = ContentTree::new(
            Container::new()
                .child("a")
                .child(Container::labeled("em").with_lang("ja").child("b"))
                .child(Container::labeled("empty")),
        );
        let assembled = run(&tree, &SplitterConfig::default());

        assert_eq!(assembled.children.len(), 3);
        match &assembled.children[1] {
            Node::Container(em) => {
                assert_eq!(em.label.as_deref(), Some("em"));
                assert_eq!(em.lang.as_deref(), Some("ja"));
                assert!(matches!(&em.children[..], [Node::Word(word)] if word.text == "b" && word.index == 1));
            }
            other => panic!("expected a container, got {other:?}"),
        }
        assert!(matches!(&assembled.children[2], Node::Container(empty) if empty.children.is_empty()));
    }

    #[test]
    fn test_inert_words_have_no_alt() {
        let tree = ContentTree::new(Container::new().child(Container::new().inert().child("x")));
        let assembled = run(&tree, &SplitterConfig::default());

        let Node::Container(inner) = &assembled.children[0] else {
            panic!("expected a container");
        };
        let Node::Word(word) = &inner.children[0] else {
            panic!("expected a word");
        };
        assert!(word.alt.is_none());
        assert!(word.nowrap);
    }

    #[test]
    fn test_merged_away_words_are_skipped() {
        let tree = ContentTree::new(
            Container::new()
                .child("「")
                .child(Container::labeled("b").child("x")),
        );
        let assembled = run(&tree, &SplitterConfig::default());

        // The bracket is carried into the word inside the container.
        let Node::Container(bold) = &assembled.children[0] else {
            panic!("expected the container first");
        };
        assert_eq!(assembled.children.len(), 1);
        assert!(matches!(&bold.children[..], [Node::Word(word)] if word.text == "「x" && word.index == 0));
        assert_eq!(assembled.chars.len(), 2);
    }
}
