//! Word and char passes

use wakachi_core::{normalize_whitespace, Granularity};

use super::{CharEntry, Draft, Pipeline, Scope, WordEntry};
use crate::tree::Node;

impl Pipeline<'_> {
    /// Turn protected nodes into a draft tree of word ids
    ///
    /// Ordinary text is normalized and segmented; atomic runs become exactly
    /// one word each.
    pub(super) fn split_words(&mut self, nodes: Vec<Node>, scope: &Scope) -> Vec<Draft> {
        let mut drafts = Vec::with_capacity(nodes.len());

        for node in nodes {
            match node {
                Node::Text(text) => self.segment_text(&text, scope, &mut drafts),
                Node::Word(word) => self.segment_text(&word.visible_text(), scope, &mut drafts),
                Node::Char(ch) => self.segment_text(&ch.text, scope, &mut drafts),
                Node::Atomic(run) => {
                    let text = normalize_whitespace(&run);
                    if !text.is_empty() {
                        drafts.push(Draft::Word(self.push_word(text.into_owned(), scope)));
                    }
                }
                Node::Container(mut container) => {
                    let children = container.take_children();
                    let inner = self.enter(scope, &container);
                    drafts.push(Draft::Container {
                        children: self.split_words(children, &inner),
                        shell: container,
                    });
                }
            }
        }

        drafts
    }

    fn segment_text(&mut self, text: &str, scope: &Scope, drafts: &mut Vec<Draft>) {
        let granularity = if self.config.word_segmenter {
            Granularity::Word
        } else {
            Granularity::Grapheme
        };

        let normalized = normalize_whitespace(text);
        for token in self.segmenter.segment(&normalized, &scope.language, granularity) {
            drafts.push(Draft::Word(self.push_word(token.to_string(), scope)));
        }
    }

    fn push_word(&mut self, text: String, scope: &Scope) -> usize {
        let id = self.words.len();
        self.words.push(Some(WordEntry {
            text,
            language: scope.language.clone(),
            inert: scope.inert,
            chars: Vec::new(),
        }));
        self.word_order.push(id);
        id
    }

    /// Split every live word into grapheme clusters
    ///
    /// Word texts are already normalized, so the chars of a word always
    /// concatenate back to its text.
    pub(super) fn split_chars(&mut self) {
        for position in 0..self.word_order.len() {
            let word_id = self.word_order[position];
            let Some(word) = self.words[word_id].as_ref() else {
                continue;
            };

            let language = word.language.clone();
            let tokens: Vec<String> = self
                .segmenter
                .segment(&word.text, &language, Granularity::Grapheme)
                .into_iter()
                .map(str::to_string)
                .collect();

            let mut ids = Vec::with_capacity(tokens.len());
            for text in tokens {
                let id = self.chars.len();
                self.chars.push(Some(CharEntry {
                    text,
                    language: language.clone(),
                }));
                self.char_order.push(id);
                ids.push(id);
            }

            if let Some(word) = self.words[word_id].as_mut() {
                word.chars = ids;
            }
        }
    }
}
