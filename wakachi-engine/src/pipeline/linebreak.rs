//! Line-break merge over the word or char arena

use tracing::trace;
use wakachi_core::{merge::merge_with, MergeUnit};

use super::Pipeline;

impl Pipeline<'_> {
    /// Merge words so no word boundary breaks a kinsoku rule
    pub(super) fn merge_words(&mut self) {
        let units = self
            .word_order
            .iter()
            .filter_map(|&id| {
                self.words[id]
                    .as_ref()
                    .map(|word| MergeUnit::new(id, word.text.clone()).with_language(word.language.clone()))
            })
            .collect();

        let merged = merge_with(units, self.rules, self.segmenter);
        let mut alive = vec![false; self.words.len()];
        let mut order = Vec::with_capacity(merged.len());

        for unit in merged {
            let (id, text) = unit.into_parts();
            if let Some(word) = self.words[id].as_mut() {
                word.text = text;
            }
            alive[id] = true;
            order.push(id);
        }

        tombstone(&mut self.words, &alive);
        self.word_order = order;
    }

    /// Merge chars across word boundaries
    ///
    /// A surviving char stays in the word that owned it, so a merge can move
    /// text from one word into another. [`Pipeline::resync_words`] restores
    /// the word texts afterwards.
    pub(super) fn merge_chars(&mut self) {
        let units = self
            .char_order
            .iter()
            .filter_map(|&id| {
                self.chars[id]
                    .as_ref()
                    .map(|ch| MergeUnit::new(id, ch.text.clone()).with_language(ch.language.clone()))
            })
            .collect();

        let merged = merge_with(units, self.rules, self.segmenter);
        let mut alive = vec![false; self.chars.len()];
        let mut order = Vec::with_capacity(merged.len());

        for unit in merged {
            let (id, text) = unit.into_parts();
            if let Some(ch) = self.chars[id].as_mut() {
                ch.text = text;
            }
            alive[id] = true;
            order.push(id);
        }

        tombstone(&mut self.chars, &alive);
        self.char_order = order;
    }

    /// Recompute word texts from their surviving chars; drop emptied words
    pub(super) fn resync_words(&mut self) {
        let chars = &self.chars;

        for (id, slot) in self.words.iter_mut().enumerate() {
            let Some(word) = slot.as_mut() else {
                continue;
            };

            word.chars.retain(|&ch| chars[ch].is_some());
            if word.chars.is_empty() {
                trace!(word = id, "word emptied by char merge");
                *slot = None;
                continue;
            }

            word.text = word
                .chars
                .iter()
                .filter_map(|&ch| chars[ch].as_ref())
                .map(|ch| ch.text.as_str())
                .collect();
        }

        let words = &self.words;
        self.word_order.retain(|&id| words[id].is_some());
    }
}

fn tombstone<T>(arena: &mut [Option<T>], alive: &[bool]) {
    for (slot, &keep) in arena.iter_mut().zip(alive) {
        if !keep {
            *slot = None;
        }
    }
}
