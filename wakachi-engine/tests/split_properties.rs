//! Property tests over whole transforms

use proptest::prelude::*;
use wakachi_core::normalize_whitespace;
use wakachi_engine::{Container, ContentTree, Node, SplitterConfig, TextSplitter, WordNode};

fn token() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "a", "don't", "e.g.", "3.14", " ", "  ", "\n", "(", ")", "「", "」", "“", "”", "$", "。",
        "、", "ー", "っ", "あ", "漢", "カ", "한", "\u{2014}", "\u{2026}", "\u{00A0}", "!", "-", "é",
        "\u{FF70}", "Mario",
    ])
    .prop_map(str::to_string)
}

fn text() -> impl Strategy<Value = String> {
    prop::collection::vec(token(), 0..30).prop_map(|tokens| tokens.concat())
}

fn config() -> impl Strategy<Value = SplitterConfig> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(concat_char, rules, words)| {
        SplitterConfig::builder()
            .concat_char(concat_char)
            .line_breaking_rules(rules)
            .word_segmenter(words)
            .build()
            .unwrap()
    })
}

fn collect_words<'a>(nodes: &'a [Node], out: &mut Vec<&'a WordNode>) {
    for node in nodes {
        match node {
            Node::Word(word) => out.push(word),
            Node::Container(container) => collect_words(&container.children, out),
            _ => {}
        }
    }
}

proptest! {
    #[test]
    fn words_cover_normalized_text(input in text(), config in config()) {
        let mut tree = ContentTree::new(Container::new().child(input.as_str()));
        let split = TextSplitter::with_config(config).transform(&mut tree);

        let words: String = split.words().iter().map(|w| w.text.as_str()).collect();
        let chars: String = split.chars().iter().map(|c| c.text.as_str()).collect();
        let expected = normalize_whitespace(&input);

        prop_assert_eq!(&words, expected.as_ref());
        prop_assert_eq!(&chars, expected.as_ref());
        prop_assert_eq!(tree.text_content(), expected.into_owned());
    }

    #[test]
    fn chars_of_each_word_spell_the_word(input in text(), config in config()) {
        let mut tree = ContentTree::new(
            Container::new()
                .child(input.as_str())
                .child(Container::labeled("em").child(input.as_str())),
        );
        let split = TextSplitter::with_config(config).transform(&mut tree);

        let mut words = Vec::new();
        collect_words(&tree.root.children, &mut words);
        prop_assert_eq!(words.len(), split.words().len());

        let mut next_char = 0;
        for (position, word) in words.iter().enumerate() {
            prop_assert_eq!(word.index as usize, position);
            prop_assert!(!word.chars.is_empty());

            let spelled: String = word.chars.iter().map(|c| c.text.as_str()).collect();
            prop_assert_eq!(&spelled, &word.text);

            for ch in &word.chars {
                prop_assert_eq!(ch.index as usize, next_char);
                next_char += 1;
            }
        }
        prop_assert_eq!(next_char, split.chars().len());
    }

    #[test]
    fn revert_restores_input_once(input in text(), config in config()) {
        let original = ContentTree::new(
            Container::new()
                .with_lang("ja")
                .child(input.as_str())
                .child(Container::new().inert().child("x")),
        );
        let mut tree = original.clone();
        let mut split = TextSplitter::with_config(config).transform(&mut tree);

        prop_assert!(split.revert(&mut tree));
        prop_assert_eq!(&tree, &original);
        prop_assert!(!split.revert(&mut tree));
        prop_assert_eq!(&tree, &original);
    }

    #[test]
    fn ordinals_are_contiguous(input in text(), config in config()) {
        let mut tree = ContentTree::new(Container::new().child(input.as_str()));
        let split = TextSplitter::with_config(config).transform(&mut tree);

        for (position, word) in split.words().iter().enumerate() {
            prop_assert_eq!(word.ordinal as usize, position);
            prop_assert!(!word.text.is_empty());
        }
        for (position, ch) in split.chars().iter().enumerate() {
            prop_assert_eq!(ch.ordinal as usize, position);
            prop_assert!(!ch.text.is_empty());
        }
    }
}
