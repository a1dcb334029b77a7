//! Atomic-run protection over the tree
//!
//! Rewrites every text run into ordinary text and atomic pieces. Each run is
//! whitespace-normalized as a whole before it is carved, so a whitespace
//! sequence spanning a piece boundary still collapses. Words and chars left
//! over from an earlier transform are flattened back into text first.

use wakachi_core::{normalize_whitespace, protect_atomic_runs, Piece};

use crate::tree::Node;

pub(super) fn protect(nodes: Vec<Node>) -> Vec<Node> {
    let mut protected = Vec::with_capacity(nodes.len());

    for node in nodes {
        match node {
            Node::Text(text) => push_pieces(&text, &mut protected),
            Node::Word(word) => push_pieces(&word.visible_text(), &mut protected),
            Node::Char(ch) => push_pieces(&ch.text, &mut protected),
            Node::Atomic(run) => protected.push(Node::Atomic(run)),
            Node::Container(mut container) => {
                let children = container.take_children();
                container.children = protect(children);
                protected.push(Node::Container(container));
            }
        }
    }

    protected
}

fn push_pieces(text: &str, out: &mut Vec<Node>) {
    let text = normalize_whitespace(text);
    out.extend(protect_atomic_runs(&text).into_iter().map(|piece| match piece {
        Piece::Text(text) => Node::Text(text.to_string()),
        Piece::Atomic(run) => Node::Atomic(run.to_string()),
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Container;

    #[test]
    fn test_text_runs_are_carved() {
        let nodes = protect(vec![Node::text("say don't!")]);
        assert_eq!(
            nodes,
            vec![
                Node::Atomic("say".to_string()),
                Node::text(" "),
                Node::Atomic("don't!".to_string()),
            ]
        );
    }

    #[test]
    fn test_nested_containers_keep_attributes() {
        let nodes = protect(vec![Node::Container(
            Container::labeled("em").with_lang("ja").child("東京 Tokyo"),
        )]);

        let Node::Container(container) = &nodes[0] else {
            panic!("expected container, got {:?}", nodes[0]);
        };
        assert_eq!(container.label.as_deref(), Some("em"));
        assert_eq!(container.lang.as_deref(), Some("ja"));
        assert_eq!(
            container.children,
            vec![Node::text("東京 "), Node::Atomic("Tokyo".to_string())]
        );
    }

    #[test]
    fn test_runs_are_normalized_before_carving() {
        // The no-break space is atomic, the following space is not
        let nodes = protect(vec![Node::text("a\u{00A0} b\n\tc")]);
        assert_eq!(
            nodes,
            vec![
                Node::Atomic("a".to_string()),
                Node::text(" "),
                Node::Atomic("bc".to_string()),
            ]
        );
    }

    #[test]
    fn test_cjk_only_text_is_untouched() {
        let nodes = protect(vec![Node::text("かな")]);
        assert_eq!(nodes, vec![Node::text("かな")]);
    }
}
