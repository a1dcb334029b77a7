//! Pre-transform snapshot and one-shot revert

use tracing::debug;

use crate::tree::{Container, ContentTree};

/// Verbatim copy of a tree's root taken before any pipeline phase runs
#[derive(Debug, Clone)]
pub struct Snapshot {
    root: Container,
    reverted: bool,
}

impl Snapshot {
    /// Capture the current content of `tree`
    pub fn capture(tree: &ContentTree) -> Self {
        Self {
            root: tree.root.clone(),
            reverted: false,
        }
    }

    /// Restore the captured content and clear published counts
    ///
    /// Returns `true` when the tree was restored. Any later call is a no-op
    /// returning `false`.
    pub fn revert(&mut self, tree: &mut ContentTree) -> bool {
        if self.reverted {
            debug!("revert already applied, ignoring");
            return false;
        }

        tree.root = self.root.clone();
        tree.counts = None;
        self.reverted = true;
        true
    }

    /// Whether [`Snapshot::revert`] has already run
    pub fn is_reverted(&self) -> bool {
        self.reverted
    }

    /// Captured root
    pub fn root(&self) -> &Container {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::SegmentCounts;

    #[test]
    fn test_revert_is_one_shot() {
        let mut tree = ContentTree::new(Container::new().child("original"));
        let mut snapshot = Snapshot::capture(&tree);

        tree.root = Container::new().child("changed");
        tree.counts = Some(SegmentCounts { words: 1, chars: 7 });

        assert!(snapshot.revert(&mut tree));
        assert_eq!(tree.text_content(), "original");
        assert!(tree.counts.is_none());
        assert!(snapshot.is_reverted());

        tree.root = Container::new().child("edited after revert");
        assert!(!snapshot.revert(&mut tree));
        assert_eq!(tree.text_content(), "edited after revert");
    }
}
