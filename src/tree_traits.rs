//! Trait seams for tree types: the read-only accessors the traversal code
//! is generic over, and conversion into a displayable [`termtree::Tree`].

use std::fmt;

use termtree::Tree;
use tracing::instrument;

use crate::tree::TreeNode;

/// Read-only view of a binary tree node.
///
/// [`LevelOrderIter`](crate::tree_queue::LevelOrderIter) is generic over
/// this trait, so alternative node representations can reuse the traversal
/// unchanged. Implementors hand out plain references; the trait implies no
/// ownership model of its own.
pub trait BinaryTree {
    type Value;

    fn value(&self) -> &Self::Value;
    fn left(&self) -> Option<&Self>;
    fn right(&self) -> Option<&Self>;
}

pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl<V: fmt::Display> TreeNodeConvert for TreeNode<V> {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        let root = self.value().to_string();

        // Recursively convert the children, present slots only; termtree
        // draws the connecting glyphs.
        let leaves: Vec<_> = [self.left.as_deref(), self.right.as_deref()]
            .into_iter()
            .flatten()
            .map(|child| child.to_tree_string())
            .collect();

        Tree::new(root).with_leaves(leaves)
    }
}
