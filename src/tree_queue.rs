//! Breadth-first traversal backed by a FIFO queue.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use tracing::instrument;

use crate::tree_traits::BinaryTree;

/// External level-order iterator over a borrowed tree.
///
/// Holds a queue of node references seeded with a single starting node
/// treated as the root of its own subtree, and yields every value at one
/// depth before any value of the next, left to right within a level.
///
/// The queue is a real FIFO, so each step is O(1) amortized. Exhaustion is
/// terminal: once `next` returns `None` it keeps returning `None`. The
/// iterator holds mutable traversal state and is meant for a single
/// consumer; it can be dropped part-way through and a new one constructed
/// from the root to start over.
pub struct LevelOrderIter<'a, T> {
    queue: VecDeque<&'a T>,
}

impl<'a, T: BinaryTree> LevelOrderIter<'a, T> {
    /// Seeds the queue with `root` alone.
    pub fn new(root: &'a T) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back(root);
        Self { queue }
    }
}

impl<'a, T: BinaryTree> Iterator for LevelOrderIter<'a, T> {
    type Item = &'a T::Value;

    #[instrument(level = "trace", skip(self))]
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        if let Some(left) = node.left() {
            self.queue.push_back(left);
        }
        if let Some(right) = node.right() {
            self.queue.push_back(right);
        }
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Everything queued will be yielded; descendants are unknown.
        (self.queue.len(), None)
    }
}

impl<T: BinaryTree> FusedIterator for LevelOrderIter<'_, T> {}
