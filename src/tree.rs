//! Owning binary tree node and whole-subtree algorithms.
//!
//! A [`TreeNode`] owns its children exclusively through [`SubTree`] slots,
//! so every tree is finite and acyclic by construction and tears down
//! recursively when its root is dropped. All operations treat the receiving
//! node as the root of its own subtree; a node knows nothing about parents.

use std::collections::VecDeque;
use std::fmt;
use std::hash::{Hash, Hasher};

use tracing::instrument;

use crate::errors::{TreeError, TreeResult};
use crate::tree_queue::LevelOrderIter;
use crate::tree_traits::BinaryTree;

/// An optional, exclusively owned subtree.
pub type SubTree<V> = Option<Box<TreeNode<V>>>;

/// A node of a binary tree, owning its left and right subtrees.
///
/// The payload is fixed at construction and only readable afterwards; tree
/// shape is built incrementally by assigning into the public `left`/`right`
/// slots, or with the chaining [`with_left`](TreeNode::with_left)/
/// [`with_right`](TreeNode::with_right) helpers:
///
/// ```
/// use bintree::TreeNode;
///
/// let mut root = TreeNode::new(1);
/// root.left = Some(Box::new(TreeNode::new(2)));
/// root.right = Some(Box::new(TreeNode::new(3)));
///
/// assert_eq!(root.min_depth(), 1);
/// assert_eq!(root.max_depth(), 1);
/// assert!(root.contains(&3));
/// ```
#[derive(Debug, Clone)]
pub struct TreeNode<V> {
    /// Payload, immutable after construction
    value: V,
    /// Left child slot
    pub left: SubTree<V>,
    /// Right child slot
    pub right: SubTree<V>,
}

impl<V> TreeNode<V> {
    /// Creates a leaf node carrying `value`, both child slots empty.
    pub fn new(value: V) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Attaches `child` as the left subtree, replacing any previous one.
    pub fn with_left(mut self, child: TreeNode<V>) -> Self {
        self.left = Some(Box::new(child));
        self
    }

    /// Attaches `child` as the right subtree, replacing any previous one.
    pub fn with_right(mut self, child: TreeNode<V>) -> Self {
        self.right = Some(Box::new(child));
        self
    }

    /// Read access to the payload.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// True if both child slots are empty.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Breadth-first iterator over the values of this subtree.
    ///
    /// Visits all nodes at one depth before any node of the next, left to
    /// right within a level. The iterator is single-pass: once exhausted it
    /// stays exhausted, and a fresh one must be constructed to traverse
    /// again.
    #[instrument(level = "trace", skip(self))]
    pub fn level_order(&self) -> LevelOrderIter<'_, Self> {
        LevelOrderIter::new(self)
    }

    /// Shortest path length (edge count) from this node to a node without
    /// children.
    ///
    /// A node missing one child does not terminate the walk: traversal
    /// continues through whichever single child exists, and only a node
    /// with both children present branches and takes the smaller subtree
    /// depth. A solitary node has depth 0.
    #[instrument(level = "debug", skip(self))]
    pub fn min_depth(&self) -> usize {
        find_depth(self, usize::min)
    }

    /// Longest path length (edge count) from this node to a node without
    /// children, under the same traversal policy as
    /// [`min_depth`](TreeNode::min_depth).
    #[instrument(level = "debug", skip(self))]
    pub fn max_depth(&self) -> usize {
        find_depth(self, usize::max)
    }

    /// Builds a tree from a level-order description: values listed level by
    /// level, left to right, with `None` marking an absent child. Absent
    /// entries consume their slot but describe no node, so they are owed no
    /// child entries of their own, mirroring what
    /// [`level_order`](TreeNode::level_order) produces. A description may
    /// end mid-pair; unlisted slots and trailing `None` padding are treated
    /// as absent.
    ///
    /// ```
    /// use bintree::TreeNode;
    ///
    /// let tree = TreeNode::from_level_order([
    ///     Some(1),
    ///     Some(2), Some(3),
    ///     Some(4), None, None, None,
    /// ]).unwrap();
    ///
    /// let visited: Vec<_> = tree.level_order().copied().collect();
    /// assert_eq!(visited, [1, 2, 3, 4]);
    /// ```
    ///
    /// # Errors
    /// [`TreeError::MissingRoot`] if the description is empty or starts
    /// with `None`; [`TreeError::OrphanValue`] if a value is left over
    /// after every attachment slot has been consumed.
    #[instrument(level = "debug", skip(values))]
    pub fn from_level_order<I>(values: I) -> TreeResult<Self>
    where
        I: IntoIterator<Item = Option<V>>,
    {
        let mut items = values.into_iter().enumerate();
        let root_value = match items.next() {
            Some((_, Some(value))) => value,
            _ => return Err(TreeError::MissingRoot),
        };

        // Pairing pass: the iterator's FIFO discipline run in reverse. Each
        // present node is owed two description entries. Nodes are parked per
        // level, remembering their parent's position one level up, so the
        // owned subtrees can be assembled bottom-up afterwards.
        let mut levels: Vec<Vec<(usize, Side, TreeNode<V>)>> = Vec::new();
        let mut queue: VecDeque<(usize, usize)> = VecDeque::from([(0, 0)]);
        let mut side = Side::Left;

        for (position, item) in items {
            let Some(&(parent_level, parent_index)) = queue.front() else {
                match item {
                    Some(_) => return Err(TreeError::OrphanValue { index: position }),
                    // trailing padding
                    None => continue,
                }
            };
            if let Some(value) = item {
                let child_level = parent_level + 1;
                if levels.len() < child_level {
                    levels.push(Vec::new());
                }
                let bucket = &mut levels[child_level - 1];
                bucket.push((parent_index, side, TreeNode::new(value)));
                queue.push_back((child_level, bucket.len() - 1));
            }
            side = match side {
                Side::Left => Side::Right,
                Side::Right => {
                    queue.pop_front();
                    Side::Left
                }
            };
        }

        let mut root = TreeNode::new(root_value);
        while let Some(children) = levels.pop() {
            match levels.last_mut() {
                Some(parents) => {
                    for (parent_index, side, node) in children {
                        attach(&mut parents[parent_index].2, side, node);
                    }
                }
                None => {
                    for (_, side, node) in children {
                        attach(&mut root, side, node);
                    }
                }
            }
        }
        Ok(root)
    }
}

impl<V: PartialEq> TreeNode<V> {
    /// Plain existence search: true iff `target` equals this node's value
    /// or occurs anywhere in the left or right subtree. No ordering
    /// assumption on `V`; the left subtree is searched before the right,
    /// short-circuiting on the first hit. O(n) over the subtree size.
    #[instrument(level = "trace", skip(self, target))]
    pub fn contains(&self, target: &V) -> bool {
        if self.value == *target {
            return true;
        }
        self.left.as_deref().is_some_and(|node| node.contains(target))
            || self.right.as_deref().is_some_and(|node| node.contains(target))
    }
}

/// Which slot of a parent a pending node hangs on.
#[derive(Clone, Copy)]
enum Side {
    Left,
    Right,
}

fn attach<V>(parent: &mut TreeNode<V>, side: Side, child: TreeNode<V>) {
    let slot = match side {
        Side::Left => &mut parent.left,
        Side::Right => &mut parent.right,
    };
    *slot = Some(Box::new(child));
}

/// Depth walk shared by min/max. Only a node with both children present
/// branches and picks between the two subtree depths with `pick`; a node
/// with a single child is walked through.
fn find_depth<V>(node: &TreeNode<V>, pick: fn(usize, usize) -> usize) -> usize {
    match (node.left.as_deref(), node.right.as_deref()) {
        (None, None) => 0,
        (Some(child), None) | (None, Some(child)) => 1 + find_depth(child, pick),
        (Some(left), Some(right)) => 1 + pick(find_depth(left, pick), find_depth(right, pick)),
    }
}

/// Structural equality over optional subtrees: absence only equals absence,
/// presence requires equal values and recursively equal children.
fn subtree_eq<V: PartialEq>(lhs: &SubTree<V>, rhs: &SubTree<V>) -> bool {
    match (lhs, rhs) {
        (None, None) => true,
        (Some(left), Some(right)) => {
            left.value == right.value
                && subtree_eq(&left.left, &right.left)
                && subtree_eq(&left.right, &right.right)
        }
        _ => false,
    }
}

/// Hashes an optional subtree, an absent child contributing a fixed zero
/// sentinel byte rather than being skipped, so that shape differences reach
/// the hasher.
fn subtree_hash<V: Hash, H: Hasher>(subtree: &SubTree<V>, state: &mut H) {
    match subtree {
        Some(node) => node.hash(state),
        None => state.write_u8(0),
    }
}

impl<V: PartialEq> PartialEq for TreeNode<V> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
            && subtree_eq(&self.left, &other.left)
            && subtree_eq(&self.right, &other.right)
    }
}

impl<V: Eq> Eq for TreeNode<V> {}

/// Combined hash over the value and both subtrees. Consistent with the
/// structural [`PartialEq`]: equal trees always hash identically; unequal
/// trees may collide.
impl<V: Hash> Hash for TreeNode<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
        subtree_hash(&self.left, state);
        subtree_hash(&self.right, state);
    }
}

/// Space-separated pre-order rendering: the value, then the left subtree,
/// then the right subtree, with a literal `nil` standing in for each absent
/// child of a branch node. Leaves render as the bare value.
///
/// Root `1` with a left leaf `2` and no right child renders as `"1 2 nil"`.
impl<V: fmt::Display> fmt::Display for TreeNode<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)?;
        if self.is_leaf() {
            return Ok(());
        }
        match &self.left {
            Some(node) => write!(f, " {node}")?,
            None => write!(f, " nil")?,
        }
        match &self.right {
            Some(node) => write!(f, " {node}"),
            None => write!(f, " nil"),
        }
    }
}

impl<V> BinaryTree for TreeNode<V> {
    type Value = V;

    fn value(&self) -> &V {
        &self.value
    }

    fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }
}

impl<'a, V> IntoIterator for &'a TreeNode<V> {
    type Item = &'a V;
    type IntoIter = LevelOrderIter<'a, TreeNode<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.level_order()
    }
}
