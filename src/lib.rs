//! Generic owning binary tree with level-order traversal.
//!
//! A [`TreeNode`] owns its two optional children exclusively, which makes
//! every tree finite and acyclic by construction and teardown recursive and
//! deterministic. On top of that single type the crate provides:
//! - structural equality ([`PartialEq`]/[`Eq`]) and a combined hash
//!   consistent with it,
//! - membership testing ([`TreeNode::contains`]),
//! - min/max depth queries that walk through single-child nodes
//!   ([`TreeNode::min_depth`], [`TreeNode::max_depth`]),
//! - a space-separated [`Display`](std::fmt::Display) rendering with `nil`
//!   markers for absent children,
//! - breadth-first iteration through [`LevelOrderIter`], backed by a real
//!   FIFO queue,
//! - a fallible level-order bulk constructor
//!   ([`TreeNode::from_level_order`]),
//! - box-drawing terminal output via [`TreeNodeConvert`].
//!
//! Trees are plain single-threaded values: mutation happens by assigning
//! into the `left`/`right` slots, and nothing in the crate locks or shares.
//!
//! ```
//! use bintree::TreeNode;
//!
//! let tree = TreeNode::new(1)
//!     .with_left(TreeNode::new(2).with_left(TreeNode::new(4)))
//!     .with_right(TreeNode::new(3));
//!
//! let visited: Vec<_> = tree.level_order().copied().collect();
//! assert_eq!(visited, [1, 2, 3, 4]);
//!
//! assert!(tree.contains(&4));
//! assert_eq!(tree.min_depth(), 1);
//! assert_eq!(tree.max_depth(), 2);
//! assert_eq!(tree.to_string(), "1 2 4 nil 3");
//! ```

pub mod errors;
pub mod tree;
pub mod tree_queue;
pub mod tree_traits;
pub mod util;

pub use errors::{TreeError, TreeResult};
pub use tree::{SubTree, TreeNode};
pub use tree_queue::LevelOrderIter;
pub use tree_traits::{BinaryTree, TreeNodeConvert};
