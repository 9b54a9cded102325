//! Tests for LevelOrderIter breadth-first traversal

use bintree::util::testing;
use bintree::{LevelOrderIter, TreeNode};

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

//      1
//     / \
//    2   3
//   /
//  4
fn sample_tree() -> TreeNode<i32> {
    TreeNode::new(1)
        .with_left(TreeNode::new(2).with_left(TreeNode::new(4)))
        .with_right(TreeNode::new(3))
}

//        1
//      /   \
//     2     3
//    / \   / \
//   4   5 6   7
fn full_tree() -> TreeNode<i32> {
    TreeNode::new(1)
        .with_left(
            TreeNode::new(2)
                .with_left(TreeNode::new(4))
                .with_right(TreeNode::new(5)),
        )
        .with_right(
            TreeNode::new(3)
                .with_left(TreeNode::new(6))
                .with_right(TreeNode::new(7)),
        )
}

// ============================================================
// Visit Order Tests
// ============================================================

#[test]
fn given_uneven_tree_when_iterating_then_values_come_level_by_level() {
    let tree = sample_tree();
    let visited: Vec<i32> = tree.level_order().copied().collect();
    assert_eq!(visited, vec![1, 2, 3, 4]);
}

#[test]
fn given_full_tree_when_iterating_then_left_to_right_within_each_level() {
    let tree = full_tree();
    let visited: Vec<i32> = tree.level_order().copied().collect();
    assert_eq!(visited, vec![1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn given_degenerate_chain_when_iterating_then_root_to_leaf_order() {
    let chain = TreeNode::new(1).with_right(TreeNode::new(2).with_right(TreeNode::new(3)));
    let visited: Vec<i32> = chain.level_order().copied().collect();
    assert_eq!(visited, vec![1, 2, 3]);
}

#[test]
fn given_single_node_when_iterating_then_yields_root_only() {
    let root = TreeNode::new(42);
    let visited: Vec<i32> = root.level_order().copied().collect();
    assert_eq!(visited, vec![42]);
}

#[test]
fn given_subtree_node_when_iterating_then_only_its_subtree_visited() {
    // Any node can seed an iterator; it acts as the root of its own subtree.
    let tree = sample_tree();
    let left = tree.left.as_deref().unwrap();
    let visited: Vec<i32> = LevelOrderIter::new(left).copied().collect();
    assert_eq!(visited, vec![2, 4]);
}

// ============================================================
// Exhaustion and Pause Tests
// ============================================================

#[test]
fn given_exhausted_iterator_when_calling_next_then_stays_none() {
    let tree = sample_tree();
    let mut iter = tree.level_order();
    while iter.next().is_some() {}

    for _ in 0..3 {
        assert_eq!(iter.next(), None);
    }
}

#[test]
fn given_paused_iterator_when_resumed_then_sequence_continues() {
    let tree = sample_tree();
    let mut iter = tree.level_order();
    assert_eq!(iter.next(), Some(&1));
    assert_eq!(iter.next(), Some(&2));

    // Other read-only work may interleave with a paused traversal.
    assert!(tree.contains(&4));
    assert_eq!(tree.max_depth(), 2);

    assert_eq!(iter.next(), Some(&3));
    assert_eq!(iter.next(), Some(&4));
    assert_eq!(iter.next(), None);
}

#[test]
fn given_fresh_iterator_after_exhaustion_then_traversal_restarts_from_root() {
    let tree = full_tree();
    let first: Vec<i32> = tree.level_order().copied().collect();
    let second: Vec<i32> = tree.level_order().copied().collect();
    assert_eq!(first, second);
}

// ============================================================
// IntoIterator Tests
// ============================================================

#[test]
fn given_tree_reference_when_looping_then_matches_level_order() {
    let tree = full_tree();
    let mut visited = Vec::new();
    for value in &tree {
        visited.push(*value);
    }
    assert_eq!(visited, vec![1, 2, 3, 4, 5, 6, 7]);
}
