//! This crate exposes an unbalanced Binary Search Tree (BST) over any totally ordered key,
//! mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores the key that
//! was inserted and may have up to two child `Node`s. The invariants kept by
//! [`tree::OrderedTree`] are:
//!
//! 1. For every `Node` in the tree, all the `Node`s in its left subtree have a
//!    key strictly less than its own key.
//! 2. For every `Node` in the tree, all the `Node`s in its right subtree have a
//!    key greater than or equal to its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The second rule means equal keys are allowed and pile up to the right, so the
//! tree behaves like a sorted multiset.
//!
//! Searching for a key takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). Nothing here rebalances the tree, so
//! inserting keys in ascending order produces a chain whose height is the number of
//! keys. BSTs also naturally support sorted iteration by visiting the left subtree,
//! then the subtree root, then the right subtree.
//!
//! The [`comments`] module holds a much simpler tree: a comment thread where every
//! comment owns its replies. [`script`] drives a tree from text commands and is what
//! the `ordered-tree` binary runs.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod comments;
pub mod script;
pub mod tree;
