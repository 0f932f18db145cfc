//! This crate exposes an unbalanced Binary Search Tree (BST) whose nodes
//! live in an index arena owned by the tree.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored elements. BSTs are built out of `Node`s,
//! where each `Node` holds one element and up to two child `Node`s. The
//! most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree hold
//!    elements less than its own element.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree hold
//!    elements greater than its own element.
//!
//! Together these mean a lookup only ever walks a single root-to-leaf path,
//! costing `O(height)`. They also mean the tree naturally supports sorted
//! enumeration by visiting the left subtree, then the subtree root, then
//! the right subtree.
//!
//! This crate does *not* rebalance: the height depends entirely on
//! insertion order. Uncorrelated insertion orders keep the height near
//! `lg N` while already-sorted input degrades the tree into an `N`-level
//! chain. Every operation stays correct either way; only the `O(height)`
//! walks get slower.
//!
//! ## Arena storage
//!
//! Rather than each parent owning its children through pointers, all nodes
//! live in one slot vector owned by the tree, and the root and child links
//! are slot indices. Structural edits become index rewiring, dropping the
//! tree drops the vector (no recursion to overflow on chain-shaped trees),
//! and slots vacated by removals are recycled through a free list.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod arena;

#[cfg(test)]
mod test;
