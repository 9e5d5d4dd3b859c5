// ordtree/src/companion/mod.rs
//
// Simpler ordered trees sharing the red-black tree's contract. They own their
// nodes through boxes and need no parent links.

pub mod avl_tree;
pub mod binary_sort_tree;
mod traversal;

pub use avl_tree::AvlTree;
pub use binary_sort_tree::BinarySortTree;
