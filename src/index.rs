// ordtree/src/index.rs

use crate::common::TraversalOrder;
use crate::companion::{AvlTree, BinarySortTree};
use crate::error::Result;
use crate::tree::RedBlackTree;

/// The ordered-set contract shared by every tree in the crate.
///
/// `None` stands for an absent key: inserting or removing it is rejected with
/// `TreeError::NullKey`. Rejected calls never change the index.
pub trait OrderedIndex<K: Ord> {
    /// The stored key equal to `key`, if any.
    fn find(&self, key: &K) -> Option<&K>;

    fn insert(&mut self, key: Option<K>) -> Result<()>;

    fn remove(&mut self, key: Option<&K>) -> Result<K>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn to_sequence(&self, order: TraversalOrder) -> Vec<K>
    where
        K: Clone;

    /// Structural self-check of whatever balance the tree promises.
    fn validate(&self) -> Result<()>;
}

impl<K: Ord> OrderedIndex<K> for RedBlackTree<K> {
    fn find(&self, key: &K) -> Option<&K> {
        self.get(key)
    }

    fn insert(&mut self, key: Option<K>) -> Result<()> {
        RedBlackTree::insert(self, key)
    }

    fn remove(&mut self, key: Option<&K>) -> Result<K> {
        RedBlackTree::remove(self, key)
    }

    fn len(&self) -> usize {
        RedBlackTree::len(self)
    }

    fn to_sequence(&self, order: TraversalOrder) -> Vec<K>
    where
        K: Clone,
    {
        RedBlackTree::to_sequence(self, order)
    }

    fn validate(&self) -> Result<()> {
        RedBlackTree::validate(self)
    }
}

impl<K: Ord> OrderedIndex<K> for BinarySortTree<K> {
    fn find(&self, key: &K) -> Option<&K> {
        self.get(key)
    }

    fn insert(&mut self, key: Option<K>) -> Result<()> {
        BinarySortTree::insert(self, key)
    }

    fn remove(&mut self, key: Option<&K>) -> Result<K> {
        BinarySortTree::remove(self, key)
    }

    fn len(&self) -> usize {
        BinarySortTree::len(self)
    }

    fn to_sequence(&self, order: TraversalOrder) -> Vec<K>
    where
        K: Clone,
    {
        BinarySortTree::to_sequence(self, order)
    }

    fn validate(&self) -> Result<()> {
        BinarySortTree::validate(self)
    }
}

impl<K: Ord> OrderedIndex<K> for AvlTree<K> {
    fn find(&self, key: &K) -> Option<&K> {
        self.get(key)
    }

    fn insert(&mut self, key: Option<K>) -> Result<()> {
        AvlTree::insert(self, key)
    }

    fn remove(&mut self, key: Option<&K>) -> Result<K> {
        AvlTree::remove(self, key)
    }

    fn len(&self) -> usize {
        AvlTree::len(self)
    }

    fn to_sequence(&self, order: TraversalOrder) -> Vec<K>
    where
        K: Clone,
    {
        AvlTree::to_sequence(self, order)
    }

    fn validate(&self) -> Result<()> {
        AvlTree::validate(self)
    }
}
