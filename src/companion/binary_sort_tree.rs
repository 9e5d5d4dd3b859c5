// ordtree/src/companion/binary_sort_tree.rs

use std::cmp::Ordering;
use std::mem;

use log::debug;

use crate::common::TraversalOrder;
use crate::error::{Result, TreeError};

use super::traversal::{self, BinaryNode};

type Link<K> = Option<Box<BstNode<K>>>;

#[derive(Debug)]
struct BstNode<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,
}

impl<K> BstNode<K> {
    fn new(key: K) -> Self {
        BstNode {
            key,
            left: None,
            right: None,
        }
    }
}

impl<K> BinaryNode<K> for BstNode<K> {
    fn key(&self) -> &K {
        &self.key
    }

    fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }
}

/// Plain binary search tree of unique keys. No rebalancing: its shape is
/// whatever the insertion order makes it, so every walk here is iterative.
#[derive(Debug)]
pub struct BinarySortTree<K> {
    root: Link<K>,
    len: usize,
}

impl<K> Default for BinarySortTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> BinarySortTree<K> {
    pub fn new() -> Self {
        BinarySortTree { root: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn clear(&mut self) {
        let mut stack: Vec<Box<BstNode<K>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
        self.len = 0;
    }

    /// Node count of the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(&BstNode<K>, usize)> =
            self.root.as_deref().into_iter().map(|n| (n, 1)).collect();
        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            stack.extend(node.left.as_deref().map(|c| (c, depth + 1)));
            stack.extend(node.right.as_deref().map(|c| (c, depth + 1)));
        }
        deepest
    }
}

impl<K: Ord> BinarySortTree<K> {
    pub fn get(&self, key: &K) -> Option<&K> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(&node.key),
            };
        }
        None
    }

    pub fn contains(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Attaches `key` as a new leaf. Rejects `None` and keys already present.
    pub fn insert(&mut self, key: impl Into<Option<K>>) -> Result<()> {
        let Some(key) = key.into() else {
            debug!("insert rejected: null key");
            return Err(TreeError::NullKey);
        };
        let mut link = &mut self.root;
        loop {
            match link {
                None => {
                    *link = Some(Box::new(BstNode::new(key)));
                    self.len += 1;
                    return Ok(());
                }
                Some(node) => {
                    link = match key.cmp(&node.key) {
                        Ordering::Less => &mut node.left,
                        Ordering::Greater => &mut node.right,
                        Ordering::Equal => {
                            debug!("insert rejected: duplicate key");
                            return Err(TreeError::DuplicateKey);
                        }
                    };
                }
            }
        }
    }

    /// Removes `key` and hands it back.
    ///
    /// A node with two children takes over its in-order successor's key and
    /// the successor is unlinked instead; a node with one child is replaced
    /// by that child.
    pub fn remove<'k>(&mut self, key: impl Into<Option<&'k K>>) -> Result<K>
    where
        K: 'k,
    {
        let Some(key) = key.into() else {
            debug!("remove rejected: null key");
            return Err(TreeError::NullKey);
        };
        if self.root.is_none() {
            debug!("remove rejected: empty tree");
            return Err(TreeError::EmptyTree);
        }
        let mut link = &mut self.root;
        loop {
            let ord = match link {
                None => {
                    debug!("remove rejected: key not found");
                    return Err(TreeError::KeyNotFound);
                }
                Some(node) => key.cmp(&node.key),
            };
            match ord {
                Ordering::Equal => break,
                Ordering::Less => match link {
                    Some(node) => link = &mut node.left,
                    None => return Err(TreeError::KeyNotFound),
                },
                Ordering::Greater => match link {
                    Some(node) => link = &mut node.right,
                    None => return Err(TreeError::KeyNotFound),
                },
            }
        }
        let removed = unlink(link).ok_or(TreeError::KeyNotFound)?;
        self.len -= 1;
        Ok(removed)
    }

    /// Checks ordering and the cached length.
    pub fn validate(&self) -> Result<()> {
        match traversal::check_ascending(self.root.as_deref()) {
            None => Err(TreeError::InvariantViolation(
                "in-order keys are not strictly ascending".to_string(),
            )),
            Some(count) if count != self.len => Err(TreeError::InvariantViolation(format!(
                "tree holds {} keys but len is {}",
                count, self.len
            ))),
            Some(_) => Ok(()),
        }
    }
}

impl<K: Clone> BinarySortTree<K> {
    pub fn to_sequence(&self, order: TraversalOrder) -> Vec<K> {
        traversal::collect_keys(self.root.as_deref(), order, self.len)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn pre_order(&self) -> Vec<K> {
        self.to_sequence(TraversalOrder::PreOrder)
    }

    pub fn in_order(&self) -> Vec<K> {
        self.to_sequence(TraversalOrder::InOrder)
    }

    pub fn post_order(&self) -> Vec<K> {
        self.to_sequence(TraversalOrder::PostOrder)
    }

    pub fn level_order(&self) -> Vec<K> {
        self.to_sequence(TraversalOrder::LevelOrder)
    }
}

impl<K> Drop for BinarySortTree<K> {
    fn drop(&mut self) {
        self.clear();
    }
}

/// Takes the node out of `link`, splicing its subtrees back in, and returns
/// its key.
fn unlink<K>(link: &mut Link<K>) -> Option<K> {
    let mut node = link.take()?;
    match (node.left.take(), node.right.take()) {
        (None, None) => Some(node.key),
        (Some(child), None) | (None, Some(child)) => {
            *link = Some(child);
            Some(node.key)
        }
        (Some(left), Some(right)) => {
            let mut right = Some(right);
            let successor = pop_min(&mut right)?;
            let removed = mem::replace(&mut node.key, successor);
            node.left = Some(left);
            node.right = right;
            *link = Some(node);
            Some(removed)
        }
    }
}

/// Unlinks the leftmost node under `link` and returns its key.
fn pop_min<K>(mut link: &mut Link<K>) -> Option<K> {
    while link.as_ref().is_some_and(|node| node.left.is_some()) {
        match link {
            Some(node) => link = &mut node.left,
            None => return None,
        }
    }
    let node = link.take()?;
    let BstNode { key, right, .. } = *node;
    *link = right;
    Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: [i32; 13] = [34, 24, 18, 39, 28, 6, 64, 14, 42, 48, 32, 66, 27];

    fn fixture() -> BinarySortTree<i32> {
        let mut tree = BinarySortTree::new();
        for k in FIXTURE {
            tree.insert(k).unwrap();
        }
        tree
    }

    #[test]
    fn depth_first_orders() {
        let tree = fixture();
        assert_eq!(tree.pre_order(), vec![34, 24, 18, 6, 14, 28, 27, 32, 39, 64, 42, 48, 66]);
        assert_eq!(tree.in_order(), vec![6, 14, 18, 24, 27, 28, 32, 34, 39, 42, 48, 64, 66]);
        assert_eq!(tree.post_order(), vec![14, 6, 18, 27, 32, 28, 24, 48, 42, 66, 64, 39, 34]);
    }

    #[test]
    fn level_order_and_duplicates() {
        let mut tree = fixture();
        assert_eq!(tree.level_order(), vec![34, 24, 39, 18, 28, 64, 6, 27, 32, 42, 66, 14, 48]);
        assert_eq!(tree.insert(27), Err(TreeError::DuplicateKey));
        assert_eq!(tree.insert(None), Err(TreeError::NullKey));
        assert_eq!(tree.len(), FIXTURE.len());
    }

    #[test]
    fn get_returns_stored_key() {
        let tree = fixture();
        assert_eq!(tree.get(&42), Some(&42));
        assert_eq!(tree.get(&43), None);
        assert!(tree.contains(&14));
    }

    #[test]
    fn removal_sequence() {
        let source = fixture();
        let mut tree = BinarySortTree::new();
        for k in source.level_order() {
            tree.insert(k).unwrap();
        }

        assert_eq!(tree.remove(None), Err(TreeError::NullKey));
        assert_eq!(tree.remove(&100), Err(TreeError::KeyNotFound));

        // two children: successor 39 moves up
        assert_eq!(tree.remove(&34), Ok(34));
        // leaf
        assert_eq!(tree.remove(&66), Ok(66));
        // only a right subtree
        assert_eq!(tree.remove(&42), Ok(42));
        // only a left subtree
        assert_eq!(tree.remove(&18), Ok(18));
        // two children: successor 27
        assert_eq!(tree.remove(&24), Ok(24));

        assert_eq!(tree.level_order(), vec![39, 27, 64, 6, 28, 48, 14, 32]);
        assert_eq!(tree.len(), 8);
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn remove_until_empty() {
        let mut tree = fixture();
        for k in FIXTURE {
            assert_eq!(tree.remove(&k), Ok(k));
        }
        assert!(tree.is_empty());
        assert_eq!(tree.remove(&34), Err(TreeError::EmptyTree));
    }

    #[test]
    fn sorted_input_degenerates_without_overflow() {
        let mut tree = BinarySortTree::new();
        for k in 0..10_000 {
            tree.insert(k).unwrap();
        }
        assert_eq!(tree.height(), 10_000);
        assert_eq!(tree.in_order().len(), 10_000);
        assert_eq!(tree.remove(&0), Ok(0));
        assert!(tree.validate().is_ok());
    }
}
