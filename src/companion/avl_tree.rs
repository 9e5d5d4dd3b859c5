// ordtree/src/companion/avl_tree.rs

use std::cmp::Ordering;
use std::mem;

use log::{debug, trace};

use crate::common::TraversalOrder;
use crate::error::{Result, TreeError};

use super::traversal::{self, BinaryNode};

type Link<K> = Option<Box<AvlNode<K>>>;

#[derive(Debug)]
struct AvlNode<K> {
    key: K,
    /// Node count of the longest path down from here; a leaf is 1.
    height: usize,
    left: Link<K>,
    right: Link<K>,
}

impl<K> AvlNode<K> {
    fn new(key: K) -> Self {
        AvlNode {
            key,
            height: 1,
            left: None,
            right: None,
        }
    }

    fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    /// Left height minus right height.
    fn balance_factor(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }
}

impl<K> BinaryNode<K> for AvlNode<K> {
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

fn height<K>(link: &Link<K>) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}

/// Height-balanced binary search tree: the subtrees of every node differ in
/// height by at most one.
#[derive(Debug)]
pub struct AvlTree<K> {
    root: Link<K>,
    len: usize,
}

impl<K> Default for AvlTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> AvlTree<K> {
    pub fn new() -> Self {
        AvlTree { root: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    pub fn height(&self) -> usize {
        height(&self.root)
    }
}

impl<K: Ord> AvlTree<K> {
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

    /// Inserts `key` and rebalances on the way back up.
    pub fn insert(&mut self, key: impl Into<Option<K>>) -> Result<()> {
        let Some(key) = key.into() else {
            debug!("insert rejected: null key");
            return Err(TreeError::NullKey);
        };
        insert_at(&mut self.root, key).inspect_err(|e| debug!("insert rejected: {}", e))?;
        self.len += 1;
        Ok(())
    }

    /// Removes `key`, returning the stored key.
    ///
    /// A node with two children takes its in-order successor's key and the
    /// successor is removed from the right subtree instead.
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
        let removed =
            remove_at(&mut self.root, key).inspect_err(|e| debug!("remove rejected: {}", e))?;
        self.len -= 1;
        Ok(removed)
    }

    /// Recomputes every height and checks balance factors, key order and the
    /// cached length.
    pub fn validate(&self) -> Result<()> {
        if let Some(root) = self.root.as_deref() {
            check_heights(root)?;
        }
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

impl<K: Clone> AvlTree<K> {
    pub fn to_sequence(&self, order: TraversalOrder) -> Vec<K> {
        traversal::collect_keys(self.root.as_deref(), order, self.len)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn level_order(&self) -> Vec<K> {
        self.to_sequence(TraversalOrder::LevelOrder)
    }
}

fn insert_at<K: Ord>(link: &mut Link<K>, key: K) -> Result<()> {
    match link {
        None => {
            *link = Some(Box::new(AvlNode::new(key)));
            return Ok(());
        }
        Some(node) => match key.cmp(&node.key) {
            Ordering::Less => insert_at(&mut node.left, key)?,
            Ordering::Greater => insert_at(&mut node.right, key)?,
            Ordering::Equal => return Err(TreeError::DuplicateKey),
        },
    }
    rebalance_link(link);
    Ok(())
}

fn remove_at<K: Ord>(link: &mut Link<K>, key: &K) -> Result<K> {
    let ord = match link.as_deref() {
        None => return Err(TreeError::KeyNotFound),
        Some(node) => key.cmp(&node.key),
    };
    let removed = match (ord, link.as_mut()) {
        (Ordering::Less, Some(node)) => remove_at(&mut node.left, key)?,
        (Ordering::Greater, Some(node)) => remove_at(&mut node.right, key)?,
        _ => unlink(link).ok_or(TreeError::KeyNotFound)?,
    };
    rebalance_link(link);
    Ok(removed)
}

/// Takes the node out of `link`, splicing its subtrees back in, and returns
/// its key. The caller rebalances whatever ends up in `link`.
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

/// Unlinks the leftmost node under `link`, rebalancing each ancestor it
/// passes on the way back.
fn pop_min<K>(link: &mut Link<K>) -> Option<K> {
    let node = link.as_mut()?;
    if node.left.is_some() {
        let key = pop_min(&mut node.left)?;
        rebalance_link(link);
        return Some(key);
    }
    let node = link.take()?;
    let AvlNode { key, right, .. } = *node;
    *link = right;
    Some(key)
}

fn rebalance_link<K>(link: &mut Link<K>) {
    if let Some(node) = link.take() {
        *link = Some(rebalance(node));
    }
}

/// Restores the balance of `node` after one of its subtrees changed height
/// by one. A child leaning the same way as the imbalance, or not leaning at
/// all, takes a single rotation; a child leaning the other way takes two.
fn rebalance<K>(mut node: Box<AvlNode<K>>) -> Box<AvlNode<K>> {
    node.update_height();
    let factor = node.balance_factor();
    if factor > 1 {
        if node.left.as_ref().is_some_and(|l| l.balance_factor() < 0) {
            trace!("avl: left-right case");
            node.left = node.left.take().map(rotate_left);
        }
        trace!("avl: rotate right at height {}", node.height);
        return rotate_right(node);
    }
    if factor < -1 {
        if node.right.as_ref().is_some_and(|r| r.balance_factor() > 0) {
            trace!("avl: right-left case");
            node.right = node.right.take().map(rotate_right);
        }
        trace!("avl: rotate left at height {}", node.height);
        return rotate_left(node);
    }
    node
}

fn rotate_left<K>(mut node: Box<AvlNode<K>>) -> Box<AvlNode<K>> {
    let Some(mut pivot) = node.right.take() else {
        return node;
    };
    node.right = pivot.left.take();
    node.update_height();
    pivot.left = Some(node);
    pivot.update_height();
    pivot
}

fn rotate_right<K>(mut node: Box<AvlNode<K>>) -> Box<AvlNode<K>> {
    let Some(mut pivot) = node.left.take() else {
        return node;
    };
    node.left = pivot.right.take();
    node.update_height();
    pivot.right = Some(node);
    pivot.update_height();
    pivot
}

/// Returns the recomputed height of the subtree.
fn check_heights<K>(node: &AvlNode<K>) -> Result<usize> {
    let left = node.left.as_deref().map_or(Ok(0), check_heights)?;
    let right = node.right.as_deref().map_or(Ok(0), check_heights)?;
    let actual = 1 + left.max(right);
    if node.height != actual {
        return Err(TreeError::InvariantViolation(format!(
            "cached height {} but subtree is {} tall",
            node.height, actual
        )));
    }
    if left.abs_diff(right) > 1 {
        return Err(TreeError::InvariantViolation(format!(
            "subtree heights {} and {} differ by more than one",
            left, right
        )));
    }
    Ok(actual)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(keys: &[i32]) -> AvlTree<i32> {
        let mut tree = AvlTree::new();
        for &k in keys {
            tree.insert(k).unwrap();
        }
        tree
    }

    #[test]
    fn single_and_double_rotations_on_insert() {
        assert_eq!(build(&[3, 2, 1]).level_order(), vec![2, 1, 3]);
        assert_eq!(build(&[1, 2, 3]).level_order(), vec![2, 1, 3]);
        assert_eq!(build(&[3, 1, 2]).level_order(), vec![2, 1, 3]);
        assert_eq!(build(&[1, 3, 2]).level_order(), vec![2, 1, 3]);
    }

    #[test]
    fn delete_with_balanced_child_takes_single_rotation() {
        //      10                 6
        //     /  \               / \
        //    6    12    -->     4   10
        //   / \                     /
        //  4   8                   8
        let mut tree = build(&[10, 6, 12, 4, 8]);
        assert_eq!(tree.remove(&12), Ok(12));
        assert_eq!(tree.level_order(), vec![6, 4, 10, 8]);
        assert!(tree.validate().is_ok());

        // mirror image
        let mut tree = build(&[10, 6, 14, 12, 16]);
        assert_eq!(tree.remove(&6), Ok(6));
        assert_eq!(tree.level_order(), vec![14, 10, 16, 12]);
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn delete_node_with_two_children() {
        let mut tree = build(&[20, 10, 30, 5, 15, 25, 35, 27]);
        assert_eq!(tree.remove(&20), Ok(20));
        assert_eq!(tree.level_order(), vec![25, 10, 30, 5, 15, 27, 35]);
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn rejections_leave_tree_untouched() {
        let mut tree = build(&[2, 1, 3]);
        assert_eq!(tree.insert(None), Err(TreeError::NullKey));
        assert_eq!(tree.insert(2), Err(TreeError::DuplicateKey));
        assert_eq!(tree.remove(None), Err(TreeError::NullKey));
        assert_eq!(tree.remove(&9), Err(TreeError::KeyNotFound));
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.level_order(), vec![2, 1, 3]);
        assert!(tree.validate().is_ok());

        let mut empty: AvlTree<i32> = AvlTree::new();
        assert_eq!(empty.remove(&1), Err(TreeError::EmptyTree));
    }

    #[test]
    fn sequential_keys_stay_logarithmic() {
        let mut tree = AvlTree::new();
        for k in 0..1000 {
            tree.insert(k).unwrap();
        }
        assert!(tree.height() <= 14, "height {}", tree.height());
        assert!(tree.validate().is_ok());
        for k in (0..1000).step_by(2) {
            assert_eq!(tree.remove(&k), Ok(k));
        }
        assert_eq!(tree.len(), 500);
        assert!(tree.validate().is_ok());
        assert_eq!(tree.get(&1), Some(&1));
        assert_eq!(tree.get(&2), None);
    }
}
