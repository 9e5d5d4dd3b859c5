// ordtree/src/tree/core_logic.rs

use std::cmp::Ordering;

use crate::common::{Color, Side};
use crate::error::Result;
use crate::node::NodeId;

use super::modification;
use super::red_black_tree::RedBlackTree;
use super::types::Slot;

/// Walks from the root towards `key`, stopping at the node holding it or at
/// the empty link where it would be attached.
pub(super) fn find_slot<K: Ord>(tree: &RedBlackTree<K>, key: &K) -> Slot {
    let mut parent = None;
    let mut side = Side::Left;
    let mut current = tree.root;
    while let Some(id) = current {
        let Some(node) = tree.nodes.get(id) else {
            break;
        };
        side = match key.cmp(&node.key) {
            Ordering::Equal => return Slot::Occupied(id),
            Ordering::Less => Side::Left,
            Ordering::Greater => Side::Right,
        };
        parent = Some(id);
        current = node.child(side);
    }
    Slot::Vacant { parent, side }
}

pub(super) fn search<K: Ord>(tree: &RedBlackTree<K>, key: &K) -> Option<NodeId> {
    match find_slot(tree, key) {
        Slot::Occupied(id) => Some(id),
        Slot::Vacant { .. } => None,
    }
}

/// Links a fresh red leaf into an empty slot and rebalances. A node landing
/// at the root is simply made black.
pub(super) fn attach<K>(
    tree: &mut RedBlackTree<K>,
    key: K,
    parent: Option<NodeId>,
    side: Side,
) -> Result<NodeId> {
    let id = tree.nodes.alloc(key)?;
    match parent {
        None => {
            tree.nodes.set_color(id, Color::Black);
            tree.root = Some(id);
        }
        Some(parent) => {
            tree.nodes.set_parent(id, Some(parent));
            tree.nodes.set_child(parent, side, Some(id));
            modification::insert_fixup(tree, id);
        }
    }
    Ok(id)
}

/// Outermost node on `side` of the subtree rooted at `id`.
pub(super) fn outermost<K>(tree: &RedBlackTree<K>, mut id: NodeId, side: Side) -> NodeId {
    while let Some(next) = tree.nodes.child(id, side) {
        id = next;
    }
    id
}

/// In-order successor of a node: the leftmost node of its right subtree, or
/// else the first ancestor reached from a left child.
pub(super) fn successor_node<K>(tree: &RedBlackTree<K>, id: NodeId) -> Option<NodeId> {
    if let Some(right) = tree.nodes.right(id) {
        return Some(outermost(tree, right, Side::Left));
    }
    let mut child = id;
    let mut parent = tree.nodes.parent(id);
    while let Some(p) = parent {
        if tree.nodes.side_of(p, child) == Some(Side::Left) {
            return Some(p);
        }
        child = p;
        parent = tree.nodes.parent(p);
    }
    None
}

/// Smallest key strictly greater than `key`, whether or not `key` itself is
/// stored.
pub(super) fn successor_of<K: Ord>(tree: &RedBlackTree<K>, key: &K) -> Option<NodeId> {
    match find_slot(tree, key) {
        Slot::Occupied(id) => successor_node(tree, id),
        Slot::Vacant { parent: None, .. } => None,
        Slot::Vacant { parent: Some(p), side: Side::Left } => Some(p),
        Slot::Vacant { parent: Some(p), side: Side::Right } => successor_node(tree, p),
    }
}

/// Removes the node `target` and returns the key it held.
///
/// Keys are moved instead of nodes: a node with two children trades keys with
/// its in-order successor, a node with one child trades keys with that child,
/// until the doomed key sits in a leaf. Only that leaf is unlinked, after the
/// deletion fixup has run on it if it is black.
pub(super) fn remove_node<K>(tree: &mut RedBlackTree<K>, mut target: NodeId) -> Option<K> {
    loop {
        let node = tree.nodes.get(target)?;
        let next = if let (Some(_), Some(right)) = (node.left, node.right) {
            outermost(tree, right, Side::Left)
        } else if let Some(child) = node.only_child() {
            child
        } else {
            break;
        };
        tree.nodes.swap_keys(target, next);
        target = next;
    }

    if Some(target) == tree.root {
        tree.root = None;
        return tree.nodes.release(target);
    }

    if tree.nodes.color_of(Some(target)).is_black() {
        modification::delete_fixup(tree, target);
    }

    if let Some(parent) = tree.nodes.parent(target) {
        if let Some(side) = tree.nodes.side_of(parent, target) {
            tree.nodes.set_child(parent, side, None);
        }
    }
    tree.nodes.release(target)
}
