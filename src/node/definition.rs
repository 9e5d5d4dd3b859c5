// ordtree/src/node/definition.rs

use std::fmt;

use crate::common::{Color, Side};

/// Handle of a node inside the arena. Only meaningful for the tree that
/// issued it, and only until that node is released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A red-black tree node.
///
/// Child links own their targets through the arena; `parent` is a plain back
/// reference used for walking upward during fixups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<K> {
    pub key: K,
    pub color: Color,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
    pub parent: Option<NodeId>,
}

impl<K> Node<K> {
    /// Fresh nodes are always red leaves.
    pub fn new(key: K) -> Self {
        Node {
            key,
            color: Color::Red,
            left: None,
            right: None,
            parent: None,
        }
    }

    #[inline]
    pub fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    #[inline]
    pub fn set_child(&mut self, side: Side, child: Option<NodeId>) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// The only child, if the node has exactly one.
    pub fn only_child(&self) -> Option<NodeId> {
        match (self.left, self.right) {
            (Some(c), None) | (None, Some(c)) => Some(c),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_node_is_red_leaf() {
        let node = Node::new(7);
        assert_eq!(node.color, Color::Red);
        assert!(node.is_leaf());
        assert_eq!(node.parent, None);
    }

    #[test]
    fn child_accessors_follow_side() {
        let mut node = Node::new(1);
        node.set_child(Side::Right, Some(NodeId(4)));
        assert_eq!(node.child(Side::Right), Some(NodeId(4)));
        assert_eq!(node.child(Side::Left), None);
        assert_eq!(node.only_child(), Some(NodeId(4)));

        node.set_child(Side::Left, Some(NodeId(2)));
        assert_eq!(node.only_child(), None);
        assert!(!node.is_leaf());
    }
}
