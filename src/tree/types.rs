// ordtree/src/tree/types.rs

use std::fmt;

use crate::common::{Color, Side};
use crate::node::NodeId;
use crate::store::NodeArena;

/// Borrowed, read-only handle to a node of a `RedBlackTree`.
///
/// Removal moves keys between nodes, so node identity is not stable across
/// mutations. A view borrows the tree, which rules out holding one across a
/// mutation in the first place.
pub struct NodeView<'a, K> {
    pub(super) nodes: &'a NodeArena<K>,
    pub(super) id: NodeId,
    pub(super) key: &'a K,
    pub(super) color: Color,
}

impl<'a, K> NodeView<'a, K> {
    pub(super) fn new(nodes: &'a NodeArena<K>, id: NodeId) -> Option<Self> {
        let node = nodes.get(id)?;
        Some(NodeView {
            nodes,
            id,
            key: &node.key,
            color: node.color,
        })
    }

    pub fn key(&self) -> &'a K {
        self.key
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_red(&self) -> bool {
        self.color.is_red()
    }

    pub fn is_black(&self) -> bool {
        self.color.is_black()
    }

    pub fn parent(&self) -> Option<NodeView<'a, K>> {
        NodeView::new(self.nodes, self.nodes.parent(self.id)?)
    }

    pub fn left(&self) -> Option<NodeView<'a, K>> {
        NodeView::new(self.nodes, self.nodes.left(self.id)?)
    }

    pub fn right(&self) -> Option<NodeView<'a, K>> {
        NodeView::new(self.nodes, self.nodes.right(self.id)?)
    }
}

impl<K> Clone for NodeView<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for NodeView<'_, K> {}

impl<K: fmt::Debug> fmt::Debug for NodeView<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeView")
            .field("key", self.key)
            .field("color", &self.color)
            .finish()
    }
}

/// Where a search for a key ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Slot {
    /// The key is stored in this node.
    Occupied(NodeId),
    /// The key belongs in the empty child link `side` of `parent`; `None`
    /// parent means the tree is empty.
    Vacant {
        parent: Option<NodeId>,
        side: Side,
    },
}
