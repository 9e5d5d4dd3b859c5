// ordtree/src/store/arena.rs

use std::mem;

use crate::common::{Color, MAX_NODES, Side};
use crate::error::{Result, TreeError};
use crate::node::{Node, NodeId};

/// Owns every node of one red-black tree and hands out `NodeId`s for them.
///
/// Released slots go on a free list and are reused by later allocations, so
/// an id can come back to life holding a different key. The tree never keeps
/// an id past the release of its node.
#[derive(Debug, Clone)]
pub struct NodeArena<K> {
    slots: Vec<Option<Node<K>>>,
    free: Vec<NodeId>,
    live: usize,
}

impl<K> Default for NodeArena<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> NodeArena<K> {
    pub fn new() -> Self {
        NodeArena {
            slots: Vec::new(),
            free: Vec::new(),
            live: 0,
        }
    }

    /// Reserves `capacity` node slots up front. Fails instead of aborting
    /// when the allocator cannot provide them.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(capacity)
            .map_err(|_| TreeError::CapacityExhausted(capacity))?;
        Ok(NodeArena {
            slots,
            free: Vec::new(),
            live: 0,
        })
    }

    /// Stores a fresh red leaf holding `key`.
    pub fn alloc(&mut self, key: K) -> Result<NodeId> {
        let node = Node::new(key);
        if let Some(id) = self.free.pop() {
            self.slots[id.index()] = Some(node);
            self.live += 1;
            return Ok(id);
        }
        if self.slots.len() >= MAX_NODES {
            return Err(TreeError::CapacityExhausted(MAX_NODES));
        }
        let id = NodeId(self.slots.len() as u32);
        self.slots.push(Some(node));
        self.live += 1;
        Ok(id)
    }

    /// Frees the slot and gives back the key it held.
    pub fn release(&mut self, id: NodeId) -> Option<K> {
        let node = self.slots.get_mut(id.index())?.take()?;
        self.free.push(id);
        self.live -= 1;
        Some(node.key)
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.live = 0;
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&Node<K>> {
        self.slots.get(id.index())?.as_ref()
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node<K>> {
        self.slots.get_mut(id.index())?.as_mut()
    }

    pub fn key(&self, id: NodeId) -> Option<&K> {
        self.get(id).map(|n| &n.key)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    pub fn left(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.left)
    }

    pub fn right(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.right)
    }

    pub fn child(&self, id: NodeId, side: Side) -> Option<NodeId> {
        self.get(id).and_then(|n| n.child(side))
    }

    /// Absent children are black.
    #[inline]
    pub fn color_of(&self, id: Option<NodeId>) -> Color {
        id.and_then(|id| self.get(id))
            .map_or(Color::Black, |n| n.color)
    }

    pub fn set_color(&mut self, id: NodeId, color: Color) {
        if let Some(node) = self.get_mut(id) {
            node.color = color;
        }
    }

    pub fn set_parent(&mut self, id: NodeId, parent: Option<NodeId>) {
        if let Some(node) = self.get_mut(id) {
            node.parent = parent;
        }
    }

    pub fn set_child(&mut self, id: NodeId, side: Side, child: Option<NodeId>) {
        if let Some(node) = self.get_mut(id) {
            node.set_child(side, child);
        }
    }

    /// Which side of `parent` the node `child` hangs from.
    pub fn side_of(&self, parent: NodeId, child: NodeId) -> Option<Side> {
        let node = self.get(parent)?;
        if node.left == Some(child) {
            Some(Side::Left)
        } else if node.right == Some(child) {
            Some(Side::Right)
        } else {
            None
        }
    }

    /// Exchanges the keys of two live nodes, leaving links and colors alone.
    pub fn swap_keys(&mut self, a: NodeId, b: NodeId) {
        if a == b {
            return;
        }
        let (lo, hi) = if a.index() < b.index() { (a, b) } else { (b, a) };
        let (head, tail) = self.slots.split_at_mut(hi.index());
        if let (Some(Some(x)), Some(Some(y))) = (head.get_mut(lo.index()), tail.first_mut()) {
            mem::swap(&mut x.key, &mut y.key);
        }
    }
}
