// ordtree/src/tree/red_black_tree.rs

use std::fmt;

use log::{debug, error};

use crate::common::{Side, TraversalOrder, TreeConfig};
use crate::error::{Result, TreeError};
use crate::node::NodeId;
use crate::store::NodeArena;

use super::cursor::{self, Iter};
use super::types::{NodeView, Slot};
use super::{core_logic, validate};

/// An ordered set of unique keys kept in a red-black tree.
///
/// Nodes live in an arena and link to each other through `NodeId` handles;
/// the parent link is only used to walk upward while rebalancing.
pub struct RedBlackTree<K> {
    pub(super) nodes: NodeArena<K>,
    pub(super) root: Option<NodeId>,
    config: TreeConfig,
}

impl<K> Default for RedBlackTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> RedBlackTree<K> {
    pub fn new() -> Self {
        RedBlackTree {
            nodes: NodeArena::new(),
            root: None,
            config: TreeConfig::default(),
        }
    }

    pub fn with_config(config: TreeConfig) -> Result<Self> {
        config.validate()?;
        Ok(RedBlackTree {
            nodes: NodeArena::with_capacity(config.initial_capacity)
                .inspect_err(|e| debug!("with_config rejected: {}", e))?,
            root: None,
            config,
        })
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    pub fn root(&self) -> Option<NodeView<'_, K>> {
        NodeView::new(&self.nodes, self.root?)
    }

    pub fn min(&self) -> Option<&K> {
        let id = core_logic::outermost(self, self.root?, Side::Left);
        self.nodes.key(id)
    }

    pub fn max(&self) -> Option<&K> {
        let id = core_logic::outermost(self, self.root?, Side::Right);
        self.nodes.key(id)
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        validate::height(&self.nodes, self.root)
    }

    /// Black nodes on any path from the root down to an absent child, not
    /// counting the root itself. Zero for an empty or single-node tree.
    pub fn black_height(&self) -> usize {
        let mut count = 0;
        let mut current = self.root.and_then(|root| self.nodes.left(root));
        while let Some(id) = current {
            if self.nodes.color_of(Some(id)).is_black() {
                count += 1;
            }
            current = self.nodes.left(id);
        }
        count
    }

    /// In-order iterator over the keys.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(&self.nodes, self.root)
    }

    #[cfg(test)]
    pub(super) fn level_order_ids(&self) -> Vec<NodeId> {
        cursor::collect_ids(&self.nodes, self.root, TraversalOrder::LevelOrder)
    }
}

impl<K: Ord> RedBlackTree<K> {
    /// Looks up the node holding `key`.
    pub fn find(&self, key: &K) -> Option<NodeView<'_, K>> {
        NodeView::new(&self.nodes, core_logic::search(self, key)?)
    }

    pub fn get(&self, key: &K) -> Option<&K> {
        self.nodes.key(core_logic::search(self, key)?)
    }

    pub fn contains(&self, key: &K) -> bool {
        core_logic::search(self, key).is_some()
    }

    /// Smallest stored key strictly greater than `key`.
    pub fn successor(&self, key: &K) -> Option<&K> {
        self.nodes.key(core_logic::successor_of(self, key)?)
    }

    /// Adds `key` to the tree.
    ///
    /// Rejects `None` with `NullKey` and an already stored key with
    /// `DuplicateKey`; in both cases the tree is untouched.
    pub fn insert(&mut self, key: impl Into<Option<K>>) -> Result<()> {
        let Some(key) = key.into() else {
            debug!("insert rejected: null key");
            return Err(TreeError::NullKey);
        };
        let (parent, side) = match core_logic::find_slot(self, &key) {
            Slot::Occupied(_) => {
                debug!("insert rejected: duplicate key");
                return Err(TreeError::DuplicateKey);
            }
            Slot::Vacant { parent, side } => (parent, side),
        };
        core_logic::attach(self, key, parent, side)?;
        self.verify_if_configured()
    }

    /// Removes `key` from the tree and hands it back.
    ///
    /// Rejects `None` with `NullKey`, any key on an empty tree with
    /// `EmptyTree`, and a key that is not stored with `KeyNotFound`.
    pub fn remove<'k>(&mut self, key: impl Into<Option<&'k K>>) -> Result<K>
    where
        K: 'k,
    {
        let Some(key) = key.into() else {
            debug!("remove rejected: null key");
            return Err(TreeError::NullKey);
        };
        if self.is_empty() {
            debug!("remove rejected: empty tree");
            return Err(TreeError::EmptyTree);
        }
        let Some(target) = core_logic::search(self, key) else {
            debug!("remove rejected: key not found");
            return Err(TreeError::KeyNotFound);
        };
        let removed = core_logic::remove_node(self, target).ok_or_else(|| {
            TreeError::InvariantViolation(format!("node {} vanished during removal", target))
        })?;
        self.verify_if_configured()?;
        Ok(removed)
    }

    /// Checks every red-black invariant from scratch.
    pub fn validate(&self) -> Result<()> {
        validate::check(&self.nodes, self.root)
    }

    fn verify_if_configured(&self) -> Result<()> {
        if !self.config.verify_invariants {
            return Ok(());
        }
        self.validate().inspect_err(|e| error!("post-mutation check failed: {}", e))
    }
}

impl<K: Clone> RedBlackTree<K> {
    /// Materializes the keys in the requested order.
    pub fn to_sequence(&self, order: TraversalOrder) -> Vec<K> {
        cursor::collect_ids(&self.nodes, self.root, order)
            .into_iter()
            .filter_map(|id| self.nodes.key(id).cloned())
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

impl<'a, K> IntoIterator for &'a RedBlackTree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: fmt::Debug> fmt::Debug for RedBlackTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Subtree<'a, K>(&'a NodeArena<K>, Option<NodeId>);

        impl<K: fmt::Debug> fmt::Debug for Subtree<'_, K> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let Some(node) = self.1.and_then(|id| self.0.get(id)) else {
                    return f.write_str("nil");
                };
                let label = match node.color {
                    crate::common::Color::Red => "R",
                    crate::common::Color::Black => "B",
                };
                if node.is_leaf() {
                    return write!(f, "{:?}({})", node.key, label);
                }
                f.debug_tuple(&format!("{:?}({})", node.key, label))
                    .field(&Subtree(self.0, node.left))
                    .field(&Subtree(self.0, node.right))
                    .finish()
            }
        }

        f.debug_struct("RedBlackTree")
            .field("len", &self.len())
            .field("root", &Subtree(&self.nodes, self.root))
            .finish()
    }
}
