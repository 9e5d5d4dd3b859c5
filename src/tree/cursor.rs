// ordtree/src/tree/cursor.rs

use std::collections::VecDeque;

use crate::common::TraversalOrder;
use crate::node::NodeId;
use crate::store::NodeArena;

/// In-order traversal over the keys of a `RedBlackTree`.
///
/// Keeps the path of nodes whose key has not been yielded yet, so each step
/// is amortized O(1) and the whole walk is O(n) with O(height) memory.
#[derive(Debug)]
pub struct Iter<'a, K> {
    nodes: &'a NodeArena<K>,
    /// Ancestors still to be yielded; the top is the next key.
    path: Vec<NodeId>,
    remaining: usize,
}

impl<'a, K> Iter<'a, K> {
    pub(super) fn new(nodes: &'a NodeArena<K>, root: Option<NodeId>) -> Self {
        let mut iter = Iter {
            nodes,
            path: Vec::new(),
            remaining: nodes.len(),
        };
        iter.descend_left(root);
        iter
    }

    fn descend_left(&mut self, mut current: Option<NodeId>) {
        while let Some(id) = current {
            self.path.push(id);
            current = self.nodes.left(id);
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.path.pop()?;
        let node = self.nodes.get(id)?;
        self.descend_left(node.right);
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

/// Node ids of the subtree under `root` in the requested order.
pub(super) fn collect_ids<K>(
    nodes: &NodeArena<K>,
    root: Option<NodeId>,
    order: TraversalOrder,
) -> Vec<NodeId> {
    let mut out = Vec::with_capacity(nodes.len());
    let Some(root) = root else {
        return out;
    };
    match order {
        TraversalOrder::PreOrder => {
            let mut stack = vec![root];
            while let Some(id) = stack.pop() {
                out.push(id);
                stack.extend(nodes.right(id));
                stack.extend(nodes.left(id));
            }
        }
        TraversalOrder::InOrder => {
            let mut stack = Vec::new();
            let mut current = Some(root);
            loop {
                while let Some(id) = current {
                    stack.push(id);
                    current = nodes.left(id);
                }
                let Some(id) = stack.pop() else {
                    break;
                };
                out.push(id);
                current = nodes.right(id);
            }
        }
        TraversalOrder::PostOrder => {
            // Reverse of a root-right-left pre-order.
            let mut stack = vec![root];
            while let Some(id) = stack.pop() {
                out.push(id);
                stack.extend(nodes.left(id));
                stack.extend(nodes.right(id));
            }
            out.reverse();
        }
        TraversalOrder::LevelOrder => {
            let mut queue = VecDeque::from([root]);
            while let Some(id) = queue.pop_front() {
                out.push(id);
                queue.extend(nodes.left(id));
                queue.extend(nodes.right(id));
            }
        }
    }
    out
}
