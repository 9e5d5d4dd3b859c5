// ordtree/src/companion/traversal.rs

use std::collections::VecDeque;

use crate::common::TraversalOrder;

/// Read access to a boxed binary node, enough to walk a tree.
pub(super) trait BinaryNode<K> {
    fn key(&self) -> &K;
    fn left(&self) -> Option<&Self>;
    fn right(&self) -> Option<&Self>;
}

/// Keys of the tree under `root` in the requested order, without recursion
/// so degenerate trees cannot exhaust the stack.
pub(super) fn collect_keys<'a, K, N: BinaryNode<K>>(
    root: Option<&'a N>,
    order: TraversalOrder,
    len: usize,
) -> Vec<&'a K> {
    let mut out = Vec::with_capacity(len);
    let Some(root) = root else {
        return out;
    };
    match order {
        TraversalOrder::PreOrder => {
            let mut stack = vec![root];
            while let Some(node) = stack.pop() {
                out.push(node.key());
                stack.extend(node.right());
                stack.extend(node.left());
            }
        }
        TraversalOrder::InOrder => {
            let mut stack = Vec::new();
            let mut current = Some(root);
            loop {
                while let Some(node) = current {
                    stack.push(node);
                    current = node.left();
                }
                let Some(node) = stack.pop() else {
                    break;
                };
                out.push(node.key());
                current = node.right();
            }
        }
        TraversalOrder::PostOrder => {
            let mut stack = vec![root];
            while let Some(node) = stack.pop() {
                out.push(node.key());
                stack.extend(node.left());
                stack.extend(node.right());
            }
            out.reverse();
        }
        TraversalOrder::LevelOrder => {
            let mut queue = VecDeque::from([root]);
            while let Some(node) = queue.pop_front() {
                out.push(node.key());
                queue.extend(node.left());
                queue.extend(node.right());
            }
        }
    }
    out
}

/// Checks that in-order keys are strictly ascending and returns their count.
pub(super) fn check_ascending<K: Ord, N: BinaryNode<K>>(root: Option<&N>) -> Option<usize> {
    let keys = collect_keys(root, TraversalOrder::InOrder, 0);
    if keys.windows(2).all(|w| w[0] < w[1]) {
        Some(keys.len())
    } else {
        None
    }
}
