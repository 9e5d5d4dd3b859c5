// ordtree/src/tree/validate.rs
//
// Independent structural checker. It recomputes everything from the links and
// never trusts a cached value, so a broken fixup shows up here even when
// lookups still happen to work.

use log::warn;

use crate::common::{Color, Side};
use crate::error::{Result, TreeError};
use crate::node::NodeId;
use crate::store::NodeArena;

fn violation(message: String) -> TreeError {
    warn!("invariant violation: {}", message);
    TreeError::InvariantViolation(message)
}

/// Verifies, for the tree rooted at `root`:
/// - the root is black and has no parent,
/// - no red node has a red child,
/// - every path to an absent child crosses the same number of black nodes,
/// - keys are strictly ascending in order,
/// - every child's parent link points back at its parent,
/// - the arena holds no nodes unreachable from the root.
pub fn check<K: Ord>(nodes: &NodeArena<K>, root: Option<NodeId>) -> Result<()> {
    let Some(root) = root else {
        if nodes.is_empty() {
            return Ok(());
        }
        return Err(violation(format!("empty tree still owns {} nodes", nodes.len())));
    };
    let root_node = nodes
        .get(root)
        .ok_or_else(|| violation(format!("root {} is not a live node", root)))?;
    if root_node.color != Color::Black {
        return Err(violation("root is red".to_string()));
    }
    if root_node.parent.is_some() {
        return Err(violation("root has a parent link".to_string()));
    }

    let mut visited = 0usize;
    let mut previous: Option<&K> = None;
    check_subtree(nodes, root, &mut visited, &mut previous)?;

    if visited != nodes.len() {
        return Err(violation(format!(
            "{} nodes reachable from root but arena holds {}",
            visited,
            nodes.len()
        )));
    }
    Ok(())
}

/// Returns the black height of the subtree, absent children counting as one.
fn check_subtree<'a, K: Ord>(
    nodes: &'a NodeArena<K>,
    id: NodeId,
    visited: &mut usize,
    previous: &mut Option<&'a K>,
) -> Result<usize> {
    let node = nodes
        .get(id)
        .ok_or_else(|| violation(format!("dangling link to {}", id)))?;
    *visited += 1;
    if *visited > nodes.len() {
        return Err(violation("cycle in child links".to_string()));
    }

    let mut heights = [1usize; 2];
    for (slot, side) in [Side::Left, Side::Right].into_iter().enumerate() {
        let Some(child) = node.child(side) else {
            if side == Side::Left {
                visit_key(&node.key, previous)?;
            }
            continue;
        };
        let child_node = nodes
            .get(child)
            .ok_or_else(|| violation(format!("dangling link to {}", child)))?;
        if child_node.parent != Some(id) {
            return Err(violation(format!(
                "{} child {} does not link back to parent {}",
                if side == Side::Left { "left" } else { "right" },
                child,
                id
            )));
        }
        if node.color == Color::Red && child_node.color == Color::Red {
            return Err(violation(format!("red node {} has red child {}", id, child)));
        }
        heights[slot] = check_subtree(nodes, child, visited, previous)?;
        if side == Side::Left {
            visit_key(&node.key, previous)?;
        }
    }

    if heights[0] != heights[1] {
        return Err(violation(format!(
            "black height differs under {}: left {} right {}",
            id, heights[0], heights[1]
        )));
    }
    Ok(heights[0] + usize::from(node.color == Color::Black))
}

fn visit_key<'a, K: Ord>(key: &'a K, previous: &mut Option<&'a K>) -> Result<()> {
    if let Some(prev) = *previous {
        if prev >= key {
            return Err(violation("in-order keys are not strictly ascending".to_string()));
        }
    }
    *previous = Some(key);
    Ok(())
}

/// Node count of the longest downward path starting at `root`.
pub fn height<K>(nodes: &NodeArena<K>, root: Option<NodeId>) -> usize {
    let mut deepest = 0;
    let mut stack: Vec<(NodeId, usize)> = root.into_iter().map(|id| (id, 1)).collect();
    while let Some((id, depth)) = stack.pop() {
        deepest = deepest.max(depth);
        stack.extend(nodes.left(id).map(|c| (c, depth + 1)));
        stack.extend(nodes.right(id).map(|c| (c, depth + 1)));
    }
    deepest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::RedBlackTree;

    fn three() -> RedBlackTree<i32> {
        let mut tree = RedBlackTree::new();
        for k in [2, 1, 3] {
            tree.insert(k).unwrap();
        }
        tree
    }

    #[test]
    fn accepts_valid_trees() {
        let tree = three();
        assert!(check(&tree.nodes, tree.root).is_ok());
        let empty: RedBlackTree<i32> = RedBlackTree::new();
        assert!(check(&empty.nodes, empty.root).is_ok());
    }

    #[test]
    fn detects_red_root() {
        let mut tree = three();
        let root = tree.root.unwrap();
        tree.nodes.set_color(root, Color::Red);
        assert!(matches!(
            check(&tree.nodes, tree.root),
            Err(TreeError::InvariantViolation(_))
        ));
    }

    #[test]
    fn detects_red_red_edge() {
        let mut tree = three();
        let root = tree.root.unwrap();
        let left = tree.nodes.left(root).unwrap();
        let extra = tree.nodes.alloc(0).unwrap();
        tree.nodes.set_child(left, Side::Left, Some(extra));
        tree.nodes.set_parent(extra, Some(left));
        let err = check(&tree.nodes, tree.root).unwrap_err();
        assert!(err.to_string().contains("red child"), "{}", err);
    }

    #[test]
    fn detects_black_height_mismatch() {
        let mut tree = three();
        let root = tree.root.unwrap();
        let left = tree.nodes.left(root).unwrap();
        tree.nodes.set_color(left, Color::Black);
        let err = check(&tree.nodes, tree.root).unwrap_err();
        assert!(err.to_string().contains("black height"), "{}", err);
    }

    #[test]
    fn detects_order_violation() {
        let mut tree = three();
        let root = tree.root.unwrap();
        let left = tree.nodes.left(root).unwrap();
        tree.nodes.swap_keys(root, left);
        let err = check(&tree.nodes, tree.root).unwrap_err();
        assert!(err.to_string().contains("ascending"), "{}", err);
    }

    #[test]
    fn detects_broken_parent_link_and_orphans() {
        let mut tree = three();
        let root = tree.root.unwrap();
        let right = tree.nodes.right(root).unwrap();
        tree.nodes.set_parent(right, None);
        assert!(check(&tree.nodes, tree.root).is_err());

        let mut tree = three();
        tree.nodes.alloc(99).unwrap();
        let err = check(&tree.nodes, tree.root).unwrap_err();
        assert!(err.to_string().contains("reachable"), "{}", err);
    }

    #[test]
    fn height_counts_nodes() {
        let tree = three();
        assert_eq!(height(&tree.nodes, tree.root), 2);
        assert_eq!(height(&tree.nodes, None), 0);
    }
}
