// ordtree/src/tree/modification.rs
//
// Rotations and the two red-black fixup loops. Every routine is written once
// for a `Side` and covers both mirror images.

use log::trace;

use crate::common::{Color, Side};
use crate::node::NodeId;

use super::red_black_tree::RedBlackTree;

/// Rotates `pivot` down towards `dir`: its child on the opposite side takes
/// its place, and that child's inner subtree moves across to `pivot`.
///
/// ```text
///   rotate(p, Left)             rotate(p, Right)
///     p           c               p           c
///    / \         / \             / \         / \
///   a   c  ->   p   z           c   z  ->   a   p
///      / \     / \             / \             / \
///     y   z   a   y           a   y           y   z
/// ```
///
/// In-order key sequence and all uninvolved subtrees are preserved. A no-op
/// if the child that should come up is missing.
pub(super) fn rotate<K>(tree: &mut RedBlackTree<K>, pivot: NodeId, dir: Side) {
    let Some(up) = tree.nodes.child(pivot, dir.opposite()) else {
        return;
    };
    trace!("rotate {:?} at {}", dir, pivot);

    let inner = tree.nodes.child(up, dir);
    tree.nodes.set_child(pivot, dir.opposite(), inner);
    if let Some(inner) = inner {
        tree.nodes.set_parent(inner, Some(pivot));
    }

    let above = tree.nodes.parent(pivot);
    tree.nodes.set_parent(up, above);
    match above {
        None => tree.root = Some(up),
        Some(above) => {
            if let Some(side) = tree.nodes.side_of(above, pivot) {
                tree.nodes.set_child(above, side, Some(up));
            }
        }
    }

    tree.nodes.set_child(up, dir, Some(pivot));
    tree.nodes.set_parent(pivot, Some(up));
}

/// Restores the red-black invariants after `node` was attached as a red leaf.
///
/// Runs while the current node's parent is red. A red uncle is resolved by
/// recoloring and moves the violation two levels up; a black uncle is
/// resolved by at most two rotations and ends the loop.
pub(super) fn insert_fixup<K>(tree: &mut RedBlackTree<K>, mut node: NodeId) {
    while let Some(parent) = tree.nodes.parent(node) {
        if tree.nodes.color_of(Some(parent)).is_black() {
            break;
        }
        // A red parent is never the root, so the grandparent exists.
        let Some(grandparent) = tree.nodes.parent(parent) else {
            break;
        };
        let Some(parent_side) = tree.nodes.side_of(grandparent, parent) else {
            break;
        };
        let uncle = tree.nodes.child(grandparent, parent_side.opposite());

        if let Some(uncle) = uncle.filter(|&u| tree.nodes.color_of(Some(u)).is_red()) {
            trace!("insert fixup at {}: red uncle, recolor", node);
            tree.nodes.set_color(parent, Color::Black);
            tree.nodes.set_color(uncle, Color::Black);
            tree.nodes.set_color(grandparent, Color::Red);
            node = grandparent;
            continue;
        }

        // Black uncle. Straighten a zig-zag into a same-side chain first.
        let mut top = parent;
        if tree.nodes.side_of(parent, node) == Some(parent_side.opposite()) {
            trace!("insert fixup at {}: black uncle, zig-zag", node);
            rotate(tree, parent, parent_side);
            top = node;
        } else {
            trace!("insert fixup at {}: black uncle, same-side chain", node);
        }
        tree.nodes.set_color(top, Color::Black);
        tree.nodes.set_color(grandparent, Color::Red);
        rotate(tree, grandparent, parent_side.opposite());
        break;
    }

    if let Some(root) = tree.root {
        tree.nodes.set_color(root, Color::Black);
    }
}

/// Repays the black-height deficit that removing the black leaf `node` would
/// cause. Must run while `node` is still linked into the tree.
///
/// Each pass looks at the sibling of the current node: a red sibling is
/// rotated up to expose a black one; a black sibling with two black children
/// turns red and pushes the deficit to the parent; a black sibling with a red
/// child absorbs the deficit with one or two rotations and ends the loop.
pub(super) fn delete_fixup<K>(tree: &mut RedBlackTree<K>, mut node: NodeId) {
    while Some(node) != tree.root && tree.nodes.color_of(Some(node)).is_black() {
        let Some(parent) = tree.nodes.parent(node) else {
            break;
        };
        let Some(side) = tree.nodes.side_of(parent, node) else {
            break;
        };
        let far_side = side.opposite();

        let mut sibling = tree.nodes.child(parent, far_side);
        if let Some(red_sibling) = sibling.filter(|&s| tree.nodes.color_of(Some(s)).is_red()) {
            trace!("delete fixup at {}: red sibling", node);
            tree.nodes.set_color(red_sibling, Color::Black);
            tree.nodes.set_color(parent, Color::Red);
            rotate(tree, parent, side);
            sibling = tree.nodes.child(parent, far_side);
        }

        // The deficit side has black height >= 1, so a real sibling exists.
        let Some(mut sibling) = sibling else {
            break;
        };
        let near = tree.nodes.child(sibling, side);
        let far = tree.nodes.child(sibling, far_side);

        if tree.nodes.color_of(near).is_black() && tree.nodes.color_of(far).is_black() {
            trace!("delete fixup at {}: black sibling, black nephews", node);
            tree.nodes.set_color(sibling, Color::Red);
            node = parent;
            continue;
        }

        if tree.nodes.color_of(far).is_black() {
            trace!("delete fixup at {}: black sibling, red near nephew", node);
            if let Some(near) = near {
                tree.nodes.set_color(near, Color::Black);
            }
            tree.nodes.set_color(sibling, Color::Red);
            rotate(tree, sibling, far_side);
            let Some(rotated) = tree.nodes.child(parent, far_side) else {
                break;
            };
            sibling = rotated;
        }

        trace!("delete fixup at {}: black sibling, red far nephew", node);
        let parent_color = tree.nodes.color_of(Some(parent));
        tree.nodes.set_color(sibling, parent_color);
        if let Some(far) = tree.nodes.child(sibling, far_side) {
            tree.nodes.set_color(far, Color::Black);
        }
        tree.nodes.set_color(parent, Color::Black);
        rotate(tree, parent, side);
        match tree.root {
            Some(root) => node = root,
            None => return,
        }
        break;
    }

    tree.nodes.set_color(node, Color::Black);
}
