// ordtree/src/common.rs

use serde::{Deserialize, Serialize};

use crate::error::{Result, TreeError};

/// Largest number of live nodes a red-black tree can hold; bounded by the
/// `u32` handle space of the node arena.
pub const MAX_NODES: usize = u32::MAX as usize;

/// The one-bit color tag of a red-black node.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    pub fn is_red(self) -> bool {
        self == Color::Red
    }

    pub fn is_black(self) -> bool {
        self == Color::Black
    }
}

/// Which child link of a parent a node hangs from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Order in which a traversal export visits the keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TraversalOrder {
    PreOrder,
    #[default]
    InOrder,
    PostOrder,
    /// Breadth-first, left to right within a level.
    LevelOrder,
}

/// Configuration for a red-black tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TreeConfig {
    /// Number of node slots reserved up front in the arena.
    pub initial_capacity: usize,
    /// Run the structural checker after every successful insert or remove.
    /// Meant for tests and debugging; it makes every mutation O(n).
    pub verify_invariants: bool,
}

impl Default for TreeConfig {
    fn default() -> Self {
        TreeConfig {
            initial_capacity: 0,
            verify_invariants: false,
        }
    }
}

impl TreeConfig {
    pub fn validate(&self) -> Result<()> {
        if self.initial_capacity > MAX_NODES {
            return Err(TreeError::ConfigError(format!(
                "initial_capacity {} exceeds the maximum of {} nodes",
                self.initial_capacity, MAX_NODES
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(TreeConfig::default().validate().is_ok());
    }

    #[test]
    fn config_reads_camel_case_and_fills_defaults() {
        let config: TreeConfig = serde_json::from_str(r#"{"verifyInvariants": true}"#).unwrap();
        assert!(config.verify_invariants);
        assert_eq!(config.initial_capacity, 0);

        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"initialCapacity":0,"verifyInvariants":true}"#);
    }

    #[test]
    fn traversal_order_serializes_camel_case() {
        let order: TraversalOrder = serde_json::from_str(r#""levelOrder""#).unwrap();
        assert_eq!(order, TraversalOrder::LevelOrder);
        assert_eq!(TraversalOrder::default(), TraversalOrder::InOrder);
    }

    #[test]
    fn side_opposite_flips() {
        assert_eq!(Side::Left.opposite(), Side::Right);
        assert_eq!(Side::Right.opposite(), Side::Left);
    }
}
