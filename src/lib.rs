// ordtree/src/lib.rs

//! Ordered key index backed by an arena-allocated red-black tree, plus a
//! plain binary search tree and an AVL tree sharing the same `OrderedIndex`
//! contract.
//!
//! ```
//! use ordtree::{RedBlackTree, TraversalOrder};
//!
//! let mut tree = RedBlackTree::new();
//! for k in [20, 10, 30] {
//!     tree.insert(k).unwrap();
//! }
//! assert_eq!(tree.to_sequence(TraversalOrder::LevelOrder), vec![20, 10, 30]);
//! assert_eq!(tree.remove(&10), Ok(10));
//! ```

// Declare all modules
pub mod common;
pub mod companion;
pub mod error;
pub mod index;
pub mod node;
pub mod store;
pub mod tree;

pub use common::{Color, Side, TraversalOrder, TreeConfig};
pub use companion::{AvlTree, BinarySortTree};
pub use error::{Result, TreeError};
pub use index::OrderedIndex;
pub use tree::{Iter, NodeView, RedBlackTree};
