// ordtree/src/tree/mod.rs

pub mod red_black_tree;
pub mod cursor;
pub mod types;
pub mod validate;

mod core_logic;
mod modification;

// Re-export the main RedBlackTree struct for easier access
pub use red_black_tree::RedBlackTree;
pub use cursor::Iter;
pub use types::NodeView;
