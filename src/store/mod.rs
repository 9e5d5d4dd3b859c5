// ordtree/src/store/mod.rs

pub mod arena;

// Re-export key items for easier access from `crate::store::`
pub use arena::NodeArena;
