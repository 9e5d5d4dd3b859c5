// ordtree/src/error.rs

use thiserror::Error;

/// Error type shared by every tree in the crate.
///
/// All variants are recoverable rejections: an operation that returns one of
/// them has left the tree exactly as it found it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("Key argument is absent")]
    NullKey,

    #[error("Key is already present in tree")]
    DuplicateKey,

    #[error("Key not found in tree")]
    KeyNotFound,

    #[error("Attempted to operate on an empty tree where not allowed")]
    EmptyTree,

    #[error("Node arena is full ({0} nodes)")]
    CapacityExhausted(usize),

    #[error("Tree invariant violated: {0}")]
    InvariantViolation(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type alias for tree operations.
pub type Result<T> = std::result::Result<T, TreeError>;
