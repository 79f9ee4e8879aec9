use crate::types::Key;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    #[error("node handle #{index}v{generation} does not refer to a live node of this tree")]
    InvalidHandle { index: u32, generation: u64 },
}

/// A broken red-black or search-tree invariant, as reported by
/// [`assert_red_black_tree`](crate::assert::assert_red_black_tree).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation {
    #[error("root has a parent link")]
    RootHasParent,
    #[error("root is not black")]
    RedRoot,
    #[error("broken parent link on child of key {key}")]
    BrokenParentLink { key: Key },
    #[error("red node {key} has a red child")]
    RedRed { key: Key },
    #[error("black height mismatch under key {key}: left {left}, right {right}")]
    BlackHeightMismatch { key: Key, left: usize, right: usize },
    #[error("node order violated: {prev} precedes {next}")]
    OrderViolated { prev: Key, next: Key },
    #[error("tree reaches {reachable} nodes but the arena holds {live}")]
    SizeMismatch { reachable: usize, live: usize },
}
