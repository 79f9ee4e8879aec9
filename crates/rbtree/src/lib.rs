//! Arena-backed red-black tree over integer keys.
//!
//! Nodes link to each other through `Option<u32>` slot indices into an
//! [`Arena`](arena::Arena) rather than through pointers, and callers address
//! nodes with generation-checked [`NodeId`] handles. An erased node's handle
//! stops resolving instead of dangling.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Key`], [`Color`], [`RbNode`], [`NodeId`] |
//! [`arena`] | slot arena with per-slot generations |
//! [`util`] | link accessors, `first` / `last` / `next` / `prev`, `size`, `height` |
//! `rotate` | left / right rotations |
//! `insert` | BST descent plus red-red fixup |
//! `remove` | splice plus double-black fixup |
//! [`assert`] | structural invariant checker |
//! [`print`] | indented text dump |
//! [`snapshot`] | serde-serializable nested view |
//! [`tree`] | [`RbTree`], the public entry point |

pub mod arena;
pub mod assert;
pub mod error;
mod insert;
pub mod print;
mod remove;
mod rotate;
pub mod snapshot;
pub mod tree;
pub mod types;
pub mod util;

pub use assert::assert_red_black_tree;
pub use error::{InvariantViolation, TreeError};
pub use snapshot::{Snapshot, SnapshotNode};
pub use tree::{Handles, RbTree, Traverse};
pub use types::{Color, Key, NodeId, RbNode};
