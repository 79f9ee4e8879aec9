//! Node, colour and handle definitions.
//!
//! Nodes live in an [`Arena`](crate::arena::Arena) and link to each other by
//! `Option<u32>` slot indices rather than pointers. The only thing callers
//! ever hold is a [`NodeId`], which pairs the slot index with the slot's
//! generation and the issuing arena's owner id, so a handle outliving its node
//! or coming from another tree can be told apart from a live one.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Key type stored in the tree.
pub type Key = i64;

/// Node colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Black,
}

impl Color {
    pub fn is_black(self) -> bool {
        self == Color::Black
    }

    pub fn is_red(self) -> bool {
        self == Color::Red
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => f.write_str("red"),
            Color::Black => f.write_str("black"),
        }
    }
}

/// A single tree node.
#[derive(Clone, Debug)]
pub struct RbNode {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub key: Key,
    pub color: Color,
}

impl RbNode {
    /// Fresh, unlinked red node.
    pub fn new(key: Key) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            key,
            color: Color::Red,
        }
    }

    pub fn is_black(&self) -> bool {
        self.color.is_black()
    }
}

/// Tree-versioned handle to a node.
///
/// A handle resolves only in the tree that issued it. It stays valid until
/// the node it names is erased, or until an erase moves a different key into
/// it (see [`RbTree::erase`](crate::RbTree::erase)).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    pub(crate) owner: u64,
    pub(crate) index: u32,
    pub(crate) generation: u64,
}

impl NodeId {
    pub fn index(self) -> u32 {
        self.index
    }

    pub fn generation(self) -> u64 {
        self.generation
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}v{}", self.index, self.generation)
    }
}
