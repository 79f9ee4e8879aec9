//! Serializable nested view of a tree, for JSON dumps and golden tests.

use serde::{Deserialize, Serialize};

use crate::arena::Arena;
use crate::types::{Color, Key};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotNode {
    pub key: Key,
    pub color: Color,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<Box<SnapshotNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<Box<SnapshotNode>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub len: usize,
    pub root: Option<SnapshotNode>,
}

pub(crate) fn capture(arena: &Arena, root: Option<u32>, len: usize) -> Snapshot {
    Snapshot {
        len,
        root: root.map(|i| node(arena, i)),
    }
}

fn node(arena: &Arena, i: u32) -> SnapshotNode {
    let n = &arena[i];
    SnapshotNode {
        key: n.key,
        color: n.color,
        left: n.l.map(|l| Box::new(node(arena, l))),
        right: n.r.map(|r| Box::new(node(arena, r))),
    }
}
