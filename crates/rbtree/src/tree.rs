use std::fmt;

use tracing::debug;

use crate::arena::Arena;
use crate::assert::assert_red_black_tree;
use crate::error::{InvariantViolation, TreeError};
use crate::snapshot::{self, Snapshot};
use crate::types::{Color, Key, NodeId, RbNode};
use crate::{insert, print, remove, util};

/// Red-black tree over integer keys.
///
/// Nodes are owned by an internal arena and addressed through [`NodeId`]
/// handles. Duplicate keys are accepted and kept to the right of their equals.
/// Handles belong to the tree that issued them: a clone hands out its own, and
/// the original's handles are rejected by it.
///
/// ```
/// use rbtree::RbTree;
///
/// let mut tree = RbTree::new();
/// for k in [10, 5, 8] {
///     tree.insert(k);
/// }
/// let five = tree.find(5).unwrap();
/// assert_eq!(tree.erase(five), Ok(5));
/// assert_eq!(tree.to_sorted_vec(), vec![8, 10]);
/// ```
#[derive(Clone, Default)]
pub struct RbTree {
    arena: Arena,
    root: Option<u32>,
}

impl RbTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.arena.live()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts `key` and returns a handle to its node.
    pub fn insert(&mut self, key: Key) -> NodeId {
        let id = self.arena.alloc(RbNode::new(key));
        self.root = insert::insert(&mut self.arena, self.root, id.index);
        id
    }

    /// Handle of a node holding `key`, if any.
    pub fn find(&self, key: Key) -> Option<NodeId> {
        let mut curr = self.root;
        while let Some(i) = curr {
            let k = self.arena[i].key;
            if key == k {
                return Some(self.arena.id(i));
            }
            curr = if key < k {
                util::get_l(&self.arena, i)
            } else {
                util::get_r(&self.arena, i)
            };
        }
        None
    }

    pub fn contains(&self, key: Key) -> bool {
        self.find(key).is_some()
    }

    pub fn min(&self) -> Option<NodeId> {
        util::first(&self.arena, self.root).map(|i| self.arena.id(i))
    }

    pub fn max(&self) -> Option<NodeId> {
        util::last(&self.arena, self.root).map(|i| self.arena.id(i))
    }

    /// Key held by a live node.
    pub fn key(&self, id: NodeId) -> Option<Key> {
        self.arena.resolve(id).map(|i| self.arena[i].key)
    }

    pub fn color(&self, id: NodeId) -> Option<Color> {
        self.arena.resolve(id).map(|i| self.arena[i].color)
    }

    /// In-order successor of a live node.
    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        let i = self.arena.resolve(id)?;
        util::next(&self.arena, i).map(|n| self.arena.id(n))
    }

    /// In-order predecessor of a live node.
    pub fn prev(&self, id: NodeId) -> Option<NodeId> {
        let i = self.arena.resolve(id)?;
        util::prev(&self.arena, i).map(|n| self.arena.id(n))
    }

    /// Removes the node behind `id` and returns the key it held.
    ///
    /// `id` is invalidated. When the node has two children, its in-order
    /// successor's key moves into it and the successor's node is the one
    /// freed, so the successor's handle is invalidated as well. The moved key
    /// stays reachable through [`find`](Self::find).
    pub fn erase(&mut self, id: NodeId) -> Result<Key, TreeError> {
        let Some(z) = self.arena.resolve(id) else {
            debug!(handle = %id, "erase: stale handle");
            return Err(TreeError::InvalidHandle {
                index: id.index,
                generation: id.generation,
            });
        };

        let key = self.arena[z].key;
        let (root, detached) = remove::remove(&mut self.arena, self.root, z);
        self.root = root;
        self.arena.release(detached);
        if detached != z {
            self.arena.reissue(z);
        }
        Ok(key)
    }

    /// Removes one node holding `key`.
    pub fn remove(&mut self, key: Key) -> Option<Key> {
        let id = self.find(key)?;
        self.erase(id).ok()
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    /// Releases every node and consumes the tree. Returns the node count.
    pub fn destroy(self) -> usize {
        self.len()
    }

    /// Keys in ascending order.
    pub fn to_sorted_vec(&self) -> Vec<Key> {
        let mut out = Vec::with_capacity(self.len());
        out.extend(self.traverse().map(|(k, _)| k));
        out
    }

    /// Writes the smallest `buf.len()` keys into `buf` in ascending order and
    /// returns how many were written.
    pub fn to_sorted_array(&self, buf: &mut [Key]) -> usize {
        let mut written = 0;
        for (slot, (key, _)) in buf.iter_mut().zip(self.traverse()) {
            *slot = key;
            written += 1;
        }
        written
    }

    /// Lazy in-order walk yielding `(key, color)`.
    pub fn traverse(&self) -> Traverse<'_> {
        Traverse {
            arena: &self.arena,
            curr: util::first(&self.arena, self.root),
        }
    }

    /// Lazy in-order walk over node handles.
    pub fn handles(&self) -> Handles<'_> {
        Handles {
            arena: &self.arena,
            curr: util::first(&self.arena, self.root),
        }
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        util::height(&self.arena, self.root)
    }

    /// Checks all invariants and returns the black height of the root.
    pub fn assert_valid(&self) -> Result<usize, InvariantViolation> {
        let height = assert_red_black_tree(&self.arena, self.root)?;
        let reachable = util::size(&self.arena, self.root);
        if reachable != self.arena.live() {
            return Err(InvariantViolation::SizeMismatch {
                reachable,
                live: self.arena.live(),
            });
        }
        Ok(height)
    }

    /// Black nodes on the leftmost root-to-leaf path.
    pub fn black_height(&self) -> usize {
        let mut count = 0;
        let mut curr = self.root;
        while let Some(i) = curr {
            count += usize::from(self.arena[i].is_black());
            curr = util::get_l(&self.arena, i);
        }
        count
    }

    pub fn snapshot(&self) -> Snapshot {
        snapshot::capture(&self.arena, self.root, self.len())
    }

    /// Indented text dump of the tree shape.
    pub fn print(&self) -> String {
        print::print(&self.arena, self.root)
    }
}

impl fmt::Debug for RbTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.traverse()).finish()
    }
}

impl Extend<Key> for RbTree {
    fn extend<I: IntoIterator<Item = Key>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl FromIterator<Key> for RbTree {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        let mut tree = RbTree::new();
        tree.extend(iter);
        tree
    }
}

pub struct Traverse<'a> {
    arena: &'a Arena,
    curr: Option<u32>,
}

impl Iterator for Traverse<'_> {
    type Item = (Key, Color);

    fn next(&mut self) -> Option<Self::Item> {
        let i = self.curr?;
        self.curr = util::next(self.arena, i);
        let n = &self.arena[i];
        Some((n.key, n.color))
    }
}

pub struct Handles<'a> {
    arena: &'a Arena,
    curr: Option<u32>,
}

impl Iterator for Handles<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let i = self.curr?;
        self.curr = util::next(self.arena, i);
        Some(self.arena.id(i))
    }
}
