//! Slot arena that owns every node of a tree.
//!
//! Vacated slots go on a free list and are reused by later allocations. Each
//! slot carries a generation counter that is bumped whenever the slot is
//! released or reissued, and each arena carries a process-unique owner id.
//! A [`NodeId`] resolves only in the arena that issued it and only while its
//! slot's generation is unchanged.

use std::ops::{Index, IndexMut};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::types::{NodeId, RbNode};

static NEXT_OWNER: AtomicU64 = AtomicU64::new(0);

fn next_owner() -> u64 {
    NEXT_OWNER.fetch_add(1, Ordering::Relaxed)
}

#[derive(Clone, Debug)]
struct Slot {
    generation: u64,
    node: Option<RbNode>,
}

#[derive(Debug)]
pub struct Arena {
    owner: u64,
    slots: Vec<Slot>,
    vacant: Vec<u32>,
    live: usize,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            owner: next_owner(),
            slots: Vec::new(),
            vacant: Vec::new(),
            live: 0,
        }
    }
}

/// Copies get a fresh owner id: handles from the original do not resolve in
/// the copy.
impl Clone for Arena {
    fn clone(&self) -> Self {
        Self {
            owner: next_owner(),
            slots: self.slots.clone(),
            vacant: self.vacant.clone(),
            live: self.live,
        }
    }
}

impl Arena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn owner(&self) -> u64 {
        self.owner
    }

    /// Number of occupied slots.
    pub fn live(&self) -> usize {
        self.live
    }

    /// Number of slots ever allocated, occupied or not.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn alloc(&mut self, node: RbNode) -> NodeId {
        self.live += 1;
        if let Some(index) = self.vacant.pop() {
            let slot = &mut self.slots[index as usize];
            slot.node = Some(node);
            let generation = slot.generation;
            return self.handle(index, generation);
        }
        let index = u32::try_from(self.slots.len()).expect("arena index exceeds u32 range");
        self.slots.push(Slot {
            generation: 0,
            node: Some(node),
        });
        self.handle(index, 0)
    }

    /// Frees slot `index` and returns the node it held.
    ///
    /// The slot's generation is bumped, so every handle issued for it so far
    /// stops resolving.
    pub fn release(&mut self, index: u32) -> RbNode {
        let slot = &mut self.slots[index as usize];
        let node = slot.node.take().expect("released slot is occupied");
        slot.generation += 1;
        self.vacant.push(index);
        self.live -= 1;
        node
    }

    /// Bumps the generation of an occupied slot and returns its new handle.
    pub fn reissue(&mut self, index: u32) -> NodeId {
        let slot = &mut self.slots[index as usize];
        debug_assert!(slot.node.is_some());
        slot.generation += 1;
        let generation = slot.generation;
        self.handle(index, generation)
    }

    /// Current handle for occupied slot `index`.
    pub fn id(&self, index: u32) -> NodeId {
        self.handle(index, self.slots[index as usize].generation)
    }

    fn handle(&self, index: u32, generation: u64) -> NodeId {
        NodeId {
            owner: self.owner,
            index,
            generation,
        }
    }

    /// Maps a handle back to its slot index if this arena issued it and the
    /// handle is still current.
    pub fn resolve(&self, id: NodeId) -> Option<u32> {
        if id.owner != self.owner {
            return None;
        }
        let slot = self.slots.get(id.index as usize)?;
        if slot.generation == id.generation && slot.node.is_some() {
            Some(id.index)
        } else {
            None
        }
    }

    pub fn get(&self, index: u32) -> Option<&RbNode> {
        self.slots.get(index as usize)?.node.as_ref()
    }

    /// Drops every node. Generations survive so old handles stay stale.
    pub fn clear(&mut self) {
        self.vacant.clear();
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.node.take().is_some() {
                slot.generation += 1;
            }
            self.vacant.push(index as u32);
        }
        self.live = 0;
    }
}

impl Index<u32> for Arena {
    type Output = RbNode;

    fn index(&self, index: u32) -> &RbNode {
        self.slots[index as usize]
            .node
            .as_ref()
            .expect("linked slot is occupied")
    }
}

impl IndexMut<u32> for Arena {
    fn index_mut(&mut self, index: u32) -> &mut RbNode {
        self.slots[index as usize]
            .node
            .as_mut()
            .expect("linked slot is occupied")
    }
}
