//! Element registry: identity → node currently holding that identity
//!
//! The registry is a dense vector indexed by [`ElementId`]. An entry is `None`
//! once its element has been extracted. Identity `0` is reserved and never
//! issued, so the first element gets identity `1`.
//!
//! Sift operations exchange labels between two nodes; the caller must
//! [`relocate`](Registry::relocate) both identities in the same step so that
//! `registry[id]` always names the node whose label carries `id`.

use crate::node::{ElementId, NodeKey};

#[derive(Debug)]
pub(crate) struct Registry {
    slots: Vec<Option<NodeKey>>,
}

impl Registry {
    pub(crate) fn new() -> Self {
        Registry { slots: vec![None] }
    }

    /// The identity the next [`issue`](Registry::issue) call will hand out
    pub(crate) fn next_id(&self) -> ElementId {
        ElementId(self.slots.len())
    }

    /// Registers `key` under a fresh identity
    pub(crate) fn issue(&mut self, key: NodeKey) -> ElementId {
        let id = self.next_id();
        self.slots.push(Some(key));
        id
    }

    /// Node currently holding `id`, or `None` if absent or never issued
    pub(crate) fn locate(&self, id: ElementId) -> Option<NodeKey> {
        self.slots.get(id.0).copied().flatten()
    }

    /// Points a live identity at its new holder
    pub(crate) fn relocate(&mut self, id: ElementId, key: NodeKey) {
        let slot = &mut self.slots[id.0];
        debug_assert!(slot.is_some(), "relocating retired identity {id}");
        *slot = Some(key);
    }

    /// Marks `id` as absent; it is never reissued
    pub(crate) fn retire(&mut self, id: ElementId) {
        if let Some(slot) = self.slots.get_mut(id.0) {
            *slot = None;
        }
    }

    /// All live identities with their holders, in identity order
    pub(crate) fn live(&self) -> impl Iterator<Item = (ElementId, NodeKey)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(id, slot)| slot.map(|key| (ElementId(id), key)))
    }
}
