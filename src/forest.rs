//! Per-heap forest of binomial tree roots
//!
//! A forest is a sparse vector indexed by degree: slot `d` is either empty or
//! holds the root of a tree of degree `d` (exactly `2^d` nodes). The occupied
//! slots mirror the binary representation of the heap's size.
//!
//! The forest only stores keys; the nodes themselves live in the engine arena.

use crate::degree::{tree_size, Degree};
use crate::node::NodeKey;
use std::mem;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct Forest {
    slots: Vec<Option<NodeKey>>,
}

impl Forest {
    /// A forest with one degree-0 tree
    pub(crate) fn singleton(root: NodeKey) -> Self {
        Forest {
            slots: vec![Some(root)],
        }
    }

    /// An empty forest with room for `width` degrees
    pub(crate) fn with_width(width: usize) -> Self {
        Forest {
            slots: vec![None; width],
        }
    }

    /// Number of degree slots, occupied or not
    pub(crate) fn width(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    pub(crate) fn get(&self, degree: usize) -> Option<NodeKey> {
        self.slots.get(degree).copied().flatten()
    }

    /// Removes and returns the root at `degree`
    pub(crate) fn take(&mut self, degree: usize) -> Option<NodeKey> {
        self.slots.get_mut(degree).and_then(Option::take)
    }

    /// Places `root` at `degree`, growing the slot vector if needed
    pub(crate) fn put(&mut self, degree: usize, root: NodeKey) {
        if self.slots.len() <= degree {
            self.slots.resize(degree + 1, None);
        }
        debug_assert!(self.slots[degree].is_none(), "degree slot {degree} already occupied");
        self.slots[degree] = Some(root);
    }

    /// Appends the next-higher degree slot
    pub(crate) fn push(&mut self, root: Option<NodeKey>) {
        self.slots.push(root);
    }

    /// Whether `root` occupies exactly the slot for `degree`
    pub(crate) fn holds_root(&self, root: NodeKey, degree: Degree) -> bool {
        self.get(usize::from(degree)) == Some(root)
    }

    /// Occupied slots as `(degree, root)` pairs, lowest degree first
    pub(crate) fn roots(&self) -> impl Iterator<Item = (usize, NodeKey)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(degree, slot)| slot.map(|root| (degree, root)))
    }

    /// Number of elements held, derived from the occupied degrees
    pub(crate) fn node_count(&self) -> usize {
        self.roots()
            .map(|(degree, _)| tree_size(Degree::try_from(degree).unwrap_or(Degree::MAX)))
            .sum()
    }

    /// Empties the forest and returns its previous contents
    pub(crate) fn take_all(&mut self) -> Forest {
        mem::take(self)
    }
}
