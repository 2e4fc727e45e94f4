//! Structural self-check
//!
//! [`BinomialHeaps::check_invariants`] walks every forest and verifies:
//! - shape: slot `d` holds a parentless root of degree `d` whose children have
//!   degrees `d-1, ..., 0` in chain order, so the tree spans `2^d` nodes
//! - heap order: every child's label is greater than its parent's
//! - registry consistency: each visited node is what the registry returns for
//!   its identity, and every live identity is reached
//! - single ownership: no node is reachable twice
//! - no label still carries the deletion sentinel
//!
//! Returns the first violation found. Tests call this after every step.

use crate::degree::tree_size;
use crate::heaps::BinomialHeaps;
use crate::node::{ElementId, NodeKey, Priority};
use slotmap::SecondaryMap;
use thiserror::Error;

/// A broken structural property, with enough context to locate it
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("heap {heap}: slot {slot} holds a root of degree {degree}")]
    DegreeMismatch { heap: usize, slot: usize, degree: u8 },

    #[error("heap {heap}: root in slot {slot} has a parent")]
    RootHasParent { heap: usize, slot: usize },

    #[error("heap {heap}: tree in slot {slot} spans {actual} nodes, expected {expected}")]
    TreeSize {
        heap: usize,
        slot: usize,
        expected: usize,
        actual: usize,
    },

    #[error("element {id}: child degrees {actual:?} do not count down from {expected}")]
    ChildDegrees {
        id: ElementId,
        expected: u8,
        actual: Vec<u8>,
    },

    #[error("element {child}: parent link does not point at {parent}")]
    ParentLink { parent: ElementId, child: ElementId },

    #[error("element {child} is ordered before its parent {parent}")]
    HeapOrder { parent: ElementId, child: ElementId },

    #[error("element {id}: registry does not point at its holder")]
    Registry { id: ElementId },

    #[error("element {id} is reachable more than once")]
    SharedNode { id: ElementId },

    #[error("element {id} still carries the deletion sentinel")]
    Evicted { id: ElementId },

    #[error("{reachable} nodes reachable, {live} identities live, {allocated} nodes allocated")]
    Leak {
        reachable: usize,
        live: usize,
        allocated: usize,
    },
}

impl BinomialHeaps {
    /// Verifies every structural invariant of every heap
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let mut seen: SecondaryMap<NodeKey, ()> = SecondaryMap::new();

        for (heap, forest) in self.forests.iter().enumerate() {
            for (slot, root) in forest.roots() {
                let node = &self.nodes[root];
                if usize::from(node.degree) != slot {
                    return Err(InvariantViolation::DegreeMismatch {
                        heap,
                        slot,
                        degree: node.degree,
                    });
                }
                if !node.is_root() {
                    return Err(InvariantViolation::RootHasParent { heap, slot });
                }

                let actual = self.check_tree(root, &mut seen)?;
                let expected = tree_size(node.degree);
                if actual != expected {
                    return Err(InvariantViolation::TreeSize {
                        heap,
                        slot,
                        expected,
                        actual,
                    });
                }
            }
        }

        let live = self.registry.live().count();
        if seen.len() != live || live != self.nodes.len() {
            return Err(InvariantViolation::Leak {
                reachable: seen.len(),
                live,
                allocated: self.nodes.len(),
            });
        }
        Ok(())
    }

    /// Checks one tree and returns its node count
    fn check_tree(
        &self,
        root: NodeKey,
        seen: &mut SecondaryMap<NodeKey, ()>,
    ) -> Result<usize, InvariantViolation> {
        let mut stack = vec![root];
        let mut count = 0;

        while let Some(key) = stack.pop() {
            let node = &self.nodes[key];
            let id = node.label.id;
            if seen.insert(key, ()).is_some() {
                return Err(InvariantViolation::SharedNode { id });
            }
            if node.label.priority == Priority::Evicted {
                return Err(InvariantViolation::Evicted { id });
            }
            if self.registry.locate(id) != Some(key) {
                return Err(InvariantViolation::Registry { id });
            }
            count += 1;

            let mut degrees = Vec::with_capacity(usize::from(node.degree));
            for child in self.children(key) {
                let child_node = &self.nodes[child];
                if child_node.parent != Some(key) {
                    return Err(InvariantViolation::ParentLink {
                        parent: id,
                        child: child_node.label.id,
                    });
                }
                if child_node.label < node.label {
                    return Err(InvariantViolation::HeapOrder {
                        parent: id,
                        child: child_node.label.id,
                    });
                }
                degrees.push(child_node.degree);
                stack.push(child);
            }

            if !degrees.iter().copied().eq((0..node.degree).rev()) {
                return Err(InvariantViolation::ChildDegrees {
                    id,
                    expected: node.degree,
                    actual: degrees,
                });
            }
        }

        Ok(count)
    }
}
