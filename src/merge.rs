//! Merge engine: linking trees and unioning forests
//!
//! **Linking** two binomial trees of degree `k` makes the root with the larger
//! label the first child of the other, producing a tree of degree `k+1`.
//!
//! **Union** walks both forests degree by degree like a ripple-carry adder.
//! At each degree up to three trees can meet (one from each input plus the
//! carry from the previous degree):
//! - 0 or 1 trees: the survivor, if any, is placed and no carry is produced
//! - 2 trees: they are linked into the carry, the slot stays empty
//! - 3 trees: the incoming carry is placed, the two input trees become the
//!   new carry
//!
//! A carry left after the last degree becomes the new highest slot.
//!
//! Arena keys never move, so the registry entries of roots placed into the
//! result stay valid without being rewritten.

use crate::degree::checked_increment;
use crate::forest::Forest;
use crate::heaps::BinomialHeaps;
use crate::node::NodeKey;
use smallvec::SmallVec;

impl BinomialHeaps {
    /// Links two roots of equal degree and returns the surviving root
    ///
    /// **Time Complexity**: O(1)
    pub(crate) fn link(&mut self, a: NodeKey, b: NodeKey) -> NodeKey {
        debug_assert_eq!(self.nodes[a].degree, self.nodes[b].degree);
        debug_assert!(self.nodes[a].is_root() && self.nodes[b].is_root());

        let (root, child) = if self.nodes[b].label < self.nodes[a].label {
            (b, a)
        } else {
            (a, b)
        };

        // The new child outranks every existing child, so it heads the chain.
        let first_child = self.nodes[root].child;
        let child_node = &mut self.nodes[child];
        child_node.parent = Some(root);
        child_node.sibling = first_child;

        let root_node = &mut self.nodes[root];
        root_node.child = Some(child);
        root_node.degree = checked_increment(root_node.degree);
        root
    }

    /// Unions two forests into one canonical forest, consuming both
    ///
    /// **Time Complexity**: O(log n) worst-case
    pub(crate) fn union(&mut self, mut left: Forest, mut right: Forest) -> Forest {
        let width = left.width().max(right.width());
        let mut merged = Forest::default();
        let mut carry: Option<NodeKey> = None;

        for degree in 0..width {
            let trees: SmallVec<[NodeKey; 3]> = [left.take(degree), right.take(degree), carry.take()]
                .into_iter()
                .flatten()
                .collect();

            match trees.as_slice() {
                [] => merged.push(None),
                [tree] => merged.push(Some(*tree)),
                [a, b] => {
                    merged.push(None);
                    carry = Some(self.link(*a, *b));
                }
                [a, b, incoming] => {
                    merged.push(Some(*incoming));
                    carry = Some(self.link(*a, *b));
                }
                _ => unreachable!("at most three trees share a degree"),
            }
        }

        if let Some(tree) = carry {
            merged.push(Some(tree));
        }

        if cfg!(debug_assertions) {
            for (degree, root) in merged.roots() {
                let node = &self.nodes[root];
                debug_assert_eq!(usize::from(node.degree), degree);
                debug_assert!(node.is_root());
                debug_assert_eq!(self.registry.locate(node.label.id), Some(root));
            }
        }

        merged
    }
}
