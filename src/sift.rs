//! Identity-preserving sift operations
//!
//! The tree shape is a fixed scaffold; labels (value and identity together)
//! move across it. A sift step swaps two labels and repoints both registry
//! entries, so every outstanding [`ElementId`](crate::ElementId) keeps naming
//! its element.

use crate::heaps::BinomialHeaps;
use crate::node::{Node, NodeKey};
use slotmap::SlotMap;

/// Iterator over the children of a node, highest degree first
pub(crate) struct Children<'a> {
    nodes: &'a SlotMap<NodeKey, Node>,
    next: Option<NodeKey>,
}

impl Iterator for Children<'_> {
    type Item = NodeKey;

    fn next(&mut self) -> Option<NodeKey> {
        let current = self.next?;
        self.next = self.nodes[current].sibling;
        Some(current)
    }
}

impl BinomialHeaps {
    pub(crate) fn children(&self, node: NodeKey) -> Children<'_> {
        Children {
            nodes: &self.nodes,
            next: self.nodes[node].child,
        }
    }

    /// Exchanges the labels of two nodes and the registry entries naming them
    pub(crate) fn swap_labels(&mut self, a: NodeKey, b: NodeKey) {
        let label_a = self.nodes[a].label;
        let label_b = self.nodes[b].label;
        self.nodes[a].label = label_b;
        self.nodes[b].label = label_a;
        self.registry.relocate(label_a.id, b);
        self.registry.relocate(label_b.id, a);
    }

    /// Moves the label at `node` toward the root while it beats its parent
    ///
    /// Returns the position where the label came to rest.
    ///
    /// **Time Complexity**: O(log n)
    pub(crate) fn sift_up(&mut self, mut node: NodeKey) -> NodeKey {
        while let Some(parent) = self.nodes[node].parent {
            if self.nodes[node].label >= self.nodes[parent].label {
                break;
            }
            self.swap_labels(node, parent);
            node = parent;
        }
        node
    }

    /// Moves the label at `node` toward the leaves while a child beats it
    ///
    /// Returns the position where the label came to rest.
    ///
    /// **Time Complexity**: O(log² n), each level scans up to log n siblings
    pub(crate) fn sift_down(&mut self, mut node: NodeKey) -> NodeKey {
        loop {
            let Some(min_child) = self
                .children(node)
                .min_by_key(|&child| self.nodes[child].label)
            else {
                break;
            };
            if self.nodes[min_child].label >= self.nodes[node].label {
                break;
            }
            self.swap_labels(node, min_child);
            node = min_child;
        }
        node
    }
}
