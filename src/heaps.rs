//! A fixed collection of addressable binomial min-heaps
//!
//! [`BinomialHeaps`] owns `n` independent heaps (indices `0..n`) that share one
//! node arena and one identity space. Every inserted element gets an
//! [`ElementId`] that stays valid until the element is extracted, no matter
//! how often it is moved between heaps or shuffled inside its tree.
//!
//! # Algorithm Overview
//!
//! Each heap is a forest of binomial trees with at most one tree per degree.
//! - **Insert**: union with a one-node forest (binary increment)
//! - **Move**: union of two forests (binary addition), the source ends empty
//! - **ExtractMin**: scan the roots, detach the minimum's children as a new
//!   forest and union it back
//! - **Update**: overwrite the value, then sift the label up and down
//! - **Delete**: overwrite the priority with a sentinel below every value,
//!   sift it to the root, then extract that root from the heap owning the tree
//!
//! Sifting swaps labels (value and identity together) between positions and
//! repoints the registry, so handles held by callers never go stale.

use crate::error::HeapError;
use crate::forest::Forest;
use crate::node::{ElementId, Label, Node, NodeKey, Priority, Value};
use crate::registry::Registry;
use slotmap::SlotMap;
use tracing::{debug, error, trace};

/// Collection of binomial min-heaps sharing one identity space
///
/// # Example
///
/// ```rust
/// use binomial_forest::BinomialHeaps;
///
/// let mut heaps = BinomialHeaps::new(2);
/// let a = heaps.insert(0, 30).unwrap();
/// heaps.insert(0, 20).unwrap();
/// heaps.insert(1, 25).unwrap();
///
/// heaps.update(a, 10);
/// assert_eq!(heaps.get_min(0), Ok(Some(10)));
///
/// heaps.move_heap(0, 1).unwrap();
/// assert_eq!(heaps.get_min(0), Ok(None));
/// assert_eq!(heaps.len(1), Ok(3));
///
/// heaps.delete(a);
/// assert_eq!(heaps.get_min(1), Ok(Some(20)));
/// ```
#[derive(Debug)]
pub struct BinomialHeaps {
    pub(crate) nodes: SlotMap<NodeKey, Node>,
    pub(crate) forests: Vec<Forest>,
    pub(crate) registry: Registry,
}

impl BinomialHeaps {
    /// Creates `heap_count` empty heaps, addressed as `0..heap_count`
    pub fn new(heap_count: usize) -> Self {
        BinomialHeaps {
            nodes: SlotMap::with_key(),
            forests: vec![Forest::default(); heap_count],
            registry: Registry::new(),
        }
    }

    /// Number of heaps in the collection
    pub fn heap_count(&self) -> usize {
        self.forests.len()
    }

    /// Number of elements in one heap
    pub fn len(&self, heap: usize) -> Result<usize, HeapError> {
        self.check_index(heap)?;
        Ok(self.forests[heap].node_count())
    }

    pub fn is_empty(&self, heap: usize) -> Result<bool, HeapError> {
        self.check_index(heap)?;
        Ok(self.forests[heap].is_empty())
    }

    /// Number of live elements across all heaps
    pub fn total_len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether `id` names a live element
    pub fn contains(&self, id: ElementId) -> bool {
        self.registry.locate(id).is_some()
    }

    /// Current value of a live element
    pub fn value_of(&self, id: ElementId) -> Option<Value> {
        let key = self.registry.locate(id)?;
        self.nodes[key].label.priority.value()
    }

    /// Index of the heap currently holding a live element
    ///
    /// **Time Complexity**: O(log n + number of heaps)
    pub fn heap_of(&self, id: ElementId) -> Option<usize> {
        let key = self.registry.locate(id)?;
        self.owning_heap(self.root_of(key))
    }

    /// Inserts `value` into `heap` and returns the new element's identity
    ///
    /// **Time Complexity**: O(log n) worst-case
    pub fn insert(&mut self, heap: usize, value: Value) -> Result<ElementId, HeapError> {
        self.check_index(heap)?;

        let id = self.registry.next_id();
        let key = self.nodes.insert(Node::new(value, id));
        self.registry.issue(key);

        let current = self.forests[heap].take_all();
        self.forests[heap] = if current.is_empty() {
            Forest::singleton(key)
        } else {
            self.union(current, Forest::singleton(key))
        };

        trace!(heap, %id, value, "inserted element");
        Ok(id)
    }

    /// Merges every element of heap `from` into heap `to`, leaving `from` empty
    ///
    /// Moving a heap onto itself changes nothing.
    ///
    /// **Time Complexity**: O(log n) worst-case
    pub fn move_heap(&mut self, from: usize, to: usize) -> Result<(), HeapError> {
        self.check_index(from)?;
        self.check_index(to)?;
        if from == to {
            debug!(heap = from, "move onto itself ignored");
            return Ok(());
        }

        let source = self.forests[from].take_all();
        let destination = self.forests[to].take_all();
        self.forests[to] = self.union(destination, source);

        debug!(from, to, len = self.forests[to].node_count(), "moved heap");
        Ok(())
    }

    /// Smallest value in `heap`, or `None` if it is empty
    ///
    /// Ties between equal values are irrelevant here since only the value is
    /// returned.
    ///
    /// **Time Complexity**: O(log n)
    pub fn get_min(&self, heap: usize) -> Result<Option<Value>, HeapError> {
        self.check_index(heap)?;
        Ok(self
            .min_root(heap)
            .and_then(|(_, root)| self.nodes[root].label.priority.value()))
    }

    /// Removes the minimum of `heap` and returns its identity and value
    ///
    /// Equal values are extracted in identity order. An empty heap yields
    /// `Ok(None)` and is left untouched.
    ///
    /// **Time Complexity**: O(log n) worst-case
    pub fn extract_min(&mut self, heap: usize) -> Result<Option<(ElementId, Value)>, HeapError> {
        self.check_index(heap)?;
        let extracted = self.extract_root(heap).and_then(|label| {
            let value = label.priority.value()?;
            trace!(heap, id = %label.id, value, "extracted minimum");
            Some((label.id, value))
        });
        Ok(extracted)
    }

    /// Removes a live element from whichever heap holds it
    ///
    /// Returns `false`, and changes nothing, when `id` is absent.
    ///
    /// **Time Complexity**: O(log n + number of heaps)
    pub fn delete(&mut self, id: ElementId) -> bool {
        let Some(key) = self.registry.locate(id) else {
            debug!(%id, "delete of absent element ignored");
            return false;
        };

        self.nodes[key].label.priority = Priority::Evicted;
        self.sift_up(key);

        // The sentinel now sits at the root of the tree containing `key`.
        let root = self.root_of(key);
        let Some(heap) = self.owning_heap(root) else {
            error!(%id, "tree root is not registered in any forest");
            return false;
        };

        let removed = self.extract_root(heap);
        debug_assert_eq!(removed.map(|label| label.id), Some(id));
        trace!(heap, %id, "deleted element");
        true
    }

    /// Replaces the value of a live element and restores heap order
    ///
    /// Returns `false`, and changes nothing, when `id` is absent.
    ///
    /// **Time Complexity**: O(log² n) worst-case (sifting down scans siblings)
    pub fn update(&mut self, id: ElementId, value: Value) -> bool {
        let Some(key) = self.registry.locate(id) else {
            debug!(%id, "update of absent element ignored");
            return false;
        };

        self.nodes[key].label.priority = Priority::Value(value);
        // Only one direction can make progress, running both is harmless.
        self.sift_up(key);
        self.sift_down(key);

        trace!(%id, value, "updated element");
        true
    }

    fn check_index(&self, heap: usize) -> Result<(), HeapError> {
        if heap < self.forests.len() {
            Ok(())
        } else {
            Err(HeapError::InvalidHeapIndex {
                index: heap,
                count: self.forests.len(),
            })
        }
    }

    /// Root with the smallest label, as `(degree, root)`
    fn min_root(&self, heap: usize) -> Option<(usize, NodeKey)> {
        self.forests[heap]
            .roots()
            .min_by_key(|&(_, root)| self.nodes[root].label)
    }

    /// Removes the minimum root of `heap` from the arena and returns its label
    fn extract_root(&mut self, heap: usize) -> Option<Label> {
        let (degree, min_root) = self.min_root(heap)?;

        let mut remaining = self.forests[heap].take_all();
        remaining.take(degree);
        let children = self.detach_children(min_root);
        self.forests[heap] = self.union(remaining, children);

        let label = self.nodes[min_root].label;
        self.nodes.remove(min_root);
        self.registry.retire(label.id);
        Some(label)
    }

    /// Turns the children of `root` into a forest of independent roots
    ///
    /// A degree-`d` root has exactly one child of each degree below `d`, so
    /// every child lands in its own slot.
    fn detach_children(&mut self, root: NodeKey) -> Forest {
        let mut children = Forest::with_width(usize::from(self.nodes[root].degree));
        let mut next = self.nodes[root].child.take();

        while let Some(child) = next {
            let node = &mut self.nodes[child];
            next = node.sibling.take();
            node.parent = None;
            let degree = usize::from(node.degree);
            children.put(degree, child);
        }

        children
    }

    /// Physical root of the tree containing `key`
    fn root_of(&self, mut key: NodeKey) -> NodeKey {
        while let Some(parent) = self.nodes[key].parent {
            key = parent;
        }
        key
    }

    /// Heap whose forest holds `root` in the slot matching its degree
    ///
    /// Roots carry no back reference to their heap, so this scans every forest.
    fn owning_heap(&self, root: NodeKey) -> Option<usize> {
        let degree = self.nodes[root].degree;
        self.forests
            .iter()
            .position(|forest| forest.holds_root(root, degree))
    }
}
