//! Tree nodes and the labels they carry
//!
//! Every element lives in a [`Node`] stored in the engine's arena. The node is
//! the *position* in a binomial tree; the [`Label`] it holds is the *element*
//! (its value and its external identity). Sift operations move labels between
//! positions and never relink nodes, so a node's links only change during
//! merges and extraction.
//!
//! **Memory Model**: `child` and `sibling` are owning edges (a node is owned by
//! exactly one parent's child chain or one forest slot), `parent` is a back
//! edge. All three are arena keys, so there is no shared ownership.

use crate::degree::Degree;
use slotmap::new_key_type;
use std::fmt;

new_key_type! {
    /// Arena key of a tree node
    pub(crate) struct NodeKey;
}

/// Element value stored in the heaps
pub type Value = i64;

/// Stable external handle of an element
///
/// Identities are issued from one counter shared by every heap in a
/// [`BinomialHeaps`](crate::BinomialHeaps) and are never reused, so a handle
/// stays meaningful after the element is moved to another heap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(pub usize);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Ordering key of an element
///
/// `Evicted` is declared first so it compares below every `Value`. It marks an
/// element that is being deleted and must surface to its tree root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Priority {
    Evicted,
    Value(Value),
}

impl Priority {
    pub(crate) fn value(self) -> Option<Value> {
        match self {
            Priority::Value(value) => Some(value),
            Priority::Evicted => None,
        }
    }
}

/// The movable part of a node: priority plus identity
///
/// Fields are compared in declaration order, so equal priorities are broken by
/// the smaller identity. That makes the order total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct Label {
    pub(crate) priority: Priority,
    pub(crate) id: ElementId,
}

/// A position in a binomial tree (child-sibling representation)
///
/// Children of a degree-`d` node are chained through `sibling` in degree order
/// `d-1, d-2, ..., 0`.
#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) label: Label,
    /// Number of children. A root of degree `d` spans `2^d` nodes.
    pub(crate) degree: Degree,
    pub(crate) parent: Option<NodeKey>,
    pub(crate) child: Option<NodeKey>,
    pub(crate) sibling: Option<NodeKey>,
}

impl Node {
    /// A detached degree-0 node
    pub(crate) fn new(value: Value, id: ElementId) -> Self {
        Node {
            label: Label {
                priority: Priority::Value(value),
                id,
            },
            degree: 0,
            parent: None,
            child: None,
            sibling: None,
        }
    }

    pub(crate) fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}
