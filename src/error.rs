//! Error type for heap collection operations
//!
//! Only caller mistakes are errors. Operations on absent identities and
//! queries on empty heaps are ordinary outcomes reported through `bool` and
//! `Option` results.

use thiserror::Error;

/// Error returned by [`BinomialHeaps`](crate::BinomialHeaps) operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// The heap index is outside `0..count`
    #[error("heap index {index} is out of range (collection holds {count} heaps)")]
    InvalidHeapIndex { index: usize, count: usize },
}
