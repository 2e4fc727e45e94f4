//! Addressable Binomial Min-Heaps
//!
//! This crate provides [`BinomialHeaps`], a fixed-size collection of binomial
//! min-heaps that share one node arena and one identity space. Elements are
//! addressed by a stable [`ElementId`] handle, so they can be updated or
//! deleted in place long after insertion, even after their heap has been
//! merged into another one.
//!
//! # Features
//!
//! - **Insert**: O(log n) worst-case, returns the element's handle
//! - **Move**: O(log n) union of one heap into another, the source ends empty
//! - **Extract-min / Get-min**: O(log n)
//! - **Update**: arbitrary increase or decrease of a value by handle
//! - **Delete**: removal by handle from whichever heap holds the element
//!
//! Handles survive every operation except the removal of their own element:
//! the engine moves (value, identity) labels between tree positions instead of
//! relinking nodes, and keeps the registry in step with every move.
//!
//! # Example
//!
//! ```rust
//! use binomial_forest::BinomialHeaps;
//!
//! let mut heaps = BinomialHeaps::new(1);
//! for value in [5, 3, 8, 1] {
//!     heaps.insert(0, value).unwrap();
//! }
//! let eight = binomial_forest::ElementId(3);
//! heaps.update(eight, 0);
//! assert_eq!(heaps.extract_min(0), Ok(Some((eight, 0))));
//! assert_eq!(heaps.get_min(0), Ok(Some(1)));
//! ```

pub mod command;
pub mod degree;
pub mod error;
mod forest;
pub mod heaps;
pub mod invariants;
mod merge;
pub mod node;
mod registry;
mod sift;

// Re-export the main types for convenience
pub use error::HeapError;
pub use heaps::BinomialHeaps;
pub use invariants::InvariantViolation;
pub use node::{ElementId, Value};
