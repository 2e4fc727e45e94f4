//! Degree type for binomial tree roots.
//!
//! A binomial tree of degree `d` holds exactly `2^d` nodes, so the degree of
//! any tree in a forest is bounded by `log₂(n)`. A `u8` covers every heap that
//! could fit in memory (2⁶⁴ elements would need degree 64) and keeps the node
//! record small.
//!
//! [`checked_increment`] is the only way the engine grows a degree. Overflow
//! would mean two trees of degree 255 were linked, which is impossible with a
//! consistent forest, so it panics rather than wrapping.

/// Degree of a binomial tree root, i.e. its number of children.
pub type Degree = u8;

/// Largest representable degree.
pub const MAX_DEGREE: Degree = u8::MAX;

/// Increments a degree after linking two equal-degree trees.
///
/// # Panics
///
/// Panics if `degree == MAX_DEGREE`.
///
/// # Example
///
/// ```rust
/// use binomial_forest::degree::{checked_increment, Degree};
///
/// let degree: Degree = 3;
/// assert_eq!(checked_increment(degree), 4);
/// ```
#[inline]
pub fn checked_increment(degree: Degree) -> Degree {
    degree.checked_add(1).expect(
        "degree overflow: linking two degree-255 trees would need 2^256 elements",
    )
}

/// Number of nodes in a binomial tree of the given degree.
///
/// Saturates at `usize::MAX` for degrees that cannot occur in memory.
#[inline]
pub fn tree_size(degree: Degree) -> usize {
    1usize.checked_shl(u32::from(degree)).unwrap_or(usize::MAX)
}
