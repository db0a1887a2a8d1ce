//! Degree type for binomial tree nodes.
//!
//! The degree of a node is the number of its direct children. In a binomial
//! forest a root of degree `k` heads a tree of exactly `2ᵏ` nodes, so the
//! largest degree that can occur is `log₂(n)`.
//!
//! # Why u8?
//!
//! A degree of 64 already needs 2⁶⁴ nodes, more than can be addressed. `u8`
//! covers every reachable degree with 191 to spare and keeps arena nodes small.

/// Type alias for node degree.
pub type Degree = u8;

/// Maximum representable degree.
pub const MAX_DEGREE: Degree = u8::MAX;

/// Increments a degree, panicking on overflow.
///
/// # Panics
///
/// Panics if `degree == MAX_DEGREE`. Reaching it would require a tree with
/// 2²⁵⁵ nodes, so a panic here means the linking invariants were broken.
///
/// # Example
///
/// ```rust
/// use binomial_forest::degree::{checked_increment, Degree};
///
/// let degree: Degree = 5;
/// assert_eq!(checked_increment(degree), 6);
/// ```
#[inline]
pub fn checked_increment(degree: Degree) -> Degree {
    degree.checked_add(1).expect(
        "degree overflow: a binomial tree of degree 255 would need 2^255 nodes",
    )
}

/// Number of nodes in a binomial tree whose root has the given degree.
///
/// Returns `None` when `2^degree` does not fit in a `usize`; no such tree can
/// exist in memory.
///
/// ```rust
/// use binomial_forest::degree::tree_size;
///
/// assert_eq!(tree_size(0), Some(1));
/// assert_eq!(tree_size(4), Some(16));
/// assert_eq!(tree_size(200), None);
/// ```
#[inline]
pub fn tree_size(degree: Degree) -> Option<usize> {
    1usize.checked_shl(u32::from(degree))
}
