//! Binomial Forest
//!
//! A mergeable min-priority queue implemented as a binomial heap: a forest
//! of heap-ordered binomial trees kept in a root list with at most one tree
//! per degree. Nodes live in a generational arena, so the handles returned by
//! insertion can be validated on every use instead of dangling.
//!
//! # Features
//!
//! - **Insert**: O(log n), returns a [`ForestHandle`](forest::ForestHandle)
//! - **Peek / extract minimum**: O(log n)
//! - **Decrease-key**: O(log n), bubbling values toward the root
//! - **Erase**: O(log n), removes the value at any handle
//! - **Merge**: union of two forests by binomial linking
//!
//! # Example
//!
//! ```rust
//! use binomial_forest::forest::BinomialForest;
//! use binomial_forest::HeapError;
//!
//! let mut forest = BinomialForest::new();
//! let five = forest.insert(5);
//! let three = forest.insert(3);
//! forest.insert(8);
//!
//! assert_eq!(forest.peek_min(), Some(&3));
//! assert_eq!(forest.erase(&three), Ok(3));
//! assert_eq!(forest.decrease_key(&five, 9), Err(HeapError::InvalidDecrease));
//! forest.decrease_key(&five, 1).unwrap();
//! assert_eq!(forest.extract_min(), Some(1));
//! assert_eq!(forest.extract_min(), Some(8));
//! assert_eq!(forest.extract_min(), None);
//! ```

pub mod degree;
pub mod dump;
pub mod forest;
mod node;
pub mod traits;
pub mod validate;

pub use forest::{BinomialForest, ForestHandle};
// Re-export the main traits for convenience
pub use traits::{DecreaseKeyHeap, Heap, HeapError};
pub use validate::InvariantViolation;
