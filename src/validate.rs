//! Structural invariant checking
//!
//! [`BinomialForest::validate`] walks every tree and verifies:
//! - Root list: no parent links, strictly increasing degrees
//! - Binomial shape: a degree-k node has k children of degrees k-1, ..., 0
//!   and heads exactly 2ᵏ nodes
//! - Parent links: every child points back to the node whose list holds it
//! - Heap order: no child is smaller than its parent
//! - Reachability: every node in the arena hangs off the root list
//!
//! The walk is O(n). It is meant for tests and debugging, not hot paths.

use crate::degree::{tree_size, Degree};
use crate::forest::BinomialForest;
use crate::node::NodeKey;
use thiserror::Error;

/// A broken forest invariant, as reported by [`BinomialForest::validate`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("root list out of order: degree {next} follows degree {previous}")]
    RootOrder { previous: Degree, next: Degree },

    #[error("root of degree {degree} has a parent link")]
    RootHasParent { degree: Degree },

    #[error("node of degree {degree} has {children} children")]
    DegreeMismatch { degree: Degree, children: usize },

    #[error("child {position} of a degree-{parent_degree} node has degree {found}")]
    ChildDegree {
        parent_degree: Degree,
        position: usize,
        found: Degree,
    },

    #[error("child of a degree-{parent_degree} node does not link back to it")]
    ParentLink { parent_degree: Degree },

    #[error("child of a degree-{parent_degree} node is smaller than its parent")]
    HeapOrder { parent_degree: Degree },

    #[error("tree of degree {degree} holds {size} nodes")]
    TreeSize { degree: Degree, size: usize },

    #[error("{reachable} nodes reachable from the root list but {stored} stored")]
    Unreachable { reachable: usize, stored: usize },
}

impl<T: Ord> BinomialForest<T> {
    /// Checks every structural invariant of the forest
    ///
    /// Returns the first violation found. A forest only ever built through
    /// the public API always validates.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        let mut reachable = 0;
        let mut previous: Option<Degree> = None;

        for root in self.roots() {
            let node = &self.nodes[root];
            if node.parent.is_some() {
                return Err(InvariantViolation::RootHasParent {
                    degree: node.degree,
                });
            }
            if let Some(previous) = previous {
                if node.degree <= previous {
                    return Err(InvariantViolation::RootOrder {
                        previous,
                        next: node.degree,
                    });
                }
            }
            previous = Some(node.degree);
            reachable += self.check_tree(root)?;
        }

        if reachable != self.nodes.len() {
            return Err(InvariantViolation::Unreachable {
                reachable,
                stored: self.nodes.len(),
            });
        }
        Ok(())
    }

    /// Checks the subtree at `key`, returning its node count
    fn check_tree(&self, key: NodeKey) -> Result<usize, InvariantViolation> {
        let node = &self.nodes[key];
        let degree = usize::from(node.degree);
        let mut size = 1;
        let mut position = 0;
        let mut cursor = node.child;

        while let Some(child_key) = cursor {
            let child = &self.nodes[child_key];

            // Child at `position` must have degree `degree - 1 - position`
            match degree.checked_sub(position + 1) {
                Some(expected) if expected == usize::from(child.degree) => {}
                Some(_) => {
                    return Err(InvariantViolation::ChildDegree {
                        parent_degree: node.degree,
                        position,
                        found: child.degree,
                    })
                }
                None => {
                    return Err(InvariantViolation::DegreeMismatch {
                        degree: node.degree,
                        children: position + 1,
                    })
                }
            }
            if child.parent != Some(key) {
                return Err(InvariantViolation::ParentLink {
                    parent_degree: node.degree,
                });
            }
            if child.value < node.value {
                return Err(InvariantViolation::HeapOrder {
                    parent_degree: node.degree,
                });
            }

            size += self.check_tree(child_key)?;
            position += 1;
            cursor = child.sibling;
        }

        if position != degree {
            return Err(InvariantViolation::DegreeMismatch {
                degree: node.degree,
                children: position,
            });
        }
        if tree_size(node.degree) != Some(size) {
            return Err(InvariantViolation::TreeSize {
                degree: node.degree,
                size,
            });
        }
        Ok(size)
    }
}
