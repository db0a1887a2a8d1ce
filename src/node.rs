//! Arena node records and the binomial linking primitive
//!
//! Every node of a forest lives in one `SlotMap` arena and is addressed by a
//! [`NodeKey`]. Keys are generational: once a node is removed its key stops
//! resolving, even if the slot is reused, which is what lets forest handles
//! detect removal instead of dangling.
//!
//! **Link model**:
//! - `child` and root-list `sibling` links are the owning direction: a node is
//!   reachable from `head` through exactly one chain of them
//! - `parent` is a plain back-reference used only for bubbling up
//!
//! **Binomial Tree Structure**: a node of degree k has exactly k children,
//! stored along the child list in degrees k-1, k-2, ..., 0 (the most recently
//! linked child is first).

use crate::degree::{checked_increment, Degree};
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Generational key of a node inside a forest's arena
    pub struct NodeKey;
}

/// Arena type holding all nodes of one forest
pub(crate) type Arena<T> = SlotMap<NodeKey, Node<T>>;

/// Internal node structure
///
/// - `value`: the stored (ordered) value
/// - `degree`: number of children
/// - `parent`: parent node (None if root)
/// - `child`: leftmost child, the one linked last (None if leaf)
/// - `sibling`: next node in the parent's child list or in the root list
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) degree: Degree,
    pub(crate) parent: Option<NodeKey>,
    pub(crate) child: Option<NodeKey>,
    pub(crate) sibling: Option<NodeKey>,
}

impl<T> Node<T> {
    /// A detached degree-0 tree
    pub(crate) fn singleton(value: T) -> Self {
        Node {
            value,
            degree: 0,
            parent: None,
            child: None,
            sibling: None,
        }
    }
}

/// Makes `child` the new leftmost child of `parent`
///
/// **Time Complexity**: O(1)
///
/// Both roots must have the same degree; the result is a tree of degree+1.
/// No values are compared here: callers decide which root becomes the parent
/// so that heap order holds. Whatever `child.sibling` pointed to before is
/// overwritten, so callers splice `child` out of its list first.
pub(crate) fn link<T>(nodes: &mut Arena<T>, child: NodeKey, parent: NodeKey) {
    debug_assert_eq!(nodes[child].degree, nodes[parent].degree);

    let old_first = nodes[parent].child;
    {
        let c = &mut nodes[child];
        c.parent = Some(parent);
        c.sibling = old_first;
    }
    let p = &mut nodes[parent];
    p.child = Some(child);
    p.degree = checked_increment(p.degree);
}
