//! Binomial forest: a binomial heap over an arena of nodes
//!
//! A binomial heap is a list of heap-ordered binomial trees with:
//! - O(log n) insert and extract-min
//! - O(log n) decrease-key and erase
//! - O(log n) union of two heaps
//!
//! # Algorithm Overview
//!
//! **Binomial Tree Bₖ**: Recursively defined:
//! - B₀ is a single node
//! - Bₖ is formed by linking two B_{k-1} trees, the root with the larger value
//!   becoming the leftmost child of the other
//! - Bₖ has exactly 2ᵏ nodes and its root has children B_{k-1}, ..., B₀
//!
//! The forest keeps its trees in a singly linked **root list** ordered by
//! strictly increasing degree, at most one tree per degree. Like the binary
//! representation of n, this bounds the root list at O(log n) trees.
//!
//! **Key Operations**:
//! - **Union**: splice two root lists by degree, then link equal-degree
//!   neighbours (binary addition with carries)
//! - **Insert**: union with a singleton B₀
//! - **Extract-min**: unlink the minimum root, reverse its child list into a
//!   root list, union it back
//! - **Decrease-key**: lower the value and bubble it up by swapping values
//!   with parents
//! - **Erase**: bubble the value unconditionally to its root, then remove that
//!   root the way extract-min does
//!
//! # Handles track positions
//!
//! Bubbling swaps *values* between nodes; nodes never move in the tree. A
//! [`ForestHandle`] therefore names a position. After a decrease-key or erase
//! elsewhere in the same tree, the value read through an ancestor's handle
//! may be a value that was inserted under a different handle.
//!
//! Erase follows the same rule: it removes the *root* of the erased value's
//! tree once the value has been bubbled there. The handle passed to
//! [`BinomialForest::erase`] stays live (now holding its former parent's value)
//! unless it was itself a root, and the former root's handle dangles.
//!
//! ```rust
//! use binomial_forest::forest::BinomialForest;
//!
//! let mut forest = BinomialForest::new();
//! let a = forest.insert(1);
//! let b = forest.insert(2);
//! // 2 was linked under 1; lowering it to 0 swaps the two values
//! forest.decrease_key(&b, 0).unwrap();
//! assert_eq!(forest.get(&a), Ok(&0));
//! assert_eq!(forest.get(&b), Ok(&1));
//! ```

use crate::node::{link, Arena, Node, NodeKey};
use crate::traits::{DecreaseKeyHeap, Handle, Heap, HeapError};
use rustc_hash::FxHashMap;
use slotmap::SlotMap;
use std::iter;
use std::mem;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, trace};

/// Source of forest identities, so handles from one forest are rejected by another
static NEXT_FOREST_ID: AtomicU64 = AtomicU64::new(0);

/// Handle to a position in a [`BinomialForest`]
///
/// Returned by [`BinomialForest::insert`]. The handle stays valid while the
/// node it names is in the forest; after that node is removed (by
/// extract-min, erase, clear, or by merging its forest into another one) every
/// operation taking the handle fails with [`HeapError::DanglingHandle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ForestHandle {
    forest: u64,
    key: NodeKey,
}

impl Handle for ForestHandle {}

/// Binomial heap stored as a forest of binomial trees
///
/// # Example
///
/// ```rust
/// use binomial_forest::forest::BinomialForest;
///
/// let mut forest = BinomialForest::new();
/// forest.insert(10);
/// forest.insert(20);
/// let h = forest.insert(30);
///
/// assert_eq!(forest.extract_min(), Some(10));
/// forest.decrease_key(&h, 5).unwrap();
/// assert_eq!(forest.peek_min(), Some(&5));
/// ```
pub struct BinomialForest<T> {
    /// Every node of every tree
    pub(crate) nodes: Arena<T>,
    /// First root of the root list, in strictly increasing degree order
    pub(crate) head: Option<NodeKey>,
    id: u64,
}

impl<T: Ord> BinomialForest<T> {
    /// Creates an empty forest
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty forest whose arena can hold `capacity` nodes without reallocating
    pub fn with_capacity(capacity: usize) -> Self {
        BinomialForest {
            nodes: SlotMap::with_capacity_and_key(capacity),
            head: None,
            id: NEXT_FOREST_ID.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// Number of values in the forest
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the forest holds no values
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Removes every value. All outstanding handles become dangling.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
    }

    /// Inserts a value and returns a handle to its position
    ///
    /// **Time Complexity**: O(log n) worst-case
    ///
    /// The value becomes a B₀ tree which is unioned into the root list; this
    /// may cascade links exactly like incrementing a binary counter.
    pub fn insert(&mut self, value: T) -> ForestHandle {
        let key = self.nodes.insert(Node::singleton(value));
        self.union(Some(key));
        ForestHandle {
            forest: self.id,
            key,
        }
    }

    /// Returns the minimum value, or `None` if the forest is empty
    ///
    /// **Time Complexity**: O(log n), a scan of the root list. Heap order
    /// guarantees no non-root node is smaller than its tree's root.
    pub fn peek_min(&self) -> Option<&T> {
        self.min_root().map(|(_, min)| &self.nodes[min].value)
    }

    /// Removes and returns the minimum value, or `None` if the forest is empty
    ///
    /// **Time Complexity**: O(log n) worst-case
    ///
    /// **Algorithm**:
    /// 1. Find the minimum root and its predecessor in the root list
    /// 2. Unlink it from the root list
    /// 3. Reverse its child list: children are stored B_{k-1}, ..., B₀, a root
    ///    list must run B₀, ..., B_{k-1}
    /// 4. Union the reversed children back into the forest
    pub fn extract_min(&mut self) -> Option<T> {
        let (prev, min) = self.min_root()?;
        let value = self.remove_root(prev, min);
        trace!(len = self.len(), "extracted minimum");
        Some(value)
    }

    /// Lowers the value at the handle's position
    ///
    /// **Time Complexity**: O(log n) worst-case
    ///
    /// The value is stored, then swapped with its parent's value for as long
    /// as the parent holds a strictly greater one. Tree shape never changes,
    /// so after the call the handle may hold an ancestor's former value and
    /// the new value may sit at an ancestor's position (see the module docs).
    /// Setting a value equal to the current one is accepted and changes nothing
    /// structurally.
    ///
    /// # Errors
    /// - [`HeapError::InvalidDecrease`] if `new_value` is greater than the
    ///   current value; the forest is left untouched
    /// - [`HeapError::DanglingHandle`] if the handle is not live in this forest
    pub fn decrease_key(&mut self, handle: &ForestHandle, new_value: T) -> Result<(), HeapError> {
        let key = self.resolve(handle)?;
        if new_value > self.nodes[key].value {
            debug!(?key, "rejected decrease-key: new value is greater than current value");
            return Err(HeapError::InvalidDecrease);
        }
        self.nodes[key].value = new_value;
        self.sift_up(key, |value, parent| value < parent);
        Ok(())
    }

    /// Removes the value at the handle's position and returns it
    ///
    /// **Time Complexity**: O(log n) worst-case
    ///
    /// The value is treated as smaller than everything else in the forest:
    /// it bubbles all the way to the root of its tree, and that root is then
    /// removed exactly as [`extract_min`](Self::extract_min) removes the
    /// minimum. No sentinel value is needed, so any `T` works.
    ///
    /// Ancestors' values each move down one level on the way, so handles to
    /// ancestors of the erased position now read their former parent's value.
    /// The node freed is the root of the tree: its handle dangles afterwards,
    /// while `handle` itself stays live unless it named that root.
    ///
    /// # Errors
    /// [`HeapError::DanglingHandle`] if the handle is not live in this forest.
    pub fn erase(&mut self, handle: &ForestHandle) -> Result<T, HeapError> {
        let key = self.resolve(handle)?;
        let root = self.sift_up(key, |_, _| true);
        let prev = self.root_predecessor(root);
        let value = self.remove_root(prev, root);
        trace!(len = self.len(), "erased value");
        Ok(value)
    }

    /// Returns the value currently stored at the handle's position
    ///
    /// # Errors
    /// [`HeapError::DanglingHandle`] if the handle is not live in this forest.
    pub fn get(&self, handle: &ForestHandle) -> Result<&T, HeapError> {
        let key = self.resolve(handle)?;
        Ok(&self.nodes[key].value)
    }

    /// Returns true if the handle names a live position in this forest
    pub fn contains(&self, handle: &ForestHandle) -> bool {
        handle.forest == self.id && self.nodes.contains_key(handle.key)
    }

    /// Moves every value of `other` into this forest
    ///
    /// **Time Complexity**: O(m) to move `other`'s m nodes into this arena,
    /// plus O(log(n + m)) for the union of the root lists.
    ///
    /// Handles into `self` stay valid. Handles issued by `other` become
    /// dangling, since its nodes are re-keyed into this forest's arena.
    pub fn merge(&mut self, other: BinomialForest<T>) {
        let incoming = other.len();
        let other_head = self.adopt(other);
        self.union(other_head);
        trace!(incoming, len = self.len(), "merged forest");
    }

    /// Iterates the root list from the head
    pub(crate) fn roots(&self) -> impl Iterator<Item = NodeKey> + '_ {
        iter::successors(self.head, move |&key| self.nodes[key].sibling)
    }

    fn resolve(&self, handle: &ForestHandle) -> Result<NodeKey, HeapError> {
        if self.contains(handle) {
            Ok(handle.key)
        } else {
            debug!(?handle, "handle does not name a live node");
            Err(HeapError::DanglingHandle)
        }
    }

    /// Finds the minimum root and its predecessor in the root list
    ///
    /// Ties keep the earliest root. The predecessor is `None` when the
    /// minimum is the head.
    fn min_root(&self) -> Option<(Option<NodeKey>, NodeKey)> {
        let mut min = self.head?;
        let mut min_prev = None;
        let mut prev = min;
        let mut cursor = self.nodes[min].sibling;

        while let Some(key) = cursor {
            if self.nodes[key].value < self.nodes[min].value {
                min = key;
                min_prev = Some(prev);
            }
            prev = key;
            cursor = self.nodes[key].sibling;
        }

        Some((min_prev, min))
    }

    fn root_predecessor(&self, root: NodeKey) -> Option<NodeKey> {
        let mut prev = None;
        for key in self.roots() {
            if key == root {
                break;
            }
            prev = Some(key);
        }
        prev
    }

    /// Unlinks a root, unions its children back in and frees it
    fn remove_root(&mut self, prev: Option<NodeKey>, root: NodeKey) -> T {
        let next = self.nodes[root].sibling;
        match prev {
            Some(p) => self.nodes[p].sibling = next,
            None => self.head = next,
        }

        let node = self
            .nodes
            .remove(root)
            .expect("root key belongs to this forest's arena");

        // Reverse the child list into increasing degree order
        let mut reversed = None;
        let mut cursor = node.child;
        while let Some(key) = cursor {
            let child = &mut self.nodes[key];
            cursor = child.sibling;
            child.sibling = reversed;
            child.parent = None;
            reversed = Some(key);
        }

        self.union(reversed);
        node.value
    }

    /// Swaps the value at `key` upward while `should_swap(value, parent_value)` holds
    ///
    /// Returns the position the value ends up at.
    fn sift_up(&mut self, key: NodeKey, mut should_swap: impl FnMut(&T, &T) -> bool) -> NodeKey {
        let mut current = key;

        while let Some(parent) = self.nodes[current].parent {
            let Some([node, parent_node]) = self.nodes.get_disjoint_mut([current, parent]) else {
                break;
            };
            if !should_swap(&node.value, &parent_node.value) {
                break;
            }
            mem::swap(&mut node.value, &mut parent_node.value);
            current = parent;
        }

        current
    }

    /// Splices two degree-sorted root lists into one list of non-decreasing degree
    ///
    /// Parent and child links are untouched and equal degrees are kept side by
    /// side (from `a` first); consolidation is left to [`union`](Self::union).
    fn splice_root_lists(
        &mut self,
        mut a: Option<NodeKey>,
        mut b: Option<NodeKey>,
    ) -> Option<NodeKey> {
        fn append<V>(
            nodes: &mut Arena<V>,
            head: &mut Option<NodeKey>,
            tail: &mut Option<NodeKey>,
            key: NodeKey,
        ) {
            match *tail {
                Some(t) => nodes[t].sibling = Some(key),
                None => *head = Some(key),
            }
            *tail = Some(key);
        }

        let mut head = None;
        let mut tail = None;

        loop {
            let next = match (a, b) {
                (None, None) => break,
                // One list is exhausted: the rest of the other is already chained
                (Some(rest), None) | (None, Some(rest)) => {
                    append(&mut self.nodes, &mut head, &mut tail, rest);
                    break;
                }
                (Some(x), Some(y)) => {
                    if self.nodes[x].degree <= self.nodes[y].degree {
                        a = self.nodes[x].sibling;
                        x
                    } else {
                        b = self.nodes[y].sibling;
                        y
                    }
                }
            };
            append(&mut self.nodes, &mut head, &mut tail, next);
        }

        head
    }

    /// Unions a detached root list into this forest's root list
    ///
    /// **Time Complexity**: O(log n)
    ///
    /// **Algorithm**: splice the two lists by degree, then walk the result with
    /// `prev`, `current`, `next`:
    /// - different degrees, or three equal degrees in a row: advance (the
    ///   later pair is linked first so the run of three stays sorted)
    /// - two equal degrees: link the root with the greater value under the
    ///   other, ties keeping `current` as the parent
    ///
    /// **Invariant**: afterwards the root list has strictly increasing degrees.
    fn union(&mut self, other: Option<NodeKey>) {
        self.head = self.splice_root_lists(self.head, other);
        let Some(mut current) = self.head else {
            return;
        };

        let mut prev: Option<NodeKey> = None;
        let mut next = self.nodes[current].sibling;
        let mut links = 0usize;

        while let Some(candidate) = next {
            let degree = self.nodes[current].degree;
            let run_of_three = self.nodes[candidate]
                .sibling
                .is_some_and(|after| self.nodes[after].degree == degree);

            if degree != self.nodes[candidate].degree || run_of_three {
                prev = Some(current);
                current = candidate;
            } else if self.nodes[current].value <= self.nodes[candidate].value {
                self.nodes[current].sibling = self.nodes[candidate].sibling;
                link(&mut self.nodes, candidate, current);
                links += 1;
            } else {
                match prev {
                    Some(p) => self.nodes[p].sibling = Some(candidate),
                    None => self.head = Some(candidate),
                }
                link(&mut self.nodes, current, candidate);
                links += 1;
                current = candidate;
            }

            next = self.nodes[current].sibling;
        }

        trace!(links, "consolidated root list");
    }

    /// Moves all nodes of `other` into this arena, returning its re-keyed head
    fn adopt(&mut self, other: BinomialForest<T>) -> Option<NodeKey> {
        let BinomialForest { nodes, head, .. } = other;

        let mut remap: FxHashMap<NodeKey, NodeKey> = FxHashMap::default();
        remap.reserve(nodes.len());
        self.nodes.reserve(nodes.len());

        for (old, node) in nodes {
            remap.insert(old, self.nodes.insert(node));
        }

        let rekey = |key: Option<NodeKey>| key.map(|k| remap[&k]);
        for &new in remap.values() {
            let node = &mut self.nodes[new];
            node.parent = rekey(node.parent);
            node.child = rekey(node.child);
            node.sibling = rekey(node.sibling);
        }

        rekey(head)
    }
}

impl<T: Ord> Default for BinomialForest<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for BinomialForest<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut forest = BinomialForest::new();
        forest.extend(iter);
        forest
    }
}

impl<T: Ord> Extend<T> for BinomialForest<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.nodes.reserve(iter.size_hint().0);
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> Heap<T> for BinomialForest<T> {
    fn new() -> Self {
        BinomialForest::new()
    }

    fn is_empty(&self) -> bool {
        BinomialForest::is_empty(self)
    }

    fn len(&self) -> usize {
        BinomialForest::len(self)
    }

    fn push(&mut self, value: T) {
        self.insert(value);
    }

    fn peek(&self) -> Option<&T> {
        self.peek_min()
    }

    fn pop(&mut self) -> Option<T> {
        self.extract_min()
    }

    fn merge(&mut self, other: Self) {
        BinomialForest::merge(self, other)
    }
}

impl<T: Ord> DecreaseKeyHeap<T> for BinomialForest<T> {
    type Handle = ForestHandle;

    fn push_with_handle(&mut self, value: T) -> Self::Handle {
        self.insert(value)
    }

    fn decrease_key(&mut self, handle: &Self::Handle, new_value: T) -> Result<(), HeapError> {
        BinomialForest::decrease_key(self, handle, new_value)
    }

    fn erase(&mut self, handle: &Self::Handle) -> Result<T, HeapError> {
        BinomialForest::erase(self, handle)
    }
}
