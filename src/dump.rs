//! Debug rendering of a forest's tree shapes
//!
//! [`BinomialForest::dump`] renders each tree of the root list in pre-order,
//! one line per node, indented one tab per level:
//!
//! ```text
//! Value: 1; Degree: 2
//! 	Value: 3; Degree: 1
//! 		Value: 4; Degree: 0
//! 	Value: 2; Degree: 0
//! ```
//!
//! This is a diagnostic aid; the exact layout is not a stable format.

use crate::degree::Degree;
use crate::forest::BinomialForest;
use crate::node::{Arena, NodeKey};
use std::fmt::{self, Write};
use std::iter;

/// Display adapter returned by [`BinomialForest::dump`]
pub struct Dump<'a, T> {
    forest: &'a BinomialForest<T>,
}

impl<T> BinomialForest<T> {
    /// Returns a value that renders the forest's trees when displayed
    ///
    /// ```rust
    /// use binomial_forest::forest::BinomialForest;
    ///
    /// let forest: BinomialForest<i32> = [2, 1].into_iter().collect();
    /// assert_eq!(
    ///     forest.dump().to_string(),
    ///     "Value: 1; Degree: 1\n\tValue: 2; Degree: 0\n"
    /// );
    /// ```
    pub fn dump(&self) -> Dump<'_, T> {
        Dump { forest: self }
    }

    fn root_degrees(&self) -> Vec<Degree> {
        iter::successors(self.head, |&key| self.nodes[key].sibling)
            .map(|key| self.nodes[key].degree)
            .collect()
    }
}

fn write_tree<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    nodes: &Arena<T>,
    key: NodeKey,
    depth: usize,
) -> fmt::Result {
    let node = &nodes[key];
    for _ in 0..depth {
        f.write_char('\t')?;
    }
    writeln!(f, "Value: {}; Degree: {}", node.value, node.degree)?;

    let mut child = node.child;
    while let Some(c) = child {
        write_tree(f, nodes, c, depth + 1)?;
        child = nodes[c].sibling;
    }
    Ok(())
}

impl<T: fmt::Display> fmt::Display for Dump<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nodes = &self.forest.nodes;
        let mut root = self.forest.head;
        while let Some(key) = root {
            write_tree(f, nodes, key, 0)?;
            root = nodes[key].sibling;
        }
        Ok(())
    }
}

impl<T> fmt::Debug for BinomialForest<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinomialForest")
            .field("len", &self.nodes.len())
            .field("root_degrees", &self.root_degrees())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dump_empty() {
        let forest: BinomialForest<i32> = BinomialForest::new();
        assert_eq!(forest.dump().to_string(), "");
    }

    #[test]
    fn test_dump_preorder_with_indentation() {
        let forest: BinomialForest<i32> = (1..=5).collect();
        // 5 = 0b101 -> B0 holding 5, then B2 rooted at 1
        let expected = "\
Value: 5; Degree: 0
Value: 1; Degree: 2
\tValue: 3; Degree: 1
\t\tValue: 4; Degree: 0
\tValue: 2; Degree: 0
";
        assert_eq!(forest.dump().to_string(), expected);
    }

    #[test]
    fn test_debug_lists_root_degrees() {
        let forest: BinomialForest<i32> = (0..7).collect();
        assert_eq!(
            format!("{forest:?}"),
            "BinomialForest { len: 7, root_degrees: [0, 1, 2] }"
        );
    }
}
