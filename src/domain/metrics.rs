//! Recursive tree metrics.
//!
//! Every function is total: an absent node (`None`) is the empty tree and
//! yields zero. Each traversal is a single post-order pass, so the recursion
//! depth equals the tree height; use [`crate::domain::metrics_stack`] for
//! trees that may be arbitrarily deep.

use serde::{Deserialize, Serialize};

use crate::domain::node::{Node, Tree};

/// The four aggregate properties of a tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metrics {
    /// Nodes on the longest root-to-leaf path
    pub height: usize,
    /// Number of nodes
    pub count: usize,
    /// Sum of all values
    pub sum: i64,
    /// Nodes on the longest path between any two nodes
    pub diameter: usize,
}

impl Metrics {
    /// Combines the metrics of both subtrees of a node holding `value`.
    pub fn join(value: i32, left: Metrics, right: Metrics) -> Metrics {
        Metrics {
            height: 1 + left.height.max(right.height),
            count: 1 + left.count + right.count,
            sum: i64::from(value) + left.sum + right.sum,
            diameter: (left.height + right.height + 1)
                .max(left.diameter)
                .max(right.diameter),
        }
    }
}

pub fn height(node: Option<&Node>) -> usize {
    match node {
        None => 0,
        Some(n) => 1 + height(n.left()).max(height(n.right())),
    }
}

pub fn count(node: Option<&Node>) -> usize {
    match node {
        None => 0,
        Some(n) => 1 + count(n.left()) + count(n.right()),
    }
}

pub fn sum(node: Option<&Node>) -> i64 {
    match node {
        None => 0,
        Some(n) => i64::from(n.value) + sum(n.left()) + sum(n.right()),
    }
}

/// Number of nodes on the longest path between any two nodes.
///
/// Linear time: one traversal carries `(height, diameter)` upwards so no
/// subtree height is computed twice.
pub fn diameter(node: Option<&Node>) -> usize {
    height_and_diameter(node).1
}

fn height_and_diameter(node: Option<&Node>) -> (usize, usize) {
    match node {
        None => (0, 0),
        Some(n) => {
            let (left_height, left_diameter) = height_and_diameter(n.left());
            let (right_height, right_diameter) = height_and_diameter(n.right());
            let through_node = left_height + right_height + 1;
            (
                1 + left_height.max(right_height),
                through_node.max(left_diameter).max(right_diameter),
            )
        }
    }
}

/// Reference definition of [`diameter`].
///
/// Recomputes `height` of both subtrees at every node: O(n·h), which is
/// O(n²) for a list-shaped tree. Kept to cross-check the linear form.
pub fn diameter_quadratic(node: Option<&Node>) -> usize {
    match node {
        None => 0,
        Some(n) => {
            let left_diameter = diameter_quadratic(n.left());
            let right_diameter = diameter_quadratic(n.right());
            let through_node = height(n.left()) + height(n.right()) + 1;
            through_node.max(left_diameter.max(right_diameter))
        }
    }
}

/// All four metrics in a single post-order traversal.
pub fn measure(node: Option<&Node>) -> Metrics {
    match node {
        None => Metrics::default(),
        Some(n) => Metrics::join(n.value, measure(n.left()), measure(n.right())),
    }
}

impl Tree {
    pub fn height(&self) -> usize {
        height(self.root())
    }

    pub fn count(&self) -> usize {
        count(self.root())
    }

    pub fn sum(&self) -> i64 {
        sum(self.root())
    }

    pub fn diameter(&self) -> usize {
        diameter(self.root())
    }

    pub fn metrics(&self) -> Metrics {
        measure(self.root())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The longest path 5-4-2-6-7 avoids the root.
    //        1
    //       /
    //      2
    //     / \
    //    4   6
    //   /     \
    //  5       7
    fn lopsided() -> Tree {
        Tree::new(
            Node::new(1).with_left(
                Node::new(2)
                    .with_left(Node::new(4).with_left(Node::new(5)))
                    .with_right(Node::new(6).with_right(Node::new(7))),
            ),
        )
    }

    #[test]
    fn test_absent_node_is_zero() {
        assert_eq!(height(None), 0);
        assert_eq!(count(None), 0);
        assert_eq!(sum(None), 0);
        assert_eq!(diameter(None), 0);
        assert_eq!(diameter_quadratic(None), 0);
        assert_eq!(measure(None), Metrics::default());
    }

    #[test]
    fn test_diameter_not_through_root() {
        let tree = lopsided();
        assert_eq!(tree.height(), 4);
        assert_eq!(tree.diameter(), 5);
        assert_eq!(diameter_quadratic(tree.root()), 5);
    }

    #[test]
    fn test_measure_matches_individual_functions() {
        let tree = lopsided();
        let metrics = tree.metrics();
        assert_eq!(
            metrics,
            Metrics {
                height: tree.height(),
                count: tree.count(),
                sum: tree.sum(),
                diameter: tree.diameter(),
            }
        );
        assert_eq!(metrics.sum, 25);
        assert_eq!(metrics.count, 6);
    }

    #[test]
    fn test_sum_does_not_overflow_i32() {
        let tree = Tree::new(
            Node::new(i32::MAX)
                .with_left(Node::new(i32::MAX))
                .with_right(Node::new(i32::MAX)),
        );
        assert_eq!(tree.sum(), 3 * i64::from(i32::MAX));
    }
}
