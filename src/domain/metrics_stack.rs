/*
Explicit-stack implementations of the tree metrics.

They return exactly what the recursive functions in `metrics` return, but the
call stack stays flat: the post-order walk keeps `(node, children_done)` frames
on a `Vec`, and finished subtree results on a second `Vec`. A frame is visited
twice, first to schedule its children, then to combine their results.

Children are scheduled right before left, so the left result is pushed first
and popped last when the parent is combined.
 */
use std::collections::VecDeque;

use crate::domain::metrics::Metrics;
use crate::domain::node::Node;

fn fold_postorder<T, F>(root: Option<&Node>, empty: T, combine: F) -> T
where
    T: Copy,
    F: Fn(&Node, T, T) -> T,
{
    let Some(root) = root else {
        return empty;
    };

    let mut frames: Vec<(&Node, bool)> = vec![(root, false)];
    let mut results: Vec<T> = Vec::new();

    while let Some((node, children_done)) = frames.pop() {
        if !children_done {
            frames.push((node, true));
            if let Some(right) = node.right() {
                frames.push((right, false));
            }
            if let Some(left) = node.left() {
                frames.push((left, false));
            }
        } else {
            let right = match node.right() {
                Some(_) => results.pop().unwrap_or(empty),
                None => empty,
            };
            let left = match node.left() {
                Some(_) => results.pop().unwrap_or(empty),
                None => empty,
            };
            results.push(combine(node, left, right));
        }
    }

    results.pop().unwrap_or(empty)
}

pub fn height(node: Option<&Node>) -> usize {
    fold_postorder(node, 0, |_, left, right| 1 + left.max(right))
}

pub fn count(node: Option<&Node>) -> usize {
    fold_postorder(node, 0, |_, left, right| 1 + left + right)
}

pub fn sum(node: Option<&Node>) -> i64 {
    fold_postorder(node, 0, |n, left, right| i64::from(n.value) + left + right)
}

/// Linear-time diameter, carrying `(height, diameter)` per subtree.
pub fn diameter(node: Option<&Node>) -> usize {
    let (_, diameter) = fold_postorder(
        node,
        (0usize, 0usize),
        |_, (left_height, left_diameter), (right_height, right_diameter)| {
            (
                1 + left_height.max(right_height),
                (left_height + right_height + 1)
                    .max(left_diameter)
                    .max(right_diameter),
            )
        },
    );
    diameter
}

pub fn measure(node: Option<&Node>) -> Metrics {
    fold_postorder(node, Metrics::default(), |n, left, right| {
        Metrics::join(n.value, left, right)
    })
}

/// Height by counting levels in a breadth-first traversal.
pub fn height_by_levels(node: Option<&Node>) -> usize {
    let mut levels = 0;
    let mut queue: VecDeque<&Node> = VecDeque::new();
    queue.extend(node);

    while !queue.is_empty() {
        levels += 1;
        for _ in 0..queue.len() {
            if let Some(current) = queue.pop_front() {
                queue.extend(current.left());
                queue.extend(current.right());
            }
        }
    }

    levels
}
