//! Tree rendering: termtree diagrams and the two text notations.

use std::collections::VecDeque;
use std::fmt;

use itertools::Itertools;
use termtree::Tree as TermTree;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::metrics_stack;
use crate::domain::node::{Node, Tree};

/// Label for the missing sibling of a node's only child.
pub const ABSENT_LABEL: &str = "∅";

/// Label used when rendering a tree without nodes.
pub const EMPTY_LABEL: &str = "(empty)";

/// Deepest tree [`draw`] accepts. Building and printing a termtree both
/// recurse once per level.
pub const MAX_DRAW_HEIGHT: usize = 1_000;

pub trait TreeRender {
    fn to_tree_string(&self) -> TermTree<String>;
}

impl TreeRender for Node {
    fn to_tree_string(&self) -> TermTree<String> {
        let leaves: Vec<TermTree<String>> = if self.is_leaf() {
            Vec::new()
        } else {
            // keep both positions so left and right stay distinguishable
            [self.left(), self.right()]
                .into_iter()
                .map(|child| match child {
                    Some(c) => c.to_tree_string(),
                    None => TermTree::new(ABSENT_LABEL.to_string()),
                })
                .collect()
        };

        TermTree::new(self.value.to_string()).with_leaves(leaves)
    }
}

impl TreeRender for Tree {
    fn to_tree_string(&self) -> TermTree<String> {
        match self.root() {
            Some(root) => root.to_tree_string(),
            None => TermTree::new(EMPTY_LABEL.to_string()),
        }
    }
}

/// Draws the tree as a termtree diagram without the trailing newline.
///
/// Trees higher than [`MAX_DRAW_HEIGHT`] are rejected instead of drawn.
pub fn draw(tree: &Tree) -> DomainResult<String> {
    let height = metrics_stack::height(tree.root());
    if height > MAX_DRAW_HEIGHT {
        return Err(DomainError::TooDeepToDraw {
            height,
            limit: MAX_DRAW_HEIGHT,
        });
    }
    Ok(tree.to_tree_string().to_string().trim_end().to_string())
}

enum Emit<'a> {
    Node(&'a Node),
    Text(&'static str),
}

/// Writes bracket notation, e.g. `1{2{4,5},3{6,7}}`; the empty tree is "".
///
/// Only a missing left child is written (as an empty slot), so the output
/// parses back into the same tree.
impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack: Vec<Emit<'_>> = Vec::new();
        stack.extend(self.root().map(Emit::Node));

        while let Some(item) = stack.pop() {
            match item {
                Emit::Text(text) => f.write_str(text)?,
                Emit::Node(node) => {
                    write!(f, "{}", node.value)?;
                    match (node.left(), node.right()) {
                        (None, None) => {}
                        (Some(left), None) => {
                            stack.push(Emit::Text("}"));
                            stack.push(Emit::Node(left));
                            stack.push(Emit::Text("{"));
                        }
                        (left, Some(right)) => {
                            stack.push(Emit::Text("}"));
                            stack.push(Emit::Node(right));
                            stack.push(Emit::Text(","));
                            stack.extend(left.map(Emit::Node));
                            stack.push(Emit::Text("{"));
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

/// Level-order notation with `null` for absent children; trailing absent
/// markers are dropped.
pub fn to_level_notation(tree: &Tree) -> String {
    let mut slots: Vec<Option<i32>> = Vec::new();
    let mut queue: VecDeque<Option<&Node>> = VecDeque::new();
    if let Some(root) = tree.root() {
        queue.push_back(Some(root));
    }

    while let Some(slot) = queue.pop_front() {
        slots.push(slot.map(|node| node.value));
        if let Some(node) = slot {
            queue.push_back(node.left());
            queue.push_back(node.right());
        }
    }

    while slots.last().is_some_and(Option::is_none) {
        slots.pop();
    }

    slots
        .iter()
        .map(|slot| match slot {
            Some(value) => value.to_string(),
            None => "null".to_string(),
        })
        .join(",")
}
