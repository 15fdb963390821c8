//! Binary tree data model.
//!
//! Every node exclusively owns its two subtrees; an absent child is `None`.
//! There is no sharing and no parent pointer, so plain `Box` ownership is enough
//! (no arena, no `Rc<RefCell<_>>`).

/// One vertex of a binary tree.
///
/// `Clone`, `PartialEq` and `Drop` walk the tree on a heap stack. `Debug`
/// is derived and recurses once per level.
#[derive(Debug)]
pub struct Node {
    pub value: i32,
    pub left: Option<Box<Node>>,
    pub right: Option<Box<Node>>,
}

impl Node {
    /// Creates a leaf.
    pub fn new(value: i32) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub fn with_left(mut self, child: Node) -> Self {
        self.left = Some(Box::new(child));
        self
    }

    pub fn with_right(mut self, child: Node) -> Self {
        self.right = Some(Box::new(child));
        self
    }

    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

// The compiler-generated drop glue recurses once per level, which overflows the
// stack for list-shaped trees. Detach the subtrees and free them from a heap stack.
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node>> = Vec::new();
        pending.extend(self.left.take());
        pending.extend(self.right.take());

        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        let mut pending: Vec<(&Node, &Node)> = vec![(self, other)];

        while let Some((a, b)) = pending.pop() {
            if a.value != b.value {
                return false;
            }
            for pair in [(a.left(), b.left()), (a.right(), b.right())] {
                match pair {
                    (None, None) => {}
                    (Some(x), Some(y)) => pending.push((x, y)),
                    _ => return false,
                }
            }
        }
        true
    }
}

impl Eq for Node {}

impl Clone for Node {
    fn clone(&self) -> Self {
        // post-order: a copy is built once both child copies are on `built`
        let mut frames: Vec<(&Node, bool)> = vec![(self, false)];
        let mut built: Vec<Node> = Vec::new();

        while let Some((node, children_done)) = frames.pop() {
            if !children_done {
                frames.push((node, true));
                frames.extend(node.right().map(|right| (right, false)));
                frames.extend(node.left().map(|left| (left, false)));
            } else {
                let right = node.right().and_then(|_| built.pop()).map(Box::new);
                let left = node.left().and_then(|_| built.pop()).map(Box::new);
                built.push(Node {
                    value: node.value,
                    left,
                    right,
                });
            }
        }

        built.pop().unwrap_or_else(|| Node::new(self.value))
    }
}

/// A possibly empty binary tree, identified by its root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    root: Option<Box<Node>>,
}

impl Tree {
    /// The tree without any node.
    pub fn empty() -> Self {
        Self { root: None }
    }

    pub fn new(root: Node) -> Self {
        Self {
            root: Some(Box::new(root)),
        }
    }

    pub fn from_root(root: Option<Box<Node>>) -> Self {
        Self { root }
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn into_root(self) -> Option<Box<Node>> {
        self.root
    }

    /// Swaps the left and right child of every node.
    pub fn mirror(&mut self) {
        let mut stack: Vec<&mut Node> = Vec::new();
        stack.extend(self.root.as_deref_mut());

        while let Some(node) = stack.pop() {
            std::mem::swap(&mut node.left, &mut node.right);
            stack.extend(node.left.as_deref_mut());
            stack.extend(node.right.as_deref_mut());
        }
    }

    pub fn mirrored(mut self) -> Self {
        self.mirror();
        self
    }
}

impl From<Node> for Tree {
    fn from(root: Node) -> Self {
        Tree::new(root)
    }
}
