//! Seeded random trees.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, instrument};

use crate::domain::node::{Node, Tree};

/// Smallest generated value.
pub const MIN_VALUE: i32 = -1000;
/// Largest generated value.
pub const MAX_VALUE: i32 = 1000;

/// Builds a tree of exactly `size` nodes; the same seed gives the same tree.
///
/// Each new node walks down from the root, turning left or right with equal
/// probability, and is attached at the first absent child it meets.
#[instrument(level = "debug")]
pub fn random_tree(size: usize, seed: u64) -> Tree {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut root: Option<Box<Node>> = None;

    for _ in 0..size {
        let value = rng.random_range(MIN_VALUE..=MAX_VALUE);
        let mut slot = &mut root;
        loop {
            match slot {
                Some(node) => {
                    slot = if rng.random_bool(0.5) {
                        &mut node.left
                    } else {
                        &mut node.right
                    };
                }
                None => {
                    *slot = Some(Box::new(Node::new(value)));
                    break;
                }
            }
        }
    }

    debug!(size, "generated random tree");
    Tree::from_root(root)
}
