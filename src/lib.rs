//! Binary tree metrics.
//!
//! Height, node count, value sum and diameter of an owned binary tree, each
//! computed by a single post-order traversal. Recursive implementations live in
//! [`domain::metrics`], explicit-stack ones in [`domain::metrics_stack`].
//!
//! ```
//! use treemetrics::domain::parse_bracket;
//!
//! let tree = parse_bracket("1{2{4,5},3{6,7}}").unwrap();
//! assert_eq!(tree.height(), 3);
//! assert_eq!(tree.count(), 7);
//! assert_eq!(tree.sum(), 28);
//! assert_eq!(tree.diameter(), 5);
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use domain::{Metrics, Node, Tree};
