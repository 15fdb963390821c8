//! Domain layer: tree model, metrics and notations
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod error;
pub mod metrics;
pub mod metrics_stack;
pub mod node;
pub mod parser;
pub mod random;
pub mod render;

pub use error::{DomainError, DomainResult};
pub use metrics::Metrics;
pub use node::{Node, Tree};
pub use parser::{parse_bracket, parse_level};
pub use random::random_tree;
pub use render::{draw, to_level_notation, TreeRender};
