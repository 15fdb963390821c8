//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Errors raised while turning tree notation into a [`crate::domain::Tree`]
/// or a tree into a diagram.
///
/// Positions are byte offsets into the input for the bracket notation and
/// zero-based value indices for the level-order notation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("unexpected character '{found}' at position {position}")]
    UnexpectedChar { found: char, position: usize },

    #[error("unexpected end of input at position {0}")]
    UnexpectedEnd(usize),

    #[error("invalid integer '{literal}' at position {position}")]
    InvalidInteger { literal: String, position: usize },

    #[error("trailing input at position {0}")]
    TrailingInput(usize),

    #[error("node opened at position {0} has more than two children")]
    TooManyChildren(usize),

    #[error("value at index {0} has no free child slot")]
    TooManyValues(usize),

    #[error("tree of height {height} is too deep to draw (limit {limit})")]
    TooDeepToDraw { height: usize, limit: usize },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
