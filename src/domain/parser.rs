//! Tree notation parsers.
//!
//! Two notations are understood:
//!
//! - bracket: `value{left,right}`, e.g. `1{2{4,5},3{6,7}}`. Either slot may be
//!   empty (`1{,3}`), a single entry is the left child (`1{2}`), whitespace is
//!   ignored.
//! - level: level-order values separated by commas, with `null`, `_` or `#`
//!   marking an absent child, e.g. `1,null,2,3`. Children of absent positions
//!   are not listed.
//!
//! Blank input is the empty tree in both notations.

use std::collections::VecDeque;

use tracing::{debug, instrument};

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::node::{Node, Tree};

/// Tokens accepted as "no node here" in level notation.
pub const ABSENT_MARKERS: [&str; 3] = ["null", "_", "#"];

struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn unexpected(&self) -> DomainError {
        match self.peek() {
            Some(found) => DomainError::UnexpectedChar {
                found,
                position: self.pos,
            },
            None => DomainError::UnexpectedEnd(self.pos),
        }
    }

    fn integer(&mut self) -> DomainResult<i32> {
        let start = self.pos;
        if matches!(self.peek(), Some('-') | Some('+')) {
            self.bump();
        }
        let digits_start = self.pos;
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.bump();
        }
        if self.pos == digits_start {
            return Err(self.unexpected());
        }

        let literal = &self.input[start..self.pos];
        literal
            .parse::<i32>()
            .map_err(|_| DomainError::InvalidInteger {
                literal: literal.to_string(),
                position: start,
            })
    }
}

/// A node whose `{` has been read but not yet its `}`.
struct OpenNode {
    value: i32,
    opened_at: usize,
    slots: Vec<Option<Box<Node>>>,
}

impl OpenNode {
    fn into_node(self) -> Node {
        let mut slots = self.slots.into_iter();
        Node {
            value: self.value,
            left: slots.next().flatten(),
            right: slots.next().flatten(),
        }
    }
}

/// Parses bracket notation.
///
/// Nesting is tracked on an explicit stack, so input depth is not limited by
/// the call stack.
#[instrument(level = "debug", skip(input), fields(len = input.len()))]
pub fn parse_bracket(input: &str) -> DomainResult<Tree> {
    let mut cursor = Cursor::new(input);
    cursor.skip_whitespace();
    if cursor.at_end() {
        return Ok(Tree::empty());
    }

    let mut open: Vec<OpenNode> = Vec::new();
    loop {
        // start of a slot, or of the whole tree when nothing is open
        cursor.skip_whitespace();
        let mut finished = if !open.is_empty() && matches!(cursor.peek(), Some(',') | Some('}')) {
            None
        } else {
            let opened_at = cursor.pos;
            let value = cursor.integer()?;
            cursor.skip_whitespace();
            if cursor.peek() == Some('{') {
                cursor.bump();
                open.push(OpenNode {
                    value,
                    opened_at,
                    slots: Vec::with_capacity(2),
                });
                continue;
            }
            Some(Box::new(Node::new(value)))
        };

        // attach the finished slot, closing as many nodes as the input closes
        loop {
            let Some(parent) = open.last_mut() else {
                cursor.skip_whitespace();
                if !cursor.at_end() {
                    return Err(DomainError::TrailingInput(cursor.pos));
                }
                debug!("parsed bracket notation");
                return Ok(Tree::from_root(finished));
            };

            parent.slots.push(finished.take());
            cursor.skip_whitespace();
            match cursor.peek() {
                Some(',') => {
                    if parent.slots.len() >= 2 {
                        return Err(DomainError::TooManyChildren(parent.opened_at));
                    }
                    cursor.bump();
                    break;
                }
                Some('}') => {
                    cursor.bump();
                    finished = open.pop().map(|node| Box::new(node.into_node()));
                }
                _ => return Err(cursor.unexpected()),
            }
        }
    }
}

/// Parses level-order notation.
#[instrument(level = "debug", skip(input), fields(len = input.len()))]
pub fn parse_level(input: &str) -> DomainResult<Tree> {
    if input.trim().is_empty() {
        return Ok(Tree::empty());
    }

    let mut values: Vec<Option<i32>> = Vec::new();
    for (index, token) in input.split(',').enumerate() {
        let literal = token.trim();
        if ABSENT_MARKERS.contains(&literal) {
            values.push(None);
        } else {
            let value = literal
                .parse::<i32>()
                .map_err(|_| DomainError::InvalidInteger {
                    literal: literal.to_string(),
                    position: index,
                })?;
            values.push(Some(value));
        }
    }

    if values[0].is_none() {
        return match values.iter().position(Option::is_some) {
            Some(index) => Err(DomainError::TooManyValues(index)),
            None => Ok(Tree::empty()),
        };
    }

    // Hand out child slots breadth-first: every present value owns the next two.
    let mut links: Vec<(Option<usize>, Option<usize>)> = vec![(None, None); values.len()];
    let mut parents: VecDeque<usize> = VecDeque::from([0]);
    let mut next = 1;
    while next < values.len() {
        let Some(parent) = parents.pop_front() else {
            break;
        };
        let left = claim_slot(&values, &mut next, &mut parents);
        let right = claim_slot(&values, &mut next, &mut parents);
        links[parent] = (left, right);
    }
    if let Some(offset) = values[next..].iter().position(Option::is_some) {
        return Err(DomainError::TooManyValues(next + offset));
    }

    // Children always come after their parent, so assemble back to front.
    let mut nodes: Vec<Option<Box<Node>>> = values
        .iter()
        .map(|value| value.map(|v| Box::new(Node::new(v))))
        .collect();
    for index in (0..nodes.len()).rev() {
        let (left, right) = links[index];
        let left = left.and_then(|child| nodes[child].take());
        let right = right.and_then(|child| nodes[child].take());
        if let Some(node) = nodes[index].as_mut() {
            node.left = left;
            node.right = right;
        }
    }

    debug!(values = values.len(), "parsed level notation");
    Ok(Tree::from_root(nodes[0].take()))
}

fn claim_slot(values: &[Option<i32>], next: &mut usize, parents: &mut VecDeque<usize>) -> Option<usize> {
    if *next >= values.len() {
        return None;
    }
    let index = *next;
    *next += 1;
    values[index].map(|_| {
        parents.push_back(index);
        index
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_reads_signed_integers() {
        let mut cursor = Cursor::new("-42+7");
        assert_eq!(cursor.integer(), Ok(-42));
        assert_eq!(cursor.integer(), Ok(7));
        assert!(cursor.at_end());
    }

    #[test]
    fn test_cursor_reports_non_ascii_char() {
        let mut cursor = Cursor::new("1{ä}");
        assert_eq!(cursor.integer(), Ok(1));
        cursor.bump();
        assert_eq!(
            cursor.integer(),
            Err(DomainError::UnexpectedChar {
                found: 'ä',
                position: 2
            })
        );
    }

    #[test]
    fn test_claim_slot_skips_absent_values() {
        let values = [Some(1), None, Some(3)];
        let mut next = 1;
        let mut parents = VecDeque::new();
        assert_eq!(claim_slot(&values, &mut next, &mut parents), None);
        assert_eq!(claim_slot(&values, &mut next, &mut parents), Some(2));
        assert_eq!(claim_slot(&values, &mut next, &mut parents), None);
        assert_eq!(parents, VecDeque::from([2]));
        assert_eq!(next, 3);
    }
}
