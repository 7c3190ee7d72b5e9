//! Proposed exchanges of two tokens.

use std::{
    fmt::{self, Display},
    hash::{Hash, Hasher},
};

use windup_core::Position;

use crate::Token;

/// An unordered pair of tokens proposed for exchange.
///
/// `Swap::new(a, b) == Swap::new(b, a)`, and both hash the same, so swaps can be
/// compared against the board's possible-swap list no matter which token the
/// player started dragging.
///
/// # Examples
///
/// ```
/// use windup_board::{Board, Swap};
/// use windup_core::Position;
///
/// let board = Board::parse_layout("12")?;
/// let left = board.token_at(Position::new(0, 0)).unwrap();
/// let right = board.token_at(Position::new(1, 0)).unwrap();
///
/// assert_eq!(Swap::new(left, right), Swap::new(right, left));
/// assert!(Swap::new(left, right).contains(&right));
/// # Ok::<(), windup_board::LevelError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Swap {
    a: Token,
    b: Token,
}

impl Swap {
    /// Creates a swap between two tokens.
    #[must_use]
    pub const fn new(a: Token, b: Token) -> Self {
        Self { a, b }
    }

    /// Returns the first token, as passed to [`Swap::new`].
    #[must_use]
    pub const fn a(&self) -> &Token {
        &self.a
    }

    /// Returns the second token, as passed to [`Swap::new`].
    #[must_use]
    pub const fn b(&self) -> &Token {
        &self.b
    }

    /// Returns the two cells involved.
    #[must_use]
    pub const fn positions(&self) -> (Position, Position) {
        (self.a.position(), self.b.position())
    }

    /// Returns `true` if `token` occupies one of the two cells.
    #[must_use]
    pub fn contains(&self, token: &Token) -> bool {
        self.a == *token || self.b == *token
    }

    fn ordered_positions(&self) -> (Position, Position) {
        let (a, b) = self.positions();
        if a <= b { (a, b) } else { (b, a) }
    }
}

impl PartialEq for Swap {
    fn eq(&self, other: &Self) -> bool {
        self.ordered_positions() == other.ordered_positions()
    }
}

impl Eq for Swap {}

impl Hash for Swap {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ordered_positions().hash(state);
    }
}

impl Display for Swap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "swap {} with {}", self.a, self.b)
    }
}
