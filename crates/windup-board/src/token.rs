//! Tokens placed on the board.

use std::{
    fmt::{self, Display},
    hash::{Hash, Hasher},
};

use windup_core::{Position, TokenKind};

/// Stable identity of a token.
///
/// Ids are assigned when a token is created and never reused within one board,
/// so collaborators can key sprites or animation state by id while the token
/// moves around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TokenId(u64);

impl TokenId {
    /// Returns the raw id value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A snapshot of one token on the board.
///
/// The kind never changes; the position is updated by the board whenever the
/// token is swapped or falls. Tokens returned from board operations are copies
/// taken at that moment.
///
/// # Equality
///
/// Two tokens are equal when they occupy the same cell, **regardless of kind or
/// id**. This makes [`Swap`](crate::Swap) comparisons positional. Compare
/// [`Token::kind`] or [`Token::id`] explicitly when that is what you mean.
///
/// # Examples
///
/// ```
/// use windup_board::Board;
/// use windup_core::Position;
///
/// let board = Board::parse_layout("
///     123
///     456
/// ")?;
/// let token = board.token_at(Position::new(0, 1)).unwrap();
/// assert_eq!(token.kind().name(), "Piggy");
/// assert_eq!(token.position(), Position::new(0, 1));
/// # Ok::<(), windup_board::LevelError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Token {
    id: TokenId,
    kind: TokenKind,
    position: Position,
}

impl Token {
    pub(crate) const fn new(id: u64, kind: TokenKind, position: Position) -> Self {
        Self {
            id: TokenId(id),
            kind,
            position,
        }
    }

    /// Returns the token's stable id.
    #[must_use]
    pub const fn id(&self) -> TokenId {
        self.id
    }

    /// Returns the token's kind.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Returns the cell the token occupied when this snapshot was taken.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Shorthand for `self.position().column()`.
    #[must_use]
    pub const fn column(&self) -> usize {
        self.position.column()
    }

    /// Shorthand for `self.position().row()`.
    #[must_use]
    pub const fn row(&self) -> usize {
        self.position.row()
    }

    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = position;
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.position.hash(state);
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} at {}", self.kind, self.id, self.position)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_equality_is_positional() {
        let a = Token::new(1, TokenKind::Frog, Position::new(2, 3));
        let b = Token::new(7, TokenKind::Crab, Position::new(2, 3));
        let c = Token::new(1, TokenKind::Frog, Position::new(3, 3));
        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<_> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_accessors_and_display() {
        let mut token = Token::new(12, TokenKind::Bat, Position::new(4, 1));
        assert_eq!(token.id().value(), 12);
        assert_eq!((token.column(), token.row()), (4, 1));
        token.set_position(Position::new(4, 0));
        assert_eq!(token.position(), Position::new(4, 0));
        assert_eq!(token.to_string(), "Bat #12 at (4, 0)");
    }
}
