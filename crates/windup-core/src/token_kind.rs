//! Token kinds.

use std::fmt::{self, Display};

/// The kind of a token on the board.
///
/// Three or more adjacent tokens of the same kind in a straight line form a chain.
/// Each kind maps to an asset name that presentation layers use to pick sprites.
///
/// # Examples
///
/// ```
/// use windup_core::TokenKind;
///
/// assert_eq!(TokenKind::ALL.len(), 6);
/// assert_eq!(TokenKind::Frog.name(), "Frog");
/// assert_eq!(TokenKind::Frog.highlighted_name(), "Frog-Highlighted");
/// assert_eq!(TokenKind::from_symbol('2'), Some(TokenKind::Frog));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum TokenKind {
    /// A wind-up piggy.
    Piggy = 1,
    /// A wind-up frog.
    Frog = 2,
    /// A wind-up bat.
    Bat = 3,
    /// A wind-up gnome.
    Gnome = 4,
    /// A wind-up chick.
    Chick = 5,
    /// A wind-up crab.
    Crab = 6,
}

impl TokenKind {
    /// Every kind, in symbol order.
    pub const ALL: [Self; 6] = [
        Self::Piggy,
        Self::Frog,
        Self::Bat,
        Self::Gnome,
        Self::Chick,
        Self::Crab,
    ];

    /// Returns the asset name for this kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Piggy => "Piggy",
            Self::Frog => "Frog",
            Self::Bat => "Bat",
            Self::Gnome => "Gnome",
            Self::Chick => "Chick",
            Self::Crab => "Crab",
        }
    }

    /// Returns the asset name for the selected variant of this kind.
    #[must_use]
    pub fn highlighted_name(self) -> String {
        format!("{}-Highlighted", self.name())
    }

    /// Returns the digit (`'1'`-`'6'`) used for this kind in board layouts.
    #[must_use]
    pub const fn symbol(self) -> char {
        (b'0' + self as u8) as char
    }

    /// Parses a layout digit back into a kind.
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.symbol() == symbol)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_round_trip() {
        for kind in TokenKind::ALL {
            assert_eq!(TokenKind::from_symbol(kind.symbol()), Some(kind));
        }
        assert_eq!(TokenKind::Piggy.symbol(), '1');
        assert_eq!(TokenKind::Crab.symbol(), '6');
        assert_eq!(TokenKind::from_symbol('0'), None);
        assert_eq!(TokenKind::from_symbol('7'), None);
        assert_eq!(TokenKind::from_symbol('.'), None);
    }

    #[test]
    fn test_names() {
        assert_eq!(TokenKind::Chick.to_string(), "Chick");
        assert_eq!(TokenKind::Crab.highlighted_name(), "Crab-Highlighted");
    }
}
