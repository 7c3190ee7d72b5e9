//! Text snapshots of a board.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use windup_core::{Dimensions, ParseLayoutError, Position, TileMask, TokenKind, layout};

/// One cell of a [`BoardLayout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutCell {
    /// No tile: the cell can never hold a token. Written as `x`.
    NoTile,
    /// A playable cell without a token. Written as `.`.
    Empty,
    /// A playable cell holding a token of this kind. Written as its digit `1`-`6`.
    Token(TokenKind),
}

impl LayoutCell {
    fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'x' | 'X' => Some(Self::NoTile),
            '.' => Some(Self::Empty),
            _ => TokenKind::from_symbol(ch).map(Self::Token),
        }
    }

    fn symbol(self) -> char {
        match self {
            Self::NoTile => 'x',
            Self::Empty => '.',
            Self::Token(kind) => kind.symbol(),
        }
    }

    /// Returns `true` unless this is [`LayoutCell::NoTile`].
    #[must_use]
    pub fn is_playable(self) -> bool {
        !matches!(self, Self::NoTile)
    }
}

/// A board's tiles and token kinds, without ids or randomness.
///
/// Layouts describe deterministic scenarios (puzzles, replays, tests) and are
/// what [`Board`](crate::Board) prints. The text format follows
/// [`windup_core::layout`]: top row first, `x` for no tile, `.` for an empty
/// playable cell, and `1`-`6` for a token (see [`TokenKind::symbol`]).
///
/// # Examples
///
/// ```
/// use windup_board::{BoardLayout, LayoutCell};
/// use windup_core::{Position, TokenKind};
///
/// let layout: BoardLayout = "
///     x12
///     3.4
/// "
/// .parse()?;
/// assert_eq!(layout.cell(Position::new(0, 1)), LayoutCell::NoTile);
/// assert_eq!(layout.cell(Position::new(1, 0)), LayoutCell::Empty);
/// assert_eq!(layout.cell(Position::new(2, 1)), LayoutCell::Token(TokenKind::Frog));
/// assert_eq!(layout.tile_mask().to_string(), "x..\n...");
/// # Ok::<(), windup_core::ParseLayoutError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoardLayout {
    dimensions: Dimensions,
    cells: Vec<LayoutCell>,
}

impl BoardLayout {
    pub(crate) fn from_fn<F>(dimensions: Dimensions, cell: F) -> Self
    where
        F: FnMut(Position) -> LayoutCell,
    {
        Self {
            dimensions,
            cells: dimensions.positions().map(cell).collect(),
        }
    }

    /// Returns the layout size.
    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Returns the cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the layout.
    #[must_use]
    #[track_caller]
    pub fn cell(&self, pos: Position) -> LayoutCell {
        assert!(
            self.dimensions.contains(pos),
            "position {pos} is out of bounds for a {} layout",
            self.dimensions
        );
        self.cells[pos.row() * self.dimensions.columns() + pos.column()]
    }

    /// Iterates over all cells in raster order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, LayoutCell)> + '_ {
        self.dimensions.positions().zip(self.cells.iter().copied())
    }

    /// Returns the tile mask implied by this layout.
    #[must_use]
    pub fn tile_mask(&self) -> TileMask {
        TileMask::from_fn(self.dimensions, |pos| self.cell(pos).is_playable())
    }
}

impl FromStr for BoardLayout {
    type Err = ParseLayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (dimensions, cells) = layout::parse(s, LayoutCell::from_symbol)?;
        Ok(Self { dimensions, cells })
    }
}

impl Display for BoardLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        layout::write(f, self.dimensions, |pos| self.cell(pos).symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let text = "x123x\n45.61\nxx1xx";
        let layout: BoardLayout = text.parse().unwrap();
        assert_eq!(layout.to_string(), text);
        assert_eq!(layout.dimensions(), Dimensions::new(5, 3));
        assert_eq!(
            layout.cells().filter(|(_, cell)| cell.is_playable()).count(),
            9
        );
    }

    #[test]
    fn test_rejects_unknown_symbols() {
        assert!(matches!(
            "127".parse::<BoardLayout>(),
            Err(ParseLayoutError::InvalidChar { ch: '7', .. })
        ));
    }
}
