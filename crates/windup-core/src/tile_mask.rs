//! Static per-cell playability.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{Dimensions, ParseLayoutError, Position, layout};

/// Which cells of a board may ever hold a token.
///
/// The mask is fixed for the lifetime of a level. Cells without a tile stay empty
/// and tokens falling under gravity pass straight through them.
///
/// # Text format
///
/// One line per row, top row first: `.` marks a playable cell, `x` a cell
/// without a tile. See [`layout`] for the general rules.
///
/// # Examples
///
/// ```
/// use windup_core::{Dimensions, Position, TileMask};
///
/// let mask = TileMask::from_rows(&[
///     &[false, true, false],
///     &[true, true, true],
/// ])?;
/// assert_eq!(mask.dimensions(), Dimensions::new(3, 2));
/// assert!(mask.is_playable(Position::new(1, 1)));
/// assert!(!mask.is_playable(Position::new(0, 1)));
/// assert_eq!(mask.to_string(), "x.x\n...");
/// # Ok::<(), windup_core::ParseLayoutError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TileMask {
    dimensions: Dimensions,
    playable: Vec<bool>,
}

impl TileMask {
    /// Creates a mask where every cell is playable.
    #[must_use]
    pub fn full(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            playable: vec![true; dimensions.len()],
        }
    }

    /// Creates a mask by asking `is_playable` about every cell.
    #[must_use]
    pub fn from_fn<F>(dimensions: Dimensions, mut is_playable: F) -> Self
    where
        F: FnMut(Position) -> bool,
    {
        Self {
            dimensions,
            playable: dimensions.positions().map(&mut is_playable).collect(),
        }
    }

    /// Creates a mask from rows of flags, top row first.
    ///
    /// This is the orientation level files use: the first listed row is the top
    /// of the board.
    ///
    /// # Errors
    ///
    /// Returns [`ParseLayoutError::Empty`] if there are no cells, or
    /// [`ParseLayoutError::RaggedRow`] if the rows differ in length.
    pub fn from_rows(rows: &[&[bool]]) -> Result<Self, ParseLayoutError> {
        let expected = rows
            .first()
            .map(|row| row.len())
            .filter(|&len| len > 0)
            .ok_or(ParseLayoutError::Empty)?;
        if let Some((line, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != expected) {
            return Err(ParseLayoutError::RaggedRow {
                line,
                expected,
                found: row.len(),
            });
        }
        Ok(Self {
            dimensions: Dimensions::new(expected, rows.len()),
            playable: rows.iter().rev().flat_map(|row| row.iter().copied()).collect(),
        })
    }

    /// Returns the mask size.
    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Returns `true` if the cell at `pos` has a tile.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the mask.
    #[must_use]
    #[track_caller]
    pub fn is_playable(&self, pos: Position) -> bool {
        assert!(
            self.dimensions.contains(pos),
            "position {pos} is out of bounds for a {} tile mask",
            self.dimensions
        );
        self.playable[self.dimensions.index_of(pos)]
    }

    /// Returns the number of playable cells.
    #[must_use]
    pub fn playable_count(&self) -> usize {
        self.playable.iter().filter(|&&playable| playable).count()
    }

    /// Iterates over playable positions in raster order.
    pub fn playable_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.dimensions
            .positions()
            .zip(&self.playable)
            .filter_map(|(pos, &playable)| playable.then_some(pos))
    }
}

impl FromStr for TileMask {
    type Err = ParseLayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (dimensions, playable) = layout::parse(s, |ch| match ch {
            '.' => Some(true),
            'x' | 'X' => Some(false),
            _ => None,
        })?;
        Ok(Self {
            dimensions,
            playable,
        })
    }
}

impl Display for TileMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        layout::write(f, self.dimensions, |pos| {
            if self.is_playable(pos) { '.' } else { 'x' }
        })
    }
}
