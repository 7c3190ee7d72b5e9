//! Level construction input.

use windup_core::{Dimensions, ParseLayoutError, Position, TileMask};

/// Errors that can occur when constructing a level or a board from it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum LevelError {
    /// The tile mask does not have the configured board size.
    #[display("invalid level data: tile mask is {found}, expected {expected}")]
    DimensionMismatch {
        /// Dimensions from the board configuration.
        expected: Dimensions,
        /// Dimensions of the tile mask or layout.
        found: Dimensions,
    },
    /// The tile mask has no playable cell.
    #[display("invalid level data: no playable tiles")]
    NoPlayableTiles,
    /// The target score is zero.
    #[display("invalid level data: target score must be positive")]
    ZeroTargetScore,
    /// The move budget is zero.
    #[display("invalid level data: move budget must be positive")]
    ZeroMoves,
    /// A board layout disagrees with the level's tile mask.
    #[display("invalid level data: layout cell {position} does not match the tile mask")]
    LayoutMismatch {
        /// The first disagreeing cell.
        position: Position,
    },
    /// A tile mask or board layout could not be parsed.
    #[display("invalid level data: {_0}")]
    InvalidLayout(#[from] ParseLayoutError),
}

/// Everything the board needs to know about a level.
///
/// Loading this from a level file is up to the caller; the board only accepts
/// validated data.
///
/// # Examples
///
/// ```
/// use windup_board::{LevelData, LevelError};
/// use windup_core::TileMask;
///
/// let mask: TileMask = "
///     .....
///     .....
///     .....
/// "
/// .parse()?;
/// let level = LevelData::new(mask.clone(), 1000, 15)?;
/// assert_eq!(level.target_score(), 1000);
///
/// assert_eq!(LevelData::new(mask, 1000, 0), Err(LevelError::ZeroMoves));
/// # Ok::<(), LevelError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelData {
    tile_mask: TileMask,
    target_score: u32,
    maximum_moves: u32,
}

impl LevelData {
    /// Creates validated level data.
    ///
    /// # Errors
    ///
    /// Returns [`LevelError::NoPlayableTiles`], [`LevelError::ZeroTargetScore`] or
    /// [`LevelError::ZeroMoves`] if the corresponding field is unusable.
    pub fn new(
        tile_mask: TileMask,
        target_score: u32,
        maximum_moves: u32,
    ) -> Result<Self, LevelError> {
        if tile_mask.playable_count() == 0 {
            return Err(LevelError::NoPlayableTiles);
        }
        if target_score == 0 {
            return Err(LevelError::ZeroTargetScore);
        }
        if maximum_moves == 0 {
            return Err(LevelError::ZeroMoves);
        }
        Ok(Self {
            tile_mask,
            target_score,
            maximum_moves,
        })
    }

    /// Creates a level that can never be won or lost.
    ///
    /// Target score and move budget are both `u32::MAX`. Useful for replays,
    /// benchmarks and tests that only care about board mechanics.
    ///
    /// # Errors
    ///
    /// Returns [`LevelError::NoPlayableTiles`] if the mask has no playable cell.
    pub fn sandbox(tile_mask: TileMask) -> Result<Self, LevelError> {
        Self::new(tile_mask, u32::MAX, u32::MAX)
    }

    /// Returns the static tile mask.
    #[must_use]
    pub fn tile_mask(&self) -> &TileMask {
        &self.tile_mask
    }

    /// Returns the score needed to win the level.
    #[must_use]
    pub fn target_score(&self) -> u32 {
        self.target_score
    }

    /// Returns the number of moves the player may make.
    #[must_use]
    pub fn maximum_moves(&self) -> u32 {
        self.maximum_moves
    }
}
