//! Board coordinates.

use std::fmt::{self, Display};

/// A cell coordinate on a board.
///
/// Columns grow to the right and rows grow upward: `(0, 0)` is the bottom-left
/// cell. Gravity pulls tokens toward row `0`.
///
/// # Examples
///
/// ```
/// use windup_core::{Direction, Position};
///
/// let pos = Position::new(2, 0);
/// assert_eq!(pos.neighbor(Direction::Up), Some(Position::new(2, 1)));
/// assert_eq!(pos.neighbor(Direction::Down), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    column: usize,
    row: usize,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }

    /// Returns the column (x coordinate).
    #[must_use]
    pub const fn column(self) -> usize {
        self.column
    }

    /// Returns the row (y coordinate, `0` is the bottom row).
    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Returns the adjacent position in `direction`.
    ///
    /// Returns `None` when the step would leave the non-negative quadrant. The
    /// upper bounds are not checked; use [`Dimensions::contains`] for that.
    #[must_use]
    pub fn neighbor(self, direction: Direction) -> Option<Self> {
        let Self { column, row } = self;
        match direction {
            Direction::Left => column.checked_sub(1).map(|column| Self::new(column, row)),
            Direction::Right => Some(Self::new(column + 1, row)),
            Direction::Down => row.checked_sub(1).map(|row| Self::new(column, row)),
            Direction::Up => Some(Self::new(column, row + 1)),
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

/// One of the four orthogonal directions a token can be swiped toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward column `0`.
    Left,
    /// Toward the last column.
    Right,
    /// Toward the top row.
    Up,
    /// Toward row `0`.
    Down,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Up, Self::Down];

    /// Returns the direction pointing the other way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }
}

/// The size of a board, in cells.
///
/// # Examples
///
/// ```
/// use windup_core::{Dimensions, Position};
///
/// let dims = Dimensions::new(3, 2);
/// assert!(dims.contains(Position::new(2, 1)));
/// assert!(!dims.contains(Position::new(3, 0)));
///
/// // Raster order: bottom row first, left to right.
/// let positions: Vec<_> = dims.positions().collect();
/// assert_eq!(positions[0], Position::new(0, 0));
/// assert_eq!(positions[3], Position::new(0, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    columns: usize,
    rows: usize,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::CLASSIC
    }
}

impl Dimensions {
    /// The classic 9×9 board.
    pub const CLASSIC: Self = Self::new(9, 9);

    /// Creates new dimensions.
    ///
    /// # Panics
    ///
    /// Panics if either `columns` or `rows` is zero.
    #[must_use]
    pub const fn new(columns: usize, rows: usize) -> Self {
        assert!(columns > 0 && rows > 0, "board dimensions must be non-zero");
        Self { columns, rows }
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn columns(self) -> usize {
        self.columns
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn rows(self) -> usize {
        self.rows
    }

    /// Returns the total number of cells.
    #[must_use]
    pub const fn len(self) -> usize {
        self.columns * self.rows
    }

    /// Always `false`: dimensions are non-zero by construction.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        false
    }

    /// Returns `true` if `pos` lies inside the board.
    #[must_use]
    pub const fn contains(self, pos: Position) -> bool {
        pos.column < self.columns && pos.row < self.rows
    }

    /// Returns every position in raster order: rows bottom to top, each row left to right.
    pub fn positions(self) -> impl Iterator<Item = Position> + Clone {
        let Self { columns, rows } = self;
        (0..rows).flat_map(move |row| (0..columns).map(move |column| Position::new(column, row)))
    }

    pub(crate) const fn index_of(self, pos: Position) -> usize {
        pos.row * self.columns + pos.column
    }
}

impl Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.columns, self.rows)
    }
}
