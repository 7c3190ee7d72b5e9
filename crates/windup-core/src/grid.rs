//! Fixed-size two-dimensional container.

use std::mem;

use crate::{Dimensions, Position};

/// A rectangular grid of optional slots addressed by [`Position`].
///
/// The size is fixed at construction. Every accessor asserts that the position
/// lies inside the grid: an out-of-range coordinate is a programming error, not
/// a recoverable condition.
///
/// # Examples
///
/// ```
/// use windup_core::{Dimensions, Grid2D, Position};
///
/// let mut grid = Grid2D::new(Dimensions::new(3, 3));
/// assert_eq!(grid.get(Position::new(1, 1)), None);
///
/// grid.set(Position::new(1, 1), Some('a'));
/// assert_eq!(grid.get(Position::new(1, 1)), Some(&'a'));
///
/// assert_eq!(grid.take(Position::new(1, 1)), Some('a'));
/// assert!(!grid.is_occupied(Position::new(1, 1)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid2D<T> {
    dimensions: Dimensions,
    slots: Vec<Option<T>>,
}

impl<T> Grid2D<T> {
    /// Creates a grid with every slot empty.
    #[must_use]
    pub fn new(dimensions: Dimensions) -> Self {
        let slots = (0..dimensions.len()).map(|_| None).collect();
        Self { dimensions, slots }
    }

    /// Returns the grid size.
    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    #[track_caller]
    fn index(&self, pos: Position) -> usize {
        assert!(
            self.dimensions.contains(pos),
            "position {pos} is out of bounds for a {} grid",
            self.dimensions
        );
        self.dimensions.index_of(pos)
    }

    /// Returns a reference to the value at `pos`, if any.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    #[must_use]
    #[track_caller]
    pub fn get(&self, pos: Position) -> Option<&T> {
        self.slots[self.index(pos)].as_ref()
    }

    /// Returns a mutable reference to the value at `pos`, if any.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    #[must_use]
    #[track_caller]
    pub fn get_mut(&mut self, pos: Position) -> Option<&mut T> {
        let index = self.index(pos);
        self.slots[index].as_mut()
    }

    /// Stores `value` at `pos` and returns the previous value.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    #[track_caller]
    pub fn set(&mut self, pos: Position, value: Option<T>) -> Option<T> {
        let index = self.index(pos);
        mem::replace(&mut self.slots[index], value)
    }

    /// Empties the slot at `pos` and returns its value.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    #[track_caller]
    pub fn take(&mut self, pos: Position) -> Option<T> {
        let index = self.index(pos);
        self.slots[index].take()
    }

    /// Exchanges the contents of two slots.
    ///
    /// # Panics
    ///
    /// Panics if either position is outside the grid.
    #[track_caller]
    pub fn swap(&mut self, a: Position, b: Position) {
        let a = self.index(a);
        let b = self.index(b);
        self.slots.swap(a, b);
    }

    /// Returns `true` if the slot at `pos` holds a value.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    #[must_use]
    #[track_caller]
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.get(pos).is_some()
    }

    /// Empties every slot.
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
    }

    /// Iterates over occupied slots in raster order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &T)> {
        self.dimensions
            .positions()
            .zip(&self.slots)
            .filter_map(|(pos, slot)| slot.as_ref().map(|value| (pos, value)))
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid: Grid2D<u8> = Grid2D::new(Dimensions::new(4, 2));
        assert_eq!(grid.dimensions(), Dimensions::new(4, 2));
        assert_eq!(grid.iter().count(), 0);
    }

    #[test]
    fn test_set_returns_previous() {
        let mut grid = Grid2D::new(Dimensions::new(2, 2));
        let pos = Position::new(1, 0);
        assert_eq!(grid.set(pos, Some(1)), None);
        assert_eq!(grid.set(pos, Some(2)), Some(1));
        assert_eq!(grid.set(pos, None), Some(2));
        assert!(!grid.is_occupied(pos));
    }

    #[test]
    fn test_swap_and_iter_order() {
        let mut grid = Grid2D::new(Dimensions::new(2, 2));
        grid.set(Position::new(0, 0), Some('a'));
        grid.set(Position::new(1, 1), Some('b'));
        grid.swap(Position::new(0, 0), Position::new(0, 1));

        let items: Vec<_> = grid.iter().map(|(pos, value)| (pos, *value)).collect();
        assert_eq!(
            items,
            [(Position::new(0, 1), 'a'), (Position::new(1, 1), 'b')]
        );

        grid.clear();
        assert_eq!(grid.iter().count(), 0);
    }

    #[test]
    fn test_get_mut_updates_in_place() {
        let mut grid = Grid2D::new(Dimensions::new(1, 1));
        grid.set(Position::new(0, 0), Some(10));
        if let Some(value) = grid.get_mut(Position::new(0, 0)) {
            *value += 1;
        }
        assert_eq!(grid.get(Position::new(0, 0)), Some(&11));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_get_out_of_bounds_column_panics() {
        let grid: Grid2D<u8> = Grid2D::new(Dimensions::new(3, 3));
        let _ = grid.get(Position::new(3, 0));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_set_out_of_bounds_row_panics() {
        let mut grid = Grid2D::new(Dimensions::new(3, 3));
        grid.set(Position::new(0, 3), Some(1));
    }

    proptest! {
        #[test]
        fn test_set_then_get(columns in 1usize..12, rows in 1usize..12, seed in any::<u64>()) {
            let dims = Dimensions::new(columns, rows);
            let mut grid = Grid2D::new(dims);
            let mut expected = Vec::new();
            for (i, pos) in dims.positions().enumerate() {
                if (seed >> (i % 64)) & 1 == 1 {
                    grid.set(pos, Some(i));
                    expected.push((pos, i));
                }
            }
            let actual: Vec<_> = grid.iter().map(|(pos, value)| (pos, *value)).collect();
            prop_assert_eq!(actual, expected);
        }
    }
}
