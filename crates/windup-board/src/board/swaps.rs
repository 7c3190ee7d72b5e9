use windup_core::{Direction, Position};

use super::Board;
use crate::Swap;

impl Board {
    /// Returns `true` if exchanging the tokens at `a` and `b` would leave a chain
    /// at either cell. The board is left as it was.
    fn swap_creates_chain(&mut self, a: Position, b: Position) -> bool {
        self.tokens.swap(a, b);
        let found = self.has_chain_at(a) || self.has_chain_at(b);
        self.tokens.swap(a, b);
        found
    }

    /// Recomputes the list of legal swaps.
    ///
    /// Every pair of horizontally or vertically adjacent tokens is tried: a swap
    /// is legal if, once applied, either of the two cells is part of a chain.
    /// Must be called after the board changes and before the next
    /// [`Board::is_possible_swap`].
    ///
    /// Returns the number of legal swaps found.
    pub fn detect_possible_swaps(&mut self) -> usize {
        let dimensions = self.dimensions();
        let mut swaps = Vec::new();
        for pos in dimensions.positions() {
            if !self.tokens.is_occupied(pos) {
                continue;
            }
            for direction in [Direction::Right, Direction::Up] {
                let Some(other) = pos
                    .neighbor(direction)
                    .filter(|&other| dimensions.contains(other) && self.tokens.is_occupied(other))
                else {
                    continue;
                };
                if self.swap_creates_chain(pos, other)
                    && let (Some(a), Some(b)) = (self.token_at(pos), self.token_at(other))
                {
                    swaps.push(Swap::new(a, b));
                }
            }
        }

        log::debug!("detected {} possible swaps", swaps.len());
        self.possible_swaps = swaps;
        self.possible_swaps.len()
    }

    /// Returns `true` if `swap` is in the list of legal swaps.
    ///
    /// The order of the two tokens does not matter.
    #[must_use]
    pub fn is_possible_swap(&self, swap: &Swap) -> bool {
        self.possible_swaps.contains(swap)
    }

    /// Exchanges the two tokens of `swap` and updates their positions.
    ///
    /// The swap is not validated; check [`Board::is_possible_swap`] first.
    /// Performing the same swap twice restores the board.
    ///
    /// # Panics
    ///
    /// Panics if either cell is outside the board.
    #[track_caller]
    pub fn perform_swap(&mut self, swap: &Swap) {
        let (a, b) = swap.positions();
        self.tokens.swap(a, b);
        for pos in [a, b] {
            if let Some(token) = self.tokens.get_mut(pos) {
                token.set_position(pos);
            }
        }
    }
}
