//! Turn loop for windup levels.
//!
//! [`windup_board`] provides the board operations one by one; this crate
//! strings them into play. A [`Game`] validates each swap, runs the cascade of
//! removals and refills until the board settles, keeps score, counts moves, and
//! decides when the level is won or lost. Each accepted turn comes back as a
//! [`Turn`] listing every [`CascadeStep`], so a presentation layer can animate
//! it without calling back into the board.
//!
//! # Examples
//!
//! ```
//! use windup_board::Board;
//! use windup_core::{Direction, Position};
//! use windup_game::{Game, TurnOutcome};
//!
//! let board = Board::parse_layout("
//!     3456
//!     4562
//!     1211
//! ")?;
//! let mut game = Game::from_board(board)?;
//!
//! let outcome = game.swipe(Position::new(1, 0), Direction::Left)?;
//! let TurnOutcome::Accepted(turn) = outcome else {
//!     panic!("the swipe completes a chain");
//! };
//! assert_eq!(turn.steps()[0].chains()[0].len(), 3);
//! assert_eq!(game.score(), turn.score());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{
    error::GameError,
    game::{Game, GameStatus},
    turn::{CascadeStep, Turn, TurnOutcome},
};

mod error;
mod game;
mod turn;
