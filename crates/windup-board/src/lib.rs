//! Deterministic match-3 board simulation.
//!
//! This crate owns the rules of a windup board: where tokens may be, which
//! swaps are legal, how chains are found and scored, and how the board refills
//! after a match. It never renders, animates or waits; every operation returns
//! plain data describing what happened so a presentation layer can play it back.
//!
//! # Overview
//!
//! - [`LevelData`] describes a level (tile mask, target score, move budget) and
//!   [`BoardConfig`] tunes the rules. [`BoardSeed`] makes token generation
//!   reproducible.
//! - [`Board`] holds the tokens and runs the turn operations: swap validation
//!   and execution, chain removal, gravity, top-up, and possible-swap detection.
//! - [`Token`], [`Swap`] and [`Chain`] are the values exchanged with callers.
//!   Tokens compare by position; use [`Token::id`] for stable identity.
//! - [`BoardLayout`] is a text snapshot of a board, handy for tests and replays.
//!
//! # Examples
//!
//! A full turn on a hand-written board:
//!
//! ```
//! use windup_board::Board;
//! use windup_core::{Direction, Position};
//!
//! let mut board = Board::parse_layout("
//!     3456
//!     4562
//!     1211
//! ")?;
//! let swap = board.swap_toward(Position::new(0, 0), Direction::Right).unwrap();
//! assert!(board.is_possible_swap(&swap));
//!
//! board.perform_swap(&swap);
//! board.reset_combo_multiplier();
//! let chains = board.remove_matches();
//! assert_eq!(chains.len(), 1);
//! assert_eq!(chains[0].score(), 60);
//!
//! board.fill_holes();
//! board.top_up_tokens();
//! assert_eq!(board.tokens().count(), 12);
//! # Ok::<(), windup_board::LevelError>(())
//! ```

pub use self::{
    board::Board,
    chain::{Chain, ChainKind},
    config::BoardConfig,
    error::BoardError,
    layout::{BoardLayout, LayoutCell},
    level::{LevelData, LevelError},
    seed::{BoardSeed, ParseBoardSeedError},
    swap::Swap,
    token::{Token, TokenId},
};

mod board;
mod chain;
mod config;
mod error;
mod layout;
mod level;
mod seed;
mod swap;
mod token;
