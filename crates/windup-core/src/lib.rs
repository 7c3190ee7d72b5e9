//! Core data structures for match-3 boards.
//!
//! This crate provides the leaf types shared by the board simulation and its
//! collaborators. Nothing here knows about matching rules or randomness.
//!
//! # Overview
//!
//! 1. **Coordinates** - [`position`]: [`Position`], [`Dimensions`] and [`Direction`].
//!    Row `0` is the bottom row, columns grow to the right.
//!
//! 2. **Containers** - [`grid`]: [`Grid2D`], a fixed-size, bounds-checked grid of
//!    optional slots.
//!
//! 3. **Level data** - [`token_kind`] and [`tile_mask`]: the closed set of
//!    [`TokenKind`]s and the static [`TileMask`] describing which cells may ever hold
//!    a token.
//!
//! 4. **Text format** - [`layout`]: the line-based cell format shared by
//!    [`TileMask`] and the board layout parser.
//!
//! # Examples
//!
//! ```
//! use windup_core::{Position, TileMask};
//!
//! let mask: TileMask = "
//!     x..
//!     ...
//! "
//! .parse()?;
//!
//! // The first line is the top row.
//! assert!(!mask.is_playable(Position::new(0, 1)));
//! assert!(mask.is_playable(Position::new(0, 0)));
//! assert_eq!(mask.playable_count(), 5);
//! # Ok::<(), windup_core::ParseLayoutError>(())
//! ```

pub mod grid;
pub mod layout;
pub mod position;
pub mod tile_mask;
pub mod token_kind;

pub use self::{
    grid::Grid2D,
    layout::ParseLayoutError,
    position::{Dimensions, Direction, Position},
    tile_mask::TileMask,
    token_kind::TokenKind,
};
