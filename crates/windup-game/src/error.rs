use windup_board::{BoardError, LevelError};

/// Errors that can occur while playing a game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum GameError {
    /// The game was already won or lost.
    #[display("the game is over")]
    GameOver,
    /// The level could not be turned into a board.
    #[display("{_0}")]
    Level(#[from] LevelError),
    /// The board could not be made playable.
    #[display("{_0}")]
    Board(#[from] BoardError),
}
