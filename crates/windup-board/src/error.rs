/// Errors that can occur while operating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// Neither random shuffling nor the deterministic repair produced a board
    /// with a legal move. The tile mask is too restrictive to play on.
    #[display("no possible swaps after {attempts} shuffle attempts and repair")]
    NoPossibleSwaps {
        /// Number of random fills tried before the repair.
        attempts: usize,
    },
}
