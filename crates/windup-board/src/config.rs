use std::num::NonZero;

use windup_core::Dimensions;

const DEFAULT_MAX_SHUFFLE_ATTEMPTS: NonZero<usize> = NonZero::new(100).unwrap();
const DEFAULT_BASE_CHAIN_SCORE: u32 = 60;

/// Tunable board parameters.
///
/// # Examples
///
/// ```
/// use std::num::NonZero;
///
/// use windup_board::BoardConfig;
/// use windup_core::Dimensions;
///
/// let config = BoardConfig::default()
///     .with_dimensions(Dimensions::new(6, 6))
///     .with_max_shuffle_attempts(NonZero::new(10).unwrap());
/// assert_eq!(config.dimensions(), Dimensions::new(6, 6));
/// assert_eq!(config.base_chain_score(), 60);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    dimensions: Dimensions,
    max_shuffle_attempts: NonZero<usize>,
    base_chain_score: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            dimensions: Dimensions::CLASSIC,
            max_shuffle_attempts: DEFAULT_MAX_SHUFFLE_ATTEMPTS,
            base_chain_score: DEFAULT_BASE_CHAIN_SCORE,
        }
    }
}

impl BoardConfig {
    /// Sets the board size. Level tile masks must match it.
    #[must_use]
    pub fn with_dimensions(mut self, dimensions: Dimensions) -> Self {
        self.dimensions = dimensions;
        self
    }

    /// Sets how many random fills [`Board::shuffle`](crate::Board::shuffle) tries
    /// before falling back to the deterministic repair.
    #[must_use]
    pub fn with_max_shuffle_attempts(mut self, attempts: NonZero<usize>) -> Self {
        self.max_shuffle_attempts = attempts;
        self
    }

    /// Sets the points per token beyond the first two in a chain.
    ///
    /// A chain scores `base * (length - 2) * combo_multiplier`.
    #[must_use]
    pub fn with_base_chain_score(mut self, score: u32) -> Self {
        self.base_chain_score = score;
        self
    }

    /// Returns the board size.
    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Returns the shuffle attempt cap.
    #[must_use]
    pub fn max_shuffle_attempts(&self) -> NonZero<usize> {
        self.max_shuffle_attempts
    }

    /// Returns the base chain score.
    #[must_use]
    pub fn base_chain_score(&self) -> u32 {
        self.base_chain_score
    }
}
