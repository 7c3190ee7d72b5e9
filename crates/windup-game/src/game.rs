use windup_board::{Board, BoardConfig, BoardSeed, LevelData, Swap, Token};
use windup_core::{Direction, Position};

use crate::{CascadeStep, GameError, Turn, TurnOutcome};

/// Where a game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant)]
pub enum GameStatus {
    /// Moves remain and the target score has not been reached.
    #[display("playing")]
    Playing,
    /// The target score was reached.
    #[display("won")]
    Won,
    /// The move budget ran out before the target score was reached.
    #[display("lost")]
    Lost,
}

/// A level being played.
///
/// Wraps a [`Board`] with the turn loop: validating swaps, running the cascade
/// until the board settles, keeping score, and counting moves against the
/// level's budget.
///
/// # Examples
///
/// ```
/// use windup_board::{BoardConfig, BoardSeed, LevelData};
/// use windup_core::TileMask;
/// use windup_game::Game;
///
/// let config = BoardConfig::default();
/// let level = LevelData::new(TileMask::full(config.dimensions()), 60, 3)?;
/// let mut game = Game::new(&level, config, BoardSeed::from_u64(1))?;
/// assert_eq!(game.moves_left(), 3);
///
/// let swap = game.board().possible_swaps()[0];
/// let outcome = game.try_swap(&swap)?;
/// assert!(outcome.is_accepted());
/// assert!(game.score() >= 60);
/// assert!(game.status().is_won());
/// # Ok::<(), windup_game::GameError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    score: u32,
    moves_left: u32,
    status: GameStatus,
}

impl Game {
    /// Starts a game on a freshly shuffled board.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Level`] if the level does not fit the configuration,
    /// or [`GameError::Board`] if no playable board can be generated.
    pub fn new(level: &LevelData, config: BoardConfig, seed: BoardSeed) -> Result<Self, GameError> {
        Self::from_board(Board::new(level, config, seed)?)
    }

    /// Starts a game on an existing board.
    ///
    /// An empty board is shuffled. A board that already holds tokens is kept as
    /// is, unless it has no legal swap, in which case it is shuffled too.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Board`] if the board needs a shuffle and no playable
    /// board can be generated.
    pub fn from_board(mut board: Board) -> Result<Self, GameError> {
        board.reset_combo_multiplier();
        if board.tokens().next().is_none() || board.detect_possible_swaps() == 0 {
            board.shuffle()?;
        }
        log::info!(
            "starting game: target {}, {} moves",
            board.target_score(),
            board.maximum_moves()
        );
        Ok(Self {
            moves_left: board.maximum_moves(),
            board,
            score: 0,
            status: GameStatus::Playing,
        })
    }

    /// Returns the board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the score so far.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Returns the score needed to win.
    #[must_use]
    pub fn target_score(&self) -> u32 {
        self.board.target_score()
    }

    /// Returns how many moves the player has left.
    #[must_use]
    pub fn moves_left(&self) -> u32 {
        self.moves_left
    }

    /// Returns whether the game is still running.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    fn ensure_playing(&self) -> Result<(), GameError> {
        if self.status.is_playing() {
            Ok(())
        } else {
            Err(GameError::GameOver)
        }
    }

    /// Plays `swap` if it is legal.
    ///
    /// An accepted swap is followed by the cascade: chains are removed and
    /// scored, tokens fall and new ones are spawned, until no chain is left. The
    /// combo multiplier carries across the whole cascade. The turn then costs one
    /// move. If the game goes on and the board has no legal swap left, it is
    /// reshuffled for free.
    ///
    /// The turn is returned even if that reshuffle fails; see
    /// [`Turn::reshuffle_error`].
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GameOver`] if the game has ended.
    pub fn try_swap(&mut self, swap: &Swap) -> Result<TurnOutcome, GameError> {
        self.ensure_playing()?;
        if !self.board.is_possible_swap(swap) {
            log::debug!("rejected {swap}");
            return Ok(TurnOutcome::Rejected);
        }

        self.board.perform_swap(swap);
        self.board.reset_combo_multiplier();
        let mut turn = Turn::new(*swap, self.run_cascade());
        self.score = self.score.saturating_add(turn.score());
        self.spend_move();

        if self.board.detect_possible_swaps() == 0 && self.status.is_playing() {
            log::debug!("no possible swaps left, reshuffling");
            let result = self.board.shuffle();
            if let Err(err) = &result {
                log::warn!("could not reshuffle after the turn: {err}");
            }
            turn.set_reshuffle_result(result);
        }

        log::info!(
            "turn scored {} in {} steps: score {}/{}, {} moves left, {}",
            turn.score(),
            turn.steps().len(),
            self.score,
            self.target_score(),
            self.moves_left,
            self.status
        );
        Ok(TurnOutcome::Accepted(turn))
    }

    /// Plays the swap requested by swiping the token at `from` toward
    /// `direction`.
    ///
    /// A swipe from or toward a cell without a token is rejected.
    ///
    /// # Errors
    ///
    /// Same as [`Game::try_swap`].
    ///
    /// # Panics
    ///
    /// Panics if `from` is outside the board.
    #[track_caller]
    pub fn swipe(&mut self, from: Position, direction: Direction) -> Result<TurnOutcome, GameError> {
        self.ensure_playing()?;
        match self.board.swap_toward(from, direction) {
            Some(swap) => self.try_swap(&swap),
            None => Ok(TurnOutcome::Rejected),
        }
    }

    /// Replaces the board with a new shuffle at the cost of one move.
    ///
    /// Returns every token of the new board.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GameOver`] if the game has ended, or
    /// [`GameError::Board`] if no playable board can be generated.
    pub fn reshuffle(&mut self) -> Result<Vec<Token>, GameError> {
        self.ensure_playing()?;
        let tokens = self.board.shuffle()?;
        self.spend_move();
        log::info!(
            "reshuffled on request: {} moves left, {}",
            self.moves_left,
            self.status
        );
        Ok(tokens)
    }

    fn run_cascade(&mut self) -> Vec<CascadeStep> {
        let mut steps = Vec::new();
        loop {
            let chains = self.board.remove_matches();
            if chains.is_empty() {
                break;
            }
            let fallen = self.board.fill_holes();
            let spawned = self.board.top_up_tokens();
            log::debug!(
                "cascade step {}: {} chains removed",
                steps.len() + 1,
                chains.len()
            );
            steps.push(CascadeStep::new(chains, fallen, spawned));
        }
        steps
    }

    fn spend_move(&mut self) {
        self.moves_left = self.moves_left.saturating_sub(1);
        self.status = if self.score >= self.target_score() {
            GameStatus::Won
        } else if self.moves_left == 0 {
            GameStatus::Lost
        } else {
            GameStatus::Playing
        };
        if !self.status.is_playing() {
            log::info!("game {} with score {}", self.status, self.score);
        }
    }
}
