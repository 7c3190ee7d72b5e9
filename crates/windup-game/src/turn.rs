//! Records of what happened during a turn.

use windup_board::{BoardError, Chain, Swap, Token};

/// One round of the cascade: chains removed, tokens fallen, tokens spawned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CascadeStep {
    chains: Vec<Chain>,
    fallen: Vec<Vec<Token>>,
    spawned: Vec<Vec<Token>>,
}

impl CascadeStep {
    pub(crate) fn new(chains: Vec<Chain>, fallen: Vec<Vec<Token>>, spawned: Vec<Vec<Token>>) -> Self {
        Self {
            chains,
            fallen,
            spawned,
        }
    }

    /// Returns the chains removed in this step, in scoring order.
    #[must_use]
    pub fn chains(&self) -> &[Chain] {
        &self.chains
    }

    /// Returns, per column, the tokens that fell after the removal.
    #[must_use]
    pub fn fallen(&self) -> &[Vec<Token>] {
        &self.fallen
    }

    /// Returns, per column, the tokens spawned at the top, top first.
    #[must_use]
    pub fn spawned(&self) -> &[Vec<Token>] {
        &self.spawned
    }

    /// Returns the points scored by this step's chains.
    #[must_use]
    pub fn score(&self) -> u32 {
        total_score(&self.chains)
    }
}

pub(crate) fn total_score(chains: &[Chain]) -> u32 {
    chains
        .iter()
        .map(Chain::score)
        .fold(0, u32::saturating_add)
}

/// An accepted player turn.
///
/// Holds everything a presentation layer needs to animate the turn, in order:
/// the swap, each cascade step, and the replacement board if the turn left no
/// legal move.
///
/// A turn is committed once accepted. If the board then needs a reshuffle and
/// none can be generated, the failure is recorded in
/// [`Turn::reshuffle_error`] rather than discarding the turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    swap: Swap,
    steps: Vec<CascadeStep>,
    score: u32,
    reshuffled: Option<Vec<Token>>,
    reshuffle_error: Option<BoardError>,
}

impl Turn {
    pub(crate) fn new(swap: Swap, steps: Vec<CascadeStep>) -> Self {
        let score = steps
            .iter()
            .map(CascadeStep::score)
            .fold(0, u32::saturating_add);
        Self {
            swap,
            steps,
            score,
            reshuffled: None,
            reshuffle_error: None,
        }
    }

    pub(crate) fn set_reshuffle_result(&mut self, result: Result<Vec<Token>, BoardError>) {
        match result {
            Ok(tokens) => self.reshuffled = Some(tokens),
            Err(err) => self.reshuffle_error = Some(err),
        }
    }

    /// Returns the swap that started the turn.
    #[must_use]
    pub fn swap(&self) -> &Swap {
        &self.swap
    }

    /// Returns the cascade steps. An accepted turn has at least one.
    #[must_use]
    pub fn steps(&self) -> &[CascadeStep] {
        &self.steps
    }

    /// Returns the points scored during the whole turn.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Returns every token of the new board if it had to be reshuffled.
    #[must_use]
    pub fn reshuffled(&self) -> Option<&[Token]> {
        self.reshuffled.as_deref()
    }

    /// Returns why the board could not be reshuffled after the turn left no
    /// legal move.
    ///
    /// The board then stays without possible swaps until
    /// [`Game::reshuffle`](crate::Game::reshuffle) succeeds.
    #[must_use]
    pub fn reshuffle_error(&self) -> Option<BoardError> {
        self.reshuffle_error
    }
}

/// The result of a swap attempt.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum TurnOutcome {
    /// The swap is not legal. Nothing changed and no move was spent.
    Rejected,
    /// The swap was played.
    Accepted(Turn),
}

impl TurnOutcome {
    /// Returns the turn if the swap was accepted.
    #[must_use]
    pub fn turn(&self) -> Option<&Turn> {
        match self {
            Self::Rejected => None,
            Self::Accepted(turn) => Some(turn),
        }
    }
}
