//! Matched runs of tokens.

use std::fmt::{self, Display};

use windup_core::TokenKind;

use crate::Token;

/// The orientation of a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ChainKind {
    /// A run along a row, left to right.
    #[display("Horizontal")]
    Horizontal,
    /// A run along a column, bottom to top.
    #[display("Vertical")]
    Vertical,
}

/// A straight run of three or more tokens of the same kind.
///
/// Chains are produced by [`Board::remove_matches`](crate::Board::remove_matches).
/// Tokens are stored in detection order: left to right for horizontal chains,
/// bottom to top for vertical chains. The score is assigned by the board when
/// the chain is removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    kind: ChainKind,
    tokens: Vec<Token>,
    score: u32,
}

impl Chain {
    pub(crate) fn new(kind: ChainKind) -> Self {
        Self {
            kind,
            tokens: Vec::new(),
            score: 0,
        }
    }

    pub(crate) fn add(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub(crate) fn set_score(&mut self, score: u32) {
        self.score = score;
    }

    /// Returns the chain orientation.
    #[must_use]
    pub fn kind(&self) -> ChainKind {
        self.kind
    }

    /// Returns the kind of the matched tokens.
    #[must_use]
    pub fn token_kind(&self) -> TokenKind {
        self.first_token().kind()
    }

    /// Returns the matched tokens in detection order.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Returns the first token of the run (leftmost or bottommost).
    #[must_use]
    pub fn first_token(&self) -> &Token {
        &self.tokens[0]
    }

    /// Returns the last token of the run (rightmost or topmost).
    #[must_use]
    pub fn last_token(&self) -> &Token {
        &self.tokens[self.tokens.len() - 1]
    }

    /// Returns the number of tokens in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always `false` for chains produced by the board.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns the points awarded for this chain.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }
}

impl Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} chain of {} {} from {} to {} ({} points)",
            self.kind,
            self.len(),
            self.token_kind(),
            self.first_token().position(),
            self.last_token().position(),
            self.score
        )
    }
}
