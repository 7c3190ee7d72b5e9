use windup_core::{Direction, Position, TokenKind};

use super::Board;
use crate::{Chain, ChainKind};

impl Board {
    pub(super) fn kind_at(&self, pos: Position) -> Option<TokenKind> {
        self.tokens.get(pos).map(|token| token.kind())
    }

    /// Counts consecutive tokens of `kind` starting next to `pos` and walking
    /// toward `direction`. The cell at `pos` itself is not counted.
    fn count_run(&self, pos: Position, direction: Direction, kind: TokenKind) -> usize {
        let dimensions = self.dimensions();
        let mut count = 0;
        let mut current = pos;
        while let Some(next) = current
            .neighbor(direction)
            .filter(|&next| dimensions.contains(next))
        {
            if self.kind_at(next) != Some(kind) {
                break;
            }
            count += 1;
            current = next;
        }
        count
    }

    /// Returns `true` if a token of `kind` at `pos` would be part of a run of
    /// three or more, given the tokens currently around it.
    pub(super) fn would_form_chain(&self, pos: Position, kind: TokenKind) -> bool {
        let horizontal =
            self.count_run(pos, Direction::Left, kind) + 1 + self.count_run(pos, Direction::Right, kind);
        let vertical =
            self.count_run(pos, Direction::Down, kind) + 1 + self.count_run(pos, Direction::Up, kind);
        horizontal >= 3 || vertical >= 3
    }

    /// Returns `true` if the token at `pos` is part of a horizontal or vertical
    /// run of three or more tokens of its kind.
    ///
    /// An empty cell never has a chain.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the board.
    #[must_use]
    #[track_caller]
    pub fn has_chain_at(&self, pos: Position) -> bool {
        self.kind_at(pos)
            .is_some_and(|kind| self.would_form_chain(pos, kind))
    }

    fn lines(&self, orientation: ChainKind) -> Vec<Vec<Position>> {
        let dimensions = self.dimensions();
        match orientation {
            ChainKind::Horizontal => (0..dimensions.rows())
                .map(|row| {
                    (0..dimensions.columns())
                        .map(|column| Position::new(column, row))
                        .collect()
                })
                .collect(),
            ChainKind::Vertical => (0..dimensions.columns())
                .map(|column| {
                    (0..dimensions.rows())
                        .map(|row| Position::new(column, row))
                        .collect()
                })
                .collect(),
        }
    }

    /// Scans every line of the given orientation for runs of three or more.
    ///
    /// A run is extended greedily and scanning resumes right after it, so runs
    /// never overlap within one orientation.
    fn detect_matches(&self, orientation: ChainKind) -> Vec<Chain> {
        let mut chains = Vec::new();
        for line in self.lines(orientation) {
            let mut i = 0;
            while i + 2 < line.len() {
                let Some(kind) = self.kind_at(line[i]) else {
                    i += 1;
                    continue;
                };
                if line[i + 1..=i + 2]
                    .iter()
                    .any(|&pos| self.kind_at(pos) != Some(kind))
                {
                    i += 1;
                    continue;
                }

                let mut chain = Chain::new(orientation);
                while let Some(token) = line
                    .get(i)
                    .and_then(|&pos| self.tokens.get(pos))
                    .filter(|token| token.kind() == kind)
                {
                    chain.add(*token);
                    i += 1;
                }
                chains.push(chain);
            }
        }
        chains
    }

    fn calculate_scores(&mut self, chains: &mut [Chain]) {
        let base = self.config.base_chain_score();
        for chain in chains {
            let extra = u32::try_from(chain.len() - 2).unwrap_or(u32::MAX);
            chain.set_score(
                base.saturating_mul(extra)
                    .saturating_mul(self.combo_multiplier),
            );
            self.combo_multiplier = self.combo_multiplier.saturating_add(1);
        }
    }

    /// Detects, scores and removes every chain on the board.
    ///
    /// Horizontal chains come first (rows bottom to top, left to right), then
    /// vertical chains (columns left to right, bottom to top). Each chain scores
    /// `base_chain_score * (length - 2) * combo_multiplier` in that order, and the
    /// multiplier grows by one per chain. A token in both a horizontal and a
    /// vertical chain appears in both.
    ///
    /// Returns an empty list, and changes nothing, if the board has no chain.
    ///
    /// # Examples
    ///
    /// ```
    /// use windup_board::{Board, ChainKind};
    ///
    /// let mut board = Board::parse_layout("
    ///     2..
    ///     2..
    ///     211
    /// ")?;
    /// let chains = board.remove_matches();
    /// assert_eq!(chains.len(), 1);
    /// assert_eq!(chains[0].kind(), ChainKind::Vertical);
    /// assert_eq!(chains[0].score(), 60);
    /// assert_eq!(board.combo_multiplier(), 2);
    /// assert_eq!(board.to_string(), "...\n...\n.11");
    /// # Ok::<(), windup_board::LevelError>(())
    /// ```
    pub fn remove_matches(&mut self) -> Vec<Chain> {
        let mut chains = self.detect_matches(ChainKind::Horizontal);
        chains.extend(self.detect_matches(ChainKind::Vertical));
        if chains.is_empty() {
            return chains;
        }

        for chain in &chains {
            for token in chain.tokens() {
                self.tokens.take(token.position());
            }
        }
        self.calculate_scores(&mut chains);
        log::debug!(
            "removed {} chains, combo multiplier now {}",
            chains.len(),
            self.combo_multiplier
        );
        chains
    }
}
