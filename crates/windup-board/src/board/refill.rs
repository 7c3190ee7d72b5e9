use windup_core::{Position, TokenKind};

use super::Board;
use crate::{BoardError, Token};

impl Board {
    /// Fills every empty playable cell with a random token.
    ///
    /// Cells are visited in raster order, and a kind is only chosen if it would
    /// not complete a run of three with the tokens already around the cell.
    /// Returns the created tokens in the order they were placed.
    ///
    /// Only kinds of the four neighbours can complete a run, so with six kinds
    /// at least two always remain. Should every kind be excluded anyway, the
    /// cell gets any kind and may complete a chain.
    pub fn create_initial_tokens(&mut self) -> Vec<Token> {
        let mut created = Vec::new();
        for pos in self.dimensions().positions() {
            if !self.tiles.is_playable(pos) || self.tokens.is_occupied(pos) {
                continue;
            }
            let candidates: Vec<_> = TokenKind::ALL
                .into_iter()
                .filter(|&kind| !self.would_form_chain(pos, kind))
                .collect();
            if candidates.is_empty() {
                log::debug!("every kind completes a run at {pos}, picking from all kinds");
            }
            let kind = self.random_kind(&candidates);
            created.push(self.spawn_token(pos, kind));
        }
        created
    }

    /// Replaces every token with a freshly generated board that has at least
    /// one legal swap.
    ///
    /// Up to [`BoardConfig::max_shuffle_attempts`](crate::BoardConfig::max_shuffle_attempts)
    /// random boards are generated. If none has a legal swap, tokens are retyped
    /// one at a time, in raster order, until one appears. Returns every token on
    /// the resulting board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NoPossibleSwaps`] if the tile mask admits no legal
    /// swap at all, e.g. a board with fewer than four playable cells in any line.
    /// The board is left filled but without possible swaps.
    pub fn shuffle(&mut self) -> Result<Vec<Token>, BoardError> {
        let attempts = self.config.max_shuffle_attempts().get();
        for attempt in 1..=attempts {
            self.tokens.clear();
            let created = self.create_initial_tokens();
            if self.detect_possible_swaps() > 0 {
                log::debug!("shuffled board in {attempt} attempts");
                return Ok(created);
            }
        }

        log::warn!("no possible swaps after {attempts} shuffle attempts, repairing board");
        if self.repair() {
            return Ok(self.tokens().collect());
        }
        Err(BoardError::NoPossibleSwaps { attempts })
    }

    /// Retypes a single token so that the board gains a legal swap.
    ///
    /// Tokens are tried in raster order, kinds in [`TokenKind::ALL`] order, and a
    /// kind that would complete a chain is skipped. Returns `false` if no single
    /// retype helps; the board is then unchanged.
    pub(crate) fn repair(&mut self) -> bool {
        let positions: Vec<Position> = self.tokens.iter().map(|(pos, _)| pos).collect();
        for pos in positions {
            let Some(original) = self.tokens.get(pos).copied() else {
                continue;
            };
            for kind in TokenKind::ALL {
                if kind == original.kind() || self.would_form_chain(pos, kind) {
                    continue;
                }
                self.spawn_token(pos, kind);
                if self.detect_possible_swaps() > 0 {
                    log::debug!("repaired board by turning {original} into {kind}");
                    return true;
                }
                self.tokens.set(pos, Some(original));
            }
        }
        self.detect_possible_swaps();
        false
    }

    /// Lets tokens fall into the empty playable cells below them.
    ///
    /// Each column is processed bottom to top; an empty playable cell takes the
    /// nearest token above it, skipping cells without a tile. Returns, per column
    /// with movement, the moved tokens in the order they landed.
    ///
    /// # Examples
    ///
    /// ```
    /// use windup_board::Board;
    ///
    /// let mut board = Board::parse_layout("
    ///     4.
    ///     x3
    ///     ..
    /// ")?;
    /// let fallen = board.fill_holes();
    /// assert_eq!(fallen.len(), 2);
    /// assert_eq!(board.to_string(), "..\nx.\n43");
    /// # Ok::<(), windup_board::LevelError>(())
    /// ```
    pub fn fill_holes(&mut self) -> Vec<Vec<Token>> {
        let dimensions = self.dimensions();
        let mut columns = Vec::new();
        for column in 0..dimensions.columns() {
            let mut fallen = Vec::new();
            for row in 0..dimensions.rows() {
                let pos = Position::new(column, row);
                if !self.tiles.is_playable(pos) || self.tokens.is_occupied(pos) {
                    continue;
                }
                let Some(mut token) = (row + 1..dimensions.rows())
                    .find_map(|above| self.tokens.take(Position::new(column, above)))
                else {
                    break;
                };
                token.set_position(pos);
                self.tokens.set(pos, Some(token));
                fallen.push(token);
            }
            if !fallen.is_empty() {
                columns.push(fallen);
            }
        }
        columns
    }

    /// Spawns new tokens into the empty cells at the top of each column.
    ///
    /// Columns are filled from the top row down until an occupied cell is
    /// reached. Each new token differs in kind from the one spawned just before
    /// it during this call. Returns, per column with new tokens, the tokens in
    /// spawn order (top first).
    pub fn top_up_tokens(&mut self) -> Vec<Vec<Token>> {
        let dimensions = self.dimensions();
        let mut previous: Option<TokenKind> = None;
        let mut columns = Vec::new();
        for column in 0..dimensions.columns() {
            let mut spawned = Vec::new();
            for row in (0..dimensions.rows()).rev() {
                let pos = Position::new(column, row);
                if self.tokens.is_occupied(pos) {
                    break;
                }
                if !self.tiles.is_playable(pos) {
                    continue;
                }
                let candidates: Vec<_> = TokenKind::ALL
                    .into_iter()
                    .filter(|&kind| Some(kind) != previous)
                    .collect();
                let kind = self.random_kind(&candidates);
                previous = Some(kind);
                spawned.push(self.spawn_token(pos, kind));
            }
            if !spawned.is_empty() {
                columns.push(spawned);
            }
        }
        columns
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZero;

    use proptest::prelude::*;
    use windup_core::{Dimensions, TileMask, TokenKind};

    use super::*;
    use crate::{BoardConfig, BoardLayout, BoardSeed, LevelData};

    fn board_from(layout: &str, seed: u64) -> Board {
        let layout: BoardLayout = layout.parse().unwrap();
        let level = LevelData::sandbox(layout.tile_mask()).unwrap();
        let config = BoardConfig::default().with_dimensions(layout.dimensions());
        Board::from_layout(&level, &layout, config, BoardSeed::from_u64(seed)).unwrap()
    }

    fn mask_strategy() -> impl Strategy<Value = TileMask> {
        (4_usize..=9, 4_usize..=9).prop_flat_map(|(columns, rows)| {
            prop::collection::vec(prop::bool::weighted(0.85), columns * rows).prop_map(
                move |cells| {
                    TileMask::from_fn(Dimensions::new(columns, rows), |pos| {
                        cells[pos.row() * columns + pos.column()]
                    })
                },
            )
        })
    }

    fn playable_board(mask: TileMask, seed: u64) -> Option<Board> {
        let level = LevelData::sandbox(mask).ok()?;
        let config = BoardConfig::default()
            .with_dimensions(level.tile_mask().dimensions())
            .with_max_shuffle_attempts(NonZero::new(20).unwrap());
        let mut board = Board::new(&level, config, BoardSeed::from_u64(seed)).unwrap();
        board.shuffle().ok()?;
        Some(board)
    }

    #[test]
    fn test_generation_avoids_completing_a_run() {
        for seed in 0..64 {
            let mut board = board_from(".22", seed);
            let created = board.create_initial_tokens();
            assert_eq!(created.len(), 1);
            assert_ne!(created[0].kind(), TokenKind::Frog);
            assert!(!board.has_chain_at(created[0].position()));
        }
    }

    #[test]
    fn test_generation_around_four_blocking_pairs() {
        for seed in 0..64 {
            let mut board = board_from(
                "
                xx4xx
                xx4xx
                11.22
                xx3xx
                xx3xx
                ",
                seed,
            );
            let created = board.create_initial_tokens();
            assert_eq!(created.len(), 1);
            assert!(matches!(created[0].kind().symbol(), '5' | '6'));
            for pos in board.dimensions().positions() {
                assert!(!board.has_chain_at(pos));
            }
        }
    }

    #[test]
    fn test_generation_skips_missing_tiles() {
        let mut board = board_from("x..\n.x.", 3);
        let created = board.create_initial_tokens();
        assert_eq!(created.len(), 4);
        assert!(created.iter().all(|t| board.tile_at(t.position())));
    }

    #[test]
    fn test_shuffle_is_deterministic() {
        let config = BoardConfig::default();
        let level = LevelData::sandbox(TileMask::full(config.dimensions())).unwrap();
        let seed: BoardSeed = "00112233445566778899aabbccddeeff00112233445566778899aabbccddeeff"
            .parse()
            .unwrap();

        let mut a = Board::new(&level, config, seed).unwrap();
        let mut b = Board::new(&level, config, seed).unwrap();
        a.shuffle().unwrap();
        b.shuffle().unwrap();
        assert_eq!(a.to_string(), b.to_string());
        assert_eq!(a.possible_swaps(), b.possible_swaps());

        let mut c = Board::new(&level, config, BoardSeed::from_u64(1)).unwrap();
        c.shuffle().unwrap();
        assert_ne!(a.to_string(), c.to_string());
    }

    #[test]
    fn test_shuffle_fails_without_room_for_a_swap() {
        let mut board = board_from("...", 0);
        board.config = board
            .config
            .with_max_shuffle_attempts(NonZero::new(5).unwrap());
        assert_eq!(
            board.shuffle(),
            Err(BoardError::NoPossibleSwaps { attempts: 5 })
        );
        assert_eq!(board.tokens().count(), 3);
        assert!(board.possible_swaps().is_empty());
    }

    #[test]
    fn test_repair_retypes_one_token() {
        let mut board = board_from("1213", 0);
        assert!(board.possible_swaps().is_empty());
        assert!(board.repair());
        assert_eq!(board.to_string(), "1211");
        assert_eq!(board.possible_swaps().len(), 1);
    }

    #[test]
    fn test_repair_gives_up_on_tiny_board() {
        let mut board = board_from("12", 0);
        assert!(!board.repair());
        assert_eq!(board.to_string(), "12");
    }

    #[test]
    fn test_fill_holes_falls_past_missing_tiles() {
        let mut board = board_from(
            "
            1.
            2.
            .3
            x.
            ",
            0,
        );
        let ids: Vec<_> = board.tokens().map(|t| t.id()).collect();

        let fallen = board.fill_holes();
        assert_eq!(fallen.len(), 2);
        let landed: Vec<_> = fallen[0].iter().map(|t| (t.kind(), t.position())).collect();
        assert_eq!(
            landed,
            [
                (TokenKind::Frog, Position::new(0, 1)),
                (TokenKind::Piggy, Position::new(0, 2)),
            ]
        );
        assert_eq!(fallen[1][0].position(), Position::new(1, 0));
        assert_eq!(board.to_string(), "..\n1.\n2.\nx3");

        let mut after: Vec<_> = board.tokens().map(|t| t.id()).collect();
        let mut before = ids;
        after.sort();
        before.sort();
        assert_eq!(after, before);
    }

    #[test]
    fn test_fill_holes_on_full_board_moves_nothing() {
        let mut board = board_from("12\n34", 0);
        assert!(board.fill_holes().is_empty());
        assert!(board.top_up_tokens().is_empty());
    }

    #[test]
    fn test_top_up_fills_from_the_top() {
        let mut board = board_from(
            "
            ..
            1.
            2.
            x3
            ",
            9,
        );
        let spawned = board.top_up_tokens();
        assert_eq!(spawned.len(), 2);
        assert_eq!(spawned[0].len(), 1);
        assert_eq!(spawned[0][0].position(), Position::new(0, 3));
        let rows: Vec<_> = spawned[1].iter().map(Token::row).collect();
        assert_eq!(rows, [3, 2, 1]);

        let kinds: Vec<_> = spawned.iter().flatten().map(Token::kind).collect();
        assert!(kinds.windows(2).all(|pair| pair[0] != pair[1]));
        assert!(!board.to_string().contains('.'));
    }

    proptest! {
        #[test]
        fn test_shuffled_board_is_playable(mask in mask_strategy(), seed in any::<u64>()) {
            let Some(board) = playable_board(mask, seed) else {
                return Ok(());
            };
            prop_assert!(!board.possible_swaps().is_empty());
            for pos in board.dimensions().positions() {
                prop_assert_eq!(board.token_at(pos).is_some(), board.tile_at(pos));
                prop_assert!(!board.has_chain_at(pos));
            }
        }

        #[test]
        fn test_gravity_and_top_up_fill_the_board(
            mask in mask_strategy(),
            seed in any::<u64>(),
            removed in prop::collection::vec(any::<bool>(), 81),
        ) {
            let Some(mut board) = playable_board(mask, seed) else {
                return Ok(());
            };
            let dimensions = board.dimensions();
            for (pos, remove) in dimensions.positions().zip(removed) {
                if remove {
                    board.tokens.take(pos);
                }
            }

            board.fill_holes();
            for column in 0..dimensions.columns() {
                let mut seen_hole = false;
                for row in 0..dimensions.rows() {
                    let pos = Position::new(column, row);
                    if !board.tile_at(pos) {
                        continue;
                    }
                    let occupied = board.token_at(pos).is_some();
                    prop_assert!(!(seen_hole && occupied), "token above a hole at {}", pos);
                    seen_hole |= !occupied;
                }
            }

            let spawned = board.top_up_tokens();
            let kinds: Vec<_> = spawned.iter().flatten().map(Token::kind).collect();
            prop_assert!(kinds.windows(2).all(|pair| pair[0] != pair[1]));
            for pos in dimensions.positions() {
                prop_assert_eq!(board.token_at(pos).is_some(), board.tile_at(pos));
                if let Some(token) = board.token_at(pos) {
                    prop_assert_eq!(token.position(), pos);
                }
            }
        }
    }
}
