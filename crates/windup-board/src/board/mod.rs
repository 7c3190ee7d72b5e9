use std::fmt::{self, Display};

use rand::RngExt as _;
use rand_pcg::Pcg64;
use windup_core::{Dimensions, Direction, Grid2D, Position, TileMask, TokenKind};

use crate::{
    BoardConfig, BoardLayout, BoardSeed, LayoutCell, LevelData, LevelError, Swap, Token,
};

mod matching;
mod refill;
mod swaps;

/// The match-3 board of one level.
///
/// The board owns every live token, the static tile mask, the list of currently
/// legal swaps, and the combo multiplier of the running cascade. All operations
/// are synchronous and deterministic for a given [`BoardSeed`].
///
/// # Turn sequence
///
/// A collaborator drives the board like this:
///
/// 1. [`Board::shuffle`] once to populate a playable board.
/// 2. On each gesture: [`Board::is_possible_swap`], then [`Board::perform_swap`].
/// 3. [`Board::reset_combo_multiplier`], then repeat [`Board::remove_matches`] →
///    [`Board::fill_holes`] → [`Board::top_up_tokens`] until no chains are removed.
/// 4. [`Board::detect_possible_swaps`]; if none remain, shuffle again.
///
/// # Examples
///
/// ```
/// use windup_board::{Board, BoardConfig, BoardSeed, LevelData};
/// use windup_core::TileMask;
///
/// let config = BoardConfig::default();
/// let level = LevelData::new(TileMask::full(config.dimensions()), 1000, 20)?;
/// let mut board = Board::new(&level, config, BoardSeed::from_u64(7))?;
///
/// let tokens = board.shuffle()?;
/// assert_eq!(tokens.len(), 81);
/// assert!(!board.possible_swaps().is_empty());
///
/// let swap = board.possible_swaps()[0];
/// assert!(board.is_possible_swap(&swap));
/// board.perform_swap(&swap);
/// board.reset_combo_multiplier();
/// let chains = board.remove_matches();
/// assert!(!chains.is_empty());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Board {
    config: BoardConfig,
    tiles: TileMask,
    tokens: Grid2D<Token>,
    possible_swaps: Vec<Swap>,
    combo_multiplier: u32,
    target_score: u32,
    maximum_moves: u32,
    seed: BoardSeed,
    rng: Pcg64,
    next_token_id: u64,
}

impl Board {
    /// Creates an empty board for `level`.
    ///
    /// No tokens are placed yet; call [`Board::shuffle`] to populate it.
    ///
    /// # Errors
    ///
    /// Returns [`LevelError::DimensionMismatch`] if the level's tile mask does not
    /// have the configured dimensions.
    pub fn new(level: &LevelData, config: BoardConfig, seed: BoardSeed) -> Result<Self, LevelError> {
        let expected = config.dimensions();
        let found = level.tile_mask().dimensions();
        if expected != found {
            return Err(LevelError::DimensionMismatch { expected, found });
        }

        Ok(Self {
            config,
            tiles: level.tile_mask().clone(),
            tokens: Grid2D::new(expected),
            possible_swaps: Vec::new(),
            combo_multiplier: 1,
            target_score: level.target_score(),
            maximum_moves: level.maximum_moves(),
            seed,
            rng: seed.rng(),
            next_token_id: 0,
        })
    }

    /// Creates a board with tokens placed as in `layout`.
    ///
    /// The layout must agree with the level's tile mask cell by cell. Possible
    /// swaps are detected immediately, so the board is ready for play. Tokens
    /// spawned later (refills, shuffles) come from `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`LevelError::DimensionMismatch`] if the level or the layout does
    /// not have the configured dimensions, and [`LevelError::LayoutMismatch`] if
    /// the layout places a tile where the mask has none or vice versa.
    pub fn from_layout(
        level: &LevelData,
        layout: &BoardLayout,
        config: BoardConfig,
        seed: BoardSeed,
    ) -> Result<Self, LevelError> {
        let mut board = Self::new(level, config, seed)?;
        if layout.dimensions() != config.dimensions() {
            return Err(LevelError::DimensionMismatch {
                expected: config.dimensions(),
                found: layout.dimensions(),
            });
        }

        for (pos, cell) in layout.cells() {
            if cell.is_playable() != board.tiles.is_playable(pos) {
                return Err(LevelError::LayoutMismatch { position: pos });
            }
            if let LayoutCell::Token(kind) = cell {
                board.spawn_token(pos, kind);
            }
        }
        board.detect_possible_swaps();
        Ok(board)
    }

    /// Parses a layout into a sandbox board sized to fit it.
    ///
    /// The tile mask is taken from the layout, the level is
    /// [`LevelData::sandbox`], and the seed is [`BoardSeed::from_u64(0)`](BoardSeed::from_u64).
    ///
    /// # Errors
    ///
    /// Returns [`LevelError::InvalidLayout`] if the text cannot be parsed, or
    /// [`LevelError::NoPlayableTiles`] if the layout has no tiles.
    ///
    /// # Examples
    ///
    /// ```
    /// use windup_board::Board;
    ///
    /// let board = Board::parse_layout("
    ///     1x1
    ///     211
    /// ")?;
    /// assert_eq!(board.possible_swaps().len(), 1);
    /// assert_eq!(board.to_string(), "1x1\n211");
    /// # Ok::<(), windup_board::LevelError>(())
    /// ```
    pub fn parse_layout(s: &str) -> Result<Self, LevelError> {
        let layout: BoardLayout = s.parse()?;
        let level = LevelData::sandbox(layout.tile_mask())?;
        let config = BoardConfig::default().with_dimensions(layout.dimensions());
        Self::from_layout(&level, &layout, config, BoardSeed::from_u64(0))
    }

    /// Returns the configuration the board was created with.
    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Returns the seed of the token generator.
    #[must_use]
    pub fn seed(&self) -> BoardSeed {
        self.seed
    }

    /// Returns the board size.
    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.config.dimensions()
    }

    /// Returns the level's static tile mask.
    #[must_use]
    pub fn tile_mask(&self) -> &TileMask {
        &self.tiles
    }

    /// Returns the score needed to win the level.
    #[must_use]
    pub fn target_score(&self) -> u32 {
        self.target_score
    }

    /// Returns the level's move budget.
    #[must_use]
    pub fn maximum_moves(&self) -> u32 {
        self.maximum_moves
    }

    /// Returns the token at `pos`, if any.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the board.
    #[must_use]
    #[track_caller]
    pub fn token_at(&self, pos: Position) -> Option<Token> {
        self.tokens.get(pos).copied()
    }

    /// Returns `true` if the cell at `pos` has a tile.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the board.
    #[must_use]
    #[track_caller]
    pub fn tile_at(&self, pos: Position) -> bool {
        self.tiles.is_playable(pos)
    }

    /// Iterates over every token in raster order.
    pub fn tokens(&self) -> impl Iterator<Item = Token> + '_ {
        self.tokens.iter().map(|(_, token)| *token)
    }

    /// Returns the swaps found by the last [`Board::detect_possible_swaps`].
    ///
    /// Swaps are listed in raster order of their first cell, the swap with the
    /// right neighbour before the swap with the upper neighbour.
    #[must_use]
    pub fn possible_swaps(&self) -> &[Swap] {
        &self.possible_swaps
    }

    /// Returns the multiplier that will be applied to the next removed chain.
    #[must_use]
    pub fn combo_multiplier(&self) -> u32 {
        self.combo_multiplier
    }

    /// Resets the combo multiplier at the start of a player turn.
    pub fn reset_combo_multiplier(&mut self) {
        self.combo_multiplier = 1;
    }

    /// Builds the swap requested by swiping the token at `from` toward `direction`.
    ///
    /// Returns `None` if either cell is off the board or has no token. The swap is
    /// not validated; check it with [`Board::is_possible_swap`].
    ///
    /// # Panics
    ///
    /// Panics if `from` is outside the board.
    #[must_use]
    #[track_caller]
    pub fn swap_toward(&self, from: Position, direction: Direction) -> Option<Swap> {
        let from_token = self.token_at(from)?;
        let to = from
            .neighbor(direction)
            .filter(|&to| self.dimensions().contains(to))?;
        let to_token = self.token_at(to)?;
        Some(Swap::new(from_token, to_token))
    }

    /// Returns a text snapshot of the tiles and token kinds.
    #[must_use]
    pub fn layout(&self) -> BoardLayout {
        BoardLayout::from_fn(self.dimensions(), |pos| {
            match (self.tiles.is_playable(pos), self.tokens.get(pos)) {
                (_, Some(token)) => LayoutCell::Token(token.kind()),
                (true, None) => LayoutCell::Empty,
                (false, None) => LayoutCell::NoTile,
            }
        })
    }

    /// Places a new token with the next id.
    ///
    /// Ids are 64-bit and wrap around instead of panicking, which no board
    /// lives long enough to reach.
    fn spawn_token(&mut self, pos: Position, kind: TokenKind) -> Token {
        debug_assert!(self.tiles.is_playable(pos), "spawning on a missing tile at {pos}");
        let token = Token::new(self.next_token_id, kind, pos);
        self.next_token_id = self.next_token_id.wrapping_add(1);
        self.tokens.set(pos, Some(token));
        token
    }

    /// Picks a uniformly random kind from `candidates`, or from every kind if
    /// `candidates` is empty.
    fn random_kind(&mut self, candidates: &[TokenKind]) -> TokenKind {
        let pool = if candidates.is_empty() {
            &TokenKind::ALL[..]
        } else {
            candidates
        };
        pool[self.rng.random_range(0..pool.len())]
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.layout(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_mismatched_mask() {
        let level = LevelData::new(TileMask::full(Dimensions::new(8, 9)), 100, 10).unwrap();
        let result = Board::new(&level, BoardConfig::default(), BoardSeed::from_u64(0));
        assert!(matches!(
            result,
            Err(LevelError::DimensionMismatch { expected, found })
                if expected == Dimensions::CLASSIC && found == Dimensions::new(8, 9)
        ));
    }

    #[test]
    fn test_new_board_is_empty() {
        let config = BoardConfig::default();
        let level = LevelData::new(TileMask::full(config.dimensions()), 500, 12).unwrap();
        let board = Board::new(&level, config, BoardSeed::from_u64(0)).unwrap();
        assert_eq!(board.tokens().count(), 0);
        assert!(board.possible_swaps().is_empty());
        assert_eq!(board.combo_multiplier(), 1);
        assert_eq!(board.target_score(), 500);
        assert_eq!(board.maximum_moves(), 12);
    }

    #[test]
    fn test_from_layout_rejects_mask_mismatch() {
        let layout: BoardLayout = "1x\n23".parse().unwrap();
        let level = LevelData::sandbox(TileMask::full(Dimensions::new(2, 2))).unwrap();
        let config = BoardConfig::default().with_dimensions(Dimensions::new(2, 2));
        let result = Board::from_layout(&level, &layout, config, BoardSeed::from_u64(0));
        assert_eq!(
            result.err(),
            Some(LevelError::LayoutMismatch {
                position: Position::new(1, 1)
            })
        );
    }

    #[test]
    fn test_from_layout_rejects_layout_size() {
        let layout: BoardLayout = "123".parse().unwrap();
        let level = LevelData::sandbox(TileMask::full(Dimensions::new(2, 2))).unwrap();
        let config = BoardConfig::default().with_dimensions(Dimensions::new(2, 2));
        let result = Board::from_layout(&level, &layout, config, BoardSeed::from_u64(0));
        assert!(matches!(result, Err(LevelError::DimensionMismatch { .. })));
    }

    #[test]
    fn test_parse_layout_queries() {
        let board = Board::parse_layout(
            "
            x1.
            234
            ",
        )
        .unwrap();
        assert_eq!(board.dimensions(), Dimensions::new(3, 2));
        assert!(!board.tile_at(Position::new(0, 1)));
        assert!(board.tile_at(Position::new(2, 1)));
        assert_eq!(board.token_at(Position::new(2, 1)), None);
        assert_eq!(
            board.token_at(Position::new(1, 1)).map(|t| t.kind()),
            Some(TokenKind::Piggy)
        );
        assert_eq!(board.tokens().count(), 4);
        assert_eq!(board.to_string(), "x1.\n234");
    }

    #[test]
    fn test_token_ids_are_unique() {
        let board = Board::parse_layout("123\n456").unwrap();
        let mut ids: Vec<_> = board.tokens().map(|t| t.id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn test_token_ids_continue_past_u32() {
        let mut board = Board::parse_layout("1..\n234").unwrap();
        board.next_token_id = u64::from(u32::MAX);
        let created = board.create_initial_tokens();
        let ids: Vec<_> = created.iter().map(|t| t.id().value()).collect();
        assert_eq!(ids, [u64::from(u32::MAX), u64::from(u32::MAX) + 1]);

        board.next_token_id = u64::MAX;
        let pos = Position::new(1, 1);
        let token = board.spawn_token(pos, TokenKind::Frog);
        assert_eq!(token.id().value(), u64::MAX);
        assert_eq!(board.next_token_id, 0);
    }

    #[test]
    fn test_swap_toward() {
        let board = Board::parse_layout(
            "
            1.
            23
            ",
        )
        .unwrap();
        let swap = board
            .swap_toward(Position::new(0, 0), Direction::Right)
            .unwrap();
        assert_eq!(swap.positions(), (Position::new(0, 0), Position::new(1, 0)));
        assert_eq!(swap.b().kind(), TokenKind::Bat);

        // empty target cell, off-board target, empty source
        assert_eq!(board.swap_toward(Position::new(1, 0), Direction::Up), None);
        assert_eq!(board.swap_toward(Position::new(0, 0), Direction::Left), None);
        assert_eq!(board.swap_toward(Position::new(1, 0), Direction::Right), None);
        assert_eq!(board.swap_toward(Position::new(1, 1), Direction::Left), None);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_token_at_out_of_bounds_panics() {
        let board = Board::parse_layout("12").unwrap();
        let _ = board.token_at(Position::new(0, 1));
    }
}
