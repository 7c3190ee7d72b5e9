//! Built-in level catalogue.

use clap::ValueEnum;
use windup_board::{LevelData, LevelError};
use windup_core::TileMask;

const CLASSIC: &str = "
    .........
    .........
    .........
    .........
    .........
    .........
    .........
    .........
    .........
";

const DIAMOND: &str = "
    xxxx.xxxx
    xxx...xxx
    xx.....xx
    x.......x
    .........
    x.......x
    xx.....xx
    xxx...xxx
    xxxx.xxxx
";

const DONUT: &str = "
    .........
    .........
    .........
    ...xxx...
    ...xxx...
    ...xxx...
    .........
    .........
    .........
";

const CORRIDOR: &str = "
    xx.....xx
    xx.....xx
    xx.....xx
    xx.....xx
    xx.....xx
    xx.....xx
    xx.....xx
    xx.....xx
    xx.....xx
";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, derive_more::Display)]
pub(crate) enum Level {
    #[display("classic")]
    Classic,
    #[display("diamond")]
    Diamond,
    #[display("donut")]
    Donut,
    #[display("corridor")]
    Corridor,
}

impl Level {
    fn tiles(self) -> &'static str {
        match self {
            Self::Classic => CLASSIC,
            Self::Diamond => DIAMOND,
            Self::Donut => DONUT,
            Self::Corridor => CORRIDOR,
        }
    }

    /// Returns `(target_score, maximum_moves)`.
    fn goals(self) -> (u32, u32) {
        match self {
            Self::Classic => (1000, 15),
            Self::Diamond => (800, 15),
            Self::Donut => (1200, 20),
            Self::Corridor => (900, 15),
        }
    }

    pub(crate) fn data(self) -> Result<LevelData, LevelError> {
        let mask: TileMask = self.tiles().parse()?;
        let (target_score, maximum_moves) = self.goals();
        LevelData::new(mask, target_score, maximum_moves)
    }
}
