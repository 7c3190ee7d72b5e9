//! Greedy automatic player.

use windup_board::{BoardSeed, Swap};
use windup_game::{Game, GameError, GameStatus, Turn, TurnOutcome};

/// Final state of one automatically played game.
#[derive(Debug, Clone, Copy)]
pub(crate) struct GameSummary {
    pub(crate) seed: BoardSeed,
    pub(crate) status: GameStatus,
    pub(crate) score: u32,
    pub(crate) target_score: u32,
    pub(crate) turns: u32,
    pub(crate) moves_left: u32,
}

/// Picks the swap that scores the most this turn.
///
/// Each candidate is played on a copy of the game, random refills included, so
/// the prediction is exact. Ties go to the earliest swap in possible-swap order.
pub(crate) fn best_swap(game: &Game) -> Option<Swap> {
    let mut best: Option<(u32, Swap)> = None;
    for &swap in game.board().possible_swaps() {
        let mut trial = game.clone();
        let Ok(TurnOutcome::Accepted(turn)) = trial.try_swap(&swap) else {
            continue;
        };
        if best.is_none_or(|(score, _)| turn.score() > score) {
            best = Some((turn.score(), swap));
        }
    }
    best.map(|(_, swap)| swap)
}

/// Plays `game` to the end, calling `on_turn` after each accepted turn.
///
/// Stops early after `max_turns` turns. A requested reshuffle counts as a turn.
pub(crate) fn play<F>(
    mut game: Game,
    max_turns: u32,
    mut on_turn: F,
) -> Result<(Game, GameSummary), GameError>
where
    F: FnMut(u32, &Turn),
{
    let mut turns = 0;
    while game.status().is_playing() && turns < max_turns {
        let Some(swap) = best_swap(&game) else {
            log::debug!("no scoring swap found, reshuffling");
            game.reshuffle()?;
            turns += 1;
            continue;
        };
        if let TurnOutcome::Accepted(turn) = game.try_swap(&swap)? {
            turns += 1;
            on_turn(turns, &turn);
        }
    }

    let summary = GameSummary {
        seed: game.board().seed(),
        status: game.status(),
        score: game.score(),
        target_score: game.target_score(),
        turns,
        moves_left: game.moves_left(),
    };
    Ok((game, summary))
}
