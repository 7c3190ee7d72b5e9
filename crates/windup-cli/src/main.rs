//! Headless windup player.
//!
//! Plays built-in levels with a greedy automatic player and prints the boards
//! and scores. Useful to eyeball the board rules and to measure how hard a
//! level is.
//!
//! # Usage
//!
//! Play one game of the classic level with a random seed:
//!
//! ```sh
//! cargo run --bin windup
//! ```
//!
//! Replay a specific game:
//!
//! ```sh
//! cargo run --bin windup -- --level donut --seed c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1
//! ```
//!
//! Play many games in parallel and report the win rate:
//!
//! ```sh
//! cargo run --release --bin windup -- --level diamond --games 1000
//! ```
//!
//! Set `RUST_LOG=debug` to trace every cascade step.

use std::process;

use clap::Parser;
use rayon::prelude::*;
use windup_board::{BoardConfig, BoardSeed, LevelData, LevelError};
use windup_game::{Game, GameError, Turn};

use crate::{autoplay::GameSummary, levels::Level};

mod autoplay;
mod levels;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Level to play.
    #[arg(long, value_name = "LEVEL", default_value_t = Level::Classic)]
    level: Level,

    /// Board seed as 64 hex digits. Random if omitted.
    #[arg(long, value_name = "HEX", conflicts_with = "games")]
    seed: Option<BoardSeed>,

    /// Number of games to play in parallel with random seeds.
    #[arg(long, value_name = "COUNT")]
    games: Option<usize>,

    /// Stop a game after this many turns even if it is not over.
    #[arg(long, value_name = "COUNT", default_value_t = 1000)]
    max_turns: u32,

    /// Only print the summary.
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum CliError {
    #[display("{_0}")]
    Level(#[from] LevelError),
    #[display("seed {seed}: {source}")]
    Game {
        seed: BoardSeed,
        source: GameError,
    },
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let result = match args.games {
        Some(0) => {
            eprintln!("--games must be at least 1.");
            process::exit(2);
        }
        Some(games) => run_batch(&args, games),
        None => run_single(&args),
    };
    if let Err(err) = result {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn new_game(level: &LevelData, seed: BoardSeed) -> Result<Game, CliError> {
    Game::new(level, BoardConfig::default(), seed).map_err(|source| CliError::Game { seed, source })
}

fn play(
    game: Game,
    max_turns: u32,
    on_turn: impl FnMut(u32, &Turn),
) -> Result<(Game, GameSummary), CliError> {
    let seed = game.board().seed();
    autoplay::play(game, max_turns, on_turn).map_err(|source| CliError::Game { seed, source })
}

fn run_single(args: &Args) -> Result<(), CliError> {
    let level = args.level.data()?;
    let seed = args.seed.unwrap_or_else(BoardSeed::random);

    let game = new_game(&level, seed)?;
    if !args.quiet {
        println!("{} {seed}", args.level);
        println!("{}", game.board());
        println!();
    }

    let (game, summary) = play(game, args.max_turns, |number, turn| {
        if args.quiet {
            return;
        }
        let chains: usize = turn.steps().iter().map(|step| step.chains().len()).sum();
        print!(
            "turn {number}: {}, {} chains in {} steps, {} points",
            turn.swap(),
            chains,
            turn.steps().len(),
            turn.score()
        );
        if turn.reshuffled().is_some() {
            print!(" (reshuffled)");
        }
        if let Some(err) = turn.reshuffle_error() {
            print!(" ({err})");
        }
        println!();
    })?;

    if !args.quiet {
        println!();
        println!("{}", game.board());
        println!();
    }
    print_summary(args.level, &summary);
    Ok(())
}

fn run_batch(args: &Args, games: usize) -> Result<(), CliError> {
    let level = args.level.data()?;
    let summaries = (0..games)
        .into_par_iter()
        .map(|_| {
            let seed = BoardSeed::random();
            let game = new_game(&level, seed)?;
            play(game, args.max_turns, |_, _| {}).map(|(_, summary)| summary)
        })
        .collect::<Result<Vec<_>, _>>()?;

    if !args.quiet {
        for summary in &summaries {
            print_summary(args.level, summary);
        }
        println!();
    }

    let won = summaries.iter().filter(|s| s.status.is_won()).count();
    let lost = summaries.iter().filter(|s| s.status.is_lost()).count();
    let unfinished = summaries.len() - won - lost;
    let total_score: u64 = summaries.iter().map(|s| u64::from(s.score)).sum();
    #[expect(clippy::cast_precision_loss)]
    let mean_score = total_score as f64 / summaries.len() as f64;

    println!("Level:       {}", args.level);
    println!("Games:       {}", summaries.len());
    println!("Won:         {won}");
    println!("Lost:        {lost}");
    if unfinished > 0 {
        println!("Unfinished:  {unfinished}");
    }
    println!("Mean score:  {mean_score:.1}");
    Ok(())
}

fn print_summary(level: Level, summary: &GameSummary) {
    println!(
        "{level} {}: {} with {}/{} points after {} turns ({} moves left)",
        summary.seed,
        summary.status,
        summary.score,
        summary.target_score,
        summary.turns,
        summary.moves_left
    );
}
