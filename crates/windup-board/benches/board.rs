//! Benchmarks for the board simulation.
//!
//! # Benchmarks
//!
//! - **`detect_possible_swaps`**: Recomputes the legal swaps of a shuffled
//!   classic board.
//! - **`shuffle`**: Generates a playable classic board from scratch.
//! - **`cascade`**: Plays the first legal swap and runs remove/fill/top-up until
//!   the board settles.
//!
//! # Test Data
//!
//! Uses three fixed seeds so every run sees the same boards.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench board
//! ```

use std::{hint, str::FromStr as _, time::Duration};

use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};
use windup_board::{Board, BoardConfig, BoardSeed, LevelData};
use windup_core::TileMask;

const SEEDS: [&str; 3] = [
    "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
    "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3",
    "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
];

fn empty_board(seed: BoardSeed) -> Board {
    let config = BoardConfig::default();
    let level = LevelData::sandbox(TileMask::full(config.dimensions())).unwrap();
    Board::new(&level, config, seed).unwrap()
}

fn shuffled_board(seed: BoardSeed) -> Board {
    let mut board = empty_board(seed);
    board.shuffle().unwrap();
    board
}

fn bench_detect_possible_swaps(c: &mut Criterion) {
    for (i, seed) in SEEDS.into_iter().enumerate() {
        let board = shuffled_board(BoardSeed::from_str(seed).unwrap());
        c.bench_with_input(
            BenchmarkId::new("detect_possible_swaps", format!("seed_{i}")),
            &board,
            |b, board| {
                b.iter_batched_ref(
                    || hint::black_box(board.clone()),
                    |board| hint::black_box(board.detect_possible_swaps()),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

fn bench_shuffle(c: &mut Criterion) {
    for (i, seed) in SEEDS.into_iter().enumerate() {
        let board = empty_board(BoardSeed::from_str(seed).unwrap());
        c.bench_with_input(
            BenchmarkId::new("shuffle", format!("seed_{i}")),
            &board,
            |b, board| {
                b.iter_batched_ref(
                    || hint::black_box(board.clone()),
                    |board| hint::black_box(board.shuffle().unwrap()),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

fn bench_cascade(c: &mut Criterion) {
    for (i, seed) in SEEDS.into_iter().enumerate() {
        let board = shuffled_board(BoardSeed::from_str(seed).unwrap());
        let swap = board.possible_swaps()[0];
        c.bench_with_input(
            BenchmarkId::new("cascade", format!("seed_{i}")),
            &board,
            |b, board| {
                b.iter_batched_ref(
                    || hint::black_box(board.clone()),
                    |board| {
                        board.perform_swap(&swap);
                        board.reset_combo_multiplier();
                        let mut removed = 0;
                        loop {
                            let chains = board.remove_matches();
                            if chains.is_empty() {
                                break;
                            }
                            removed += chains.len();
                            board.fill_holes();
                            board.top_up_tokens();
                        }
                        board.detect_possible_swaps();
                        hint::black_box(removed)
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(8));
    targets =
        bench_detect_possible_swaps,
        bench_shuffle,
        bench_cascade
);
criterion_main!(benches);
