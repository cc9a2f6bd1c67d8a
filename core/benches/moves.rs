use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tileslide_core::*;

fn collapse(c: &mut Criterion) {
    let line = [Some(2), None, Some(2), Some(4), Some(4), None, Some(8), Some(8)];
    c.bench_function("collapse_line", |b| {
        b.iter(|| collapse_line(black_box(&line), |value: Tile| value * 2))
    });
}

fn play_2048(c: &mut Criterion) {
    c.bench_function("game2048_moves", |b| {
        b.iter_batched(
            || {
                let mut game = Game2048::from_config(&GameConfig::default().with_seed(7))
                    .expect("default config is valid");
                game.initialize().expect("fresh board has room");
                game
            },
            |mut game| {
                for direction in Direction::ALL.into_iter().cycle().take(64) {
                    let _ = black_box(game.process_move(direction));
                }
                game
            },
            BatchSize::SmallInput,
        )
    });
}

fn play_fifteen(c: &mut Criterion) {
    c.bench_function("fifteen_moves", |b| {
        b.iter_batched(
            || {
                let mut game = GameOfFifteen::from_config(&GameConfig::default().with_seed(7))
                    .expect("default config is valid");
                game.initialize().expect("random permutation is valid");
                game
            },
            |mut game| {
                for direction in Direction::ALL.into_iter().cycle().take(64) {
                    let _ = black_box(game.process_move(direction));
                }
                game.has_won()
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, collapse, play_2048, play_fifteen);
criterion_main!(benches);
