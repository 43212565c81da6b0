//! Benchmarks for the hot paths: move application, win evaluation, and
//! history cloning (the persistent-vector payoff).

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tictactoe_engine::{winner, GameHistory};

fn full_game() -> GameHistory {
    let mut history = GameHistory::new();
    for cell in [0, 2, 1, 3, 5, 4, 6, 7, 8] {
        let _ = history.play(cell);
    }
    history
}

fn bench_play_full_game(c: &mut Criterion) {
    c.bench_function("play_full_game", |b| {
        b.iter(|| {
            let mut history = GameHistory::new();
            for cell in [0, 2, 1, 3, 5, 4, 6, 7, 8] {
                let _ = history.play(black_box(cell));
            }
            history
        })
    });
}

fn bench_winner_eval(c: &mut Criterion) {
    let history = full_game();
    let board = *history.current();
    c.bench_function("winner_eval", |b| {
        b.iter(|| winner(black_box(&board)))
    });
}

fn bench_rewind_and_branch(c: &mut Criterion) {
    c.bench_function("rewind_and_branch", |b| {
        let history = full_game();
        b.iter(|| {
            let mut session = history.clone();
            let _ = session.jump_to(black_box(2));
            let _ = session.play(black_box(8));
            session
        })
    });
}

criterion_group!(
    benches,
    bench_play_full_game,
    bench_winner_eval,
    bench_rewind_and_branch
);
criterion_main!(benches);
