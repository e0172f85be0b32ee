use criterion::{Criterion, criterion_group, criterion_main};
use lazysusan_core::*;
use std::hint::black_box;

fn bench_worst_rotation(c: &mut Criterion) {
    let coins: CoinSet = "HHHT".parse().unwrap();
    let pair = [Cup::ALL[2], Cup::ALL[3]];

    c.bench_function("worst_rotation", |b| {
        b.iter(|| worst_rotation(black_box(&coins), black_box(pair)))
    });

    c.bench_function("examine_puzzle_mode", |b| {
        b.iter(|| {
            let mut state = GameState::new(GameConfig::default().with_adversarial(true));
            state.new_game(coins, None).unwrap();
            state.select_cup(pair[0]);
            state.select_cup(pair[1]);
            black_box(state.examine())
        })
    });
}

criterion_group!(benches, bench_worst_rotation);
criterion_main!(benches);
