use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_piecerack::core::GameSession;

fn bench_play_front(c: &mut Criterion) {
    let mut session = GameSession::new(12345);

    c.bench_function("play_front", |b| {
        b.iter(|| {
            black_box(session.play_front()).ok();
        })
    });
}

fn bench_swap_front_top(c: &mut Criterion) {
    let mut session = GameSession::new(12345);
    session.reserve_front().unwrap();

    c.bench_function("swap_front_top", |b| {
        b.iter(|| {
            black_box(session.swap_front_top()).ok();
        })
    });
}

fn bench_swap_block_of_three(c: &mut Criterion) {
    let mut session = GameSession::new(12345);
    for _ in 0..3 {
        session.reserve_front().unwrap();
    }

    c.bench_function("swap_block_of_three", |b| {
        b.iter(|| {
            black_box(session.swap_block_of_three()).ok();
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut session = GameSession::new(12345);
    session.reserve_front().unwrap();

    c.bench_function("snapshot", |b| {
        b.iter(|| {
            black_box(session.snapshot());
        })
    });
}

criterion_group!(
    benches,
    bench_play_front,
    bench_swap_front_top,
    bench_swap_block_of_three,
    bench_snapshot
);
criterion_main!(benches);
