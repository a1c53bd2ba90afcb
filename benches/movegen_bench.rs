use criterion::{criterion_group, criterion_main, Criterion, black_box};
use minichess::board::{Position, Side};
use minichess::search::BoardState;

fn bench_movegen(c: &mut Criterion) {
    let st = BoardState::new(Position::startpos(), Side::White);
    c.bench_function("generate_moves_startpos", |ben| {
        ben.iter(|| black_box(minichess::search::movegen::generate_moves(black_box(&st)).len()))
    });
    c.bench_function("perft_3_startpos", |ben| {
        ben.iter(|| black_box(minichess::perft::perft(black_box(&st), 3).unwrap()))
    });
}

criterion_group!(benches, bench_movegen);
criterion_main!(benches);
