use criterion::{criterion_group, criterion_main, Criterion, black_box};
use minichess::board::{Position, Side};

fn bench_search(c: &mut Criterion) {
    let pos = Position::startpos();
    c.bench_function("search_depth_3_startpos", |ben| {
        ben.iter(|| {
            let mut s = minichess::search::Searcher::new(minichess::search::SearchParams { depth: 3, ..Default::default() });
            let r = s.search(black_box(&pos), Side::White).unwrap();
            black_box(r.nodes)
        })
    });
    c.bench_function("minimax_depth_3_startpos", |ben| {
        ben.iter(|| {
            let mut s = minichess::search::Searcher::new(minichess::search::SearchParams { depth: 3, use_pruning: false, ..Default::default() });
            let r = s.search(black_box(&pos), Side::White).unwrap();
            black_box(r.nodes)
        })
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
