use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use library_engine::LibraryEngine;

/// Engine with one logged-in reader and one book of `page_count` pages
fn engine_with_book(page_count: usize) -> LibraryEngine {
    let mut engine = LibraryEngine::new();
    drop(engine.signup("reader", "pw"));
    drop(engine.login("reader", "pw"));
    let pages = (1..=page_count).map(|n| format!("page {n}")).collect();
    drop(engine.add_book("bench", "Bench", "Author", pages));
    engine
}

fn bench_read_through(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_through");

    for page_count in [10_usize, 100, 1_000] {
        group.bench_with_input(
            BenchmarkId::new("sequential", page_count),
            &page_count,
            |b, &page_count| {
                b.iter_batched(
                    || engine_with_book(page_count),
                    |mut engine| {
                        while engine.read_page(black_box("bench")).success {}
                        engine
                    },
                    criterion::BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

fn bench_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("session");

    group.bench_function("login", |b| {
        let mut engine = engine_with_book(1);
        b.iter(|| engine.login(black_box("reader"), black_box("pw")));
    });

    group.bench_function("login_rejected", |b| {
        let mut engine = engine_with_book(1);
        b.iter(|| engine.login(black_box("reader"), black_box("wrong")));
    });

    group.finish();
}

criterion_group!(benches, bench_read_through, bench_session);
criterion_main!(benches);
