use criterion::{black_box, criterion_group, criterion_main, Criterion};
use natty_or_not::core::{scoring, shuffle, Catalog, NullSink, Session, SimpleRng};
use natty_or_not::types::Score;

fn bench_shuffle(c: &mut Criterion) {
    let catalog = Catalog::physiques();
    let mut rng = SimpleRng::new(12345);

    c.bench_function("shuffle_catalog", |b| {
        b.iter(|| shuffle(black_box(&catalog), &mut rng))
    });
}

fn bench_round_cycle(c: &mut Criterion) {
    let mut session = Session::new(Catalog::physiques(), SimpleRng::new(12345), NullSink).unwrap();
    session.start().unwrap();

    c.bench_function("guess_and_advance", |b| {
        b.iter(|| {
            let _ = session.guess(black_box(true));
            let _ = session.advance();
        })
    });
}

fn bench_score_record(c: &mut Criterion) {
    c.bench_function("score_record", |b| {
        b.iter(|| scoring::record(black_box(true), black_box(Score::new(10, 20, 3))))
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut session = Session::new(Catalog::physiques(), SimpleRng::new(12345), NullSink).unwrap();
    session.start().unwrap();

    c.bench_function("snapshot", |b| b.iter(|| black_box(session.snapshot())));
}

criterion_group!(
    benches,
    bench_shuffle,
    bench_round_cycle,
    bench_score_record,
    bench_snapshot
);
criterion_main!(benches);
