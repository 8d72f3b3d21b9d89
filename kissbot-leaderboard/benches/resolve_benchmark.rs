use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kissbot_leaderboard::resolve;

fn create_test_names(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("Test Puzzle {} Variant-{}", i, i % 7))
        .collect()
}

fn bench_resolve(c: &mut Criterion) {
    let names_10 = create_test_names(10);
    let names_100 = create_test_names(100);
    let names_1000 = create_test_names(1000);

    c.bench_function("resolve_exact_100", |b| {
        b.iter(|| black_box(resolve("test puzzle 50 variant-1", &names_100)));
    });

    c.bench_function("resolve_abbreviation_100", |b| {
        b.iter(|| black_box(resolve("tp5v5", &names_100)));
    });

    c.bench_function("resolve_containment_10", |b| {
        b.iter(|| black_box(resolve("puz 5", &names_10)));
    });

    c.bench_function("resolve_containment_1000", |b| {
        b.iter(|| black_box(resolve("puz 50 var", &names_1000)));
    });
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
