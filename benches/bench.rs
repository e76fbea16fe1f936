use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use sort_viz_rs::patterns;
use sort_viz_rs::{Algorithm, NoopObserver};

const SIZES: [usize; 3] = [100, 1_000, 10_000];

fn bench_pattern(c: &mut Criterion, pattern_name: &str, pattern_fn: impl Fn(usize) -> Vec<i32>) {
    for algorithm in Algorithm::ALL {
        let mut group = c.benchmark_group(format!("{}-{pattern_name}", algorithm.name()));
        group.sample_size(10);

        for size in SIZES {
            let input = pattern_fn(size);
            group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
                b.iter_batched(
                    || input.clone(),
                    |mut v| {
                        algorithm.sort(black_box(&mut v), &mut NoopObserver).unwrap();
                        v
                    },
                    BatchSize::LargeInput,
                )
            });
        }

        group.finish();
    }
}

fn bench_random(c: &mut Criterion) {
    let seed = patterns::random_init_seed();
    bench_pattern(c, "random", |len| {
        patterns::random_uniform(len, 0..10_000, &mut StdRng::seed_from_u64(seed))
    });
}

fn bench_random_zipf(c: &mut Criterion) {
    let seed = patterns::random_init_seed();
    bench_pattern(c, "random_zipf", |len| {
        patterns::random_zipf(len, 1.0, &mut StdRng::seed_from_u64(seed))
    });
}

fn bench_ascending(c: &mut Criterion) {
    bench_pattern(c, "ascending", patterns::ascending);
}

criterion_group!(benches, bench_random, bench_random_zipf, bench_ascending);
criterion_main!(benches);
