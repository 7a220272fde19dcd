use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mystats::stats;
use ndarray::{Array1, Array2, Axis};
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    let mut group = c.benchmark_group("std_dev");
    for len in [1_000, 100_000] {
        let sample = Array1::random_using(len, Uniform::new(-100.0, 100.0), &mut rng).to_vec();
        group.bench_with_input(BenchmarkId::from_parameter(len), &sample, |b, sample| {
            b.iter(|| stats::std_dev(black_box(sample)))
        });
    }
    group.finish();

    let matrix = Array2::random_using((1_000, 100), Uniform::new(0.0, 1.0), &mut rng);
    c.bench_function("variance_axis 1000x100", |b| {
        b.iter(|| stats::variance_axis(black_box(&matrix), Axis(0)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
