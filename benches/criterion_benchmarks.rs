use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use lcsdelta::engine::{apply_diff, produce_diff};
use lcsdelta::lcs::{self, DEFAULT_MAX_TABLE_CELLS, LcsTable};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn gen_data(size: usize, seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.random::<u8>()).collect()
}

/// Rewrite one byte every `stride` bytes, keeping the first and last byte.
fn mutate(base: &[u8], stride: usize, seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut out = base.to_vec();
    let last = out.len().saturating_sub(1);
    for i in (1..last).step_by(stride.max(1)) {
        out[i] = rng.random();
    }
    out
}

fn bench_table_fill(c: &mut Criterion) {
    let mut g = c.benchmark_group("table_fill");
    for size in [256usize, 1024, 4096] {
        let old = gen_data(size, 1);
        let new = mutate(&old, 64, 2);
        g.throughput(Throughput::Elements((size * size) as u64));
        g.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let mut table =
                    LcsTable::try_new(old.len(), new.len(), DEFAULT_MAX_TABLE_CELLS).unwrap();
                table.fill(black_box(&old), black_box(&new));
                black_box(table.lcs_len());
            });
        });
    }
    g.finish();
}

fn bench_align(c: &mut Criterion) {
    let mut g = c.benchmark_group("align");
    for size in [256usize, 1024, 4096] {
        let old = gen_data(size, 3);
        let new = mutate(&old, 32, 4);
        g.throughput(Throughput::Bytes(size as u64));
        g.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let common = lcs::align(black_box(&old), black_box(&new), DEFAULT_MAX_TABLE_CELLS)
                    .unwrap();
                black_box(common);
            });
        });
    }
    g.finish();
}

fn bench_produce_diff(c: &mut Criterion) {
    let mut g = c.benchmark_group("produce_diff");
    for stride in [16usize, 128, 1024] {
        let old = gen_data(2048, 5);
        let new = mutate(&old, stride, 6);
        g.bench_with_input(BenchmarkId::from_parameter(stride), &stride, |b, _| {
            b.iter(|| {
                let diff = produce_diff(black_box(&old), black_box(&new)).unwrap();
                black_box(diff);
            });
        });
    }
    g.finish();
}

fn bench_apply_diff(c: &mut Criterion) {
    let mut g = c.benchmark_group("apply_diff");
    for size in [1024usize, 4096] {
        let old = gen_data(size, 7);
        let new = mutate(&old, 64, 8);
        let diff = produce_diff(&old, &new).unwrap();
        g.throughput(Throughput::Bytes(size as u64));
        g.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let out = apply_diff(black_box(&old), black_box(&diff));
                let _ = black_box(out);
            });
        });
    }
    g.finish();
}

criterion_group!(
    benches,
    bench_table_fill,
    bench_align,
    bench_produce_diff,
    bench_apply_diff
);
criterion_main!(benches);
