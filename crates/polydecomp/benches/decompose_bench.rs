//! Criterion benchmarks for greedy partition and diagonal merge.
//! Focus sizes: n in {16, 32, 64, 128, 256} vertices of random star polygons.
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p polydecomp

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use polydecomp::merge::{merge, MergeStrategy};
use polydecomp::partition::{partition, PartitionCfg};
use polydecomp::rand::{draw_star_polygon, ReplayToken, StarCfg};
use polydecomp::PolygonStore;

fn random_star(n: usize, seed: u64) -> PolygonStore {
    let cfg = StarCfg {
        vertices: n,
        ..StarCfg::default()
    };
    PolygonStore::from_points(&draw_star_polygon(cfg, ReplayToken { seed, index: 0 }))
        .expect("star polygon is valid")
}

fn bench_decompose(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompose");
    for &n in &[16usize, 32, 64, 128, 256] {
        group.bench_with_input(BenchmarkId::new("partition", n), &n, |b, &n| {
            let store = random_star(n, 43);
            b.iter(|| {
                let _p = partition(&store, PartitionCfg::default()).unwrap();
            })
        });

        group.bench_with_input(BenchmarkId::new("merge_single_pass", n), &n, |b, &n| {
            let store = random_star(n, 44);
            let raw = partition(&store, PartitionCfg::default()).unwrap().pieces;
            b.iter_batched(
                || raw.clone(),
                |pieces| {
                    let _m = merge(&store, pieces, MergeStrategy::SinglePass).unwrap();
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("merge_fixed_point", n), &n, |b, &n| {
            let store = random_star(n, 44);
            let raw = partition(&store, PartitionCfg::default()).unwrap().pieces;
            b.iter_batched(
                || raw.clone(),
                |pieces| {
                    let _m = merge(&store, pieces, MergeStrategy::FixedPoint).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_decompose);
criterion_main!(benches);
