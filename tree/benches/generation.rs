//! Criterion benchmarks for dungeon generation throughput

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use dungeon_engine::{find_shortest_safe_path, DungeonTree};
use dungeon_tree::{DungeonConfig, TreeGenerator};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn benchmark_generate(c: &mut Criterion) {
    let generator = TreeGenerator::new(DungeonConfig::default()).unwrap();
    let mut seed = 0u64;
    c.bench_function("generate_default", |b| {
        b.iter_batched(
            || {
                seed += 1;
                ChaCha8Rng::seed_from_u64(seed)
            },
            |mut rng| black_box(generator.generate(&mut rng).unwrap()),
            BatchSize::SmallInput,
        )
    });
}

fn benchmark_generate_playable(c: &mut Criterion) {
    let generator = TreeGenerator::new(DungeonConfig::default()).unwrap();
    let mut seed = 0u64;
    c.bench_function("generate_playable_default", |b| {
        b.iter_batched(
            || {
                seed += 1;
                ChaCha8Rng::seed_from_u64(seed)
            },
            |mut rng| black_box(generator.generate_playable(&mut rng).unwrap()),
            BatchSize::SmallInput,
        )
    });
}

fn benchmark_route_on_generated(c: &mut Criterion) {
    let generator = TreeGenerator::new(DungeonConfig::default()).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(12345);
    let generated = generator.generate(&mut rng).unwrap();
    c.bench_function("route_on_generated", |b| {
        b.iter(|| find_shortest_safe_path(black_box(&generated.tree), DungeonTree::ROOT))
    });
}

criterion_group!(
    benches,
    benchmark_generate,
    benchmark_generate_playable,
    benchmark_route_on_generated,
);
criterion_main!(benches);
