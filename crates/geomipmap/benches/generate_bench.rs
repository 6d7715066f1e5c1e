//! Benchmarks for landscape generation.
//!
//! Workloads use a smooth procedural field so every block has non-trivial
//! normals.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use geomipmap::mesh;
use geomipmap::{
  generate, generate_par, lod, partition, HeightField, LandscapeConfig, Tiling,
  TriangulationPolicy, WorldExtent,
};

/// Rolling hills over a `resolution²` field.
fn hills(resolution: u32) -> HeightField {
  let scale = std::f32::consts::TAU * 4.0 / (resolution - 1) as f32;
  HeightField::from_fn(resolution, resolution, |px, py| {
    let x = px as f32 * scale;
    let y = py as f32 * scale;
    0.5 + 0.25 * x.sin() * y.cos()
  })
  .unwrap()
}

/// One 17×17 block of LOD 0.
fn bench_single_block(c: &mut Criterion) {
  let field = hills(129);
  let level = lod::plan(129, 129)[0];
  let windows =
    partition::partition(&level, Tiling::Fixed { block_quad_size: 16 }, 129, 129).unwrap();
  let window = windows[0];
  let extent = WorldExtent::default();

  let mut group = c.benchmark_group("single_block");
  group.throughput(Throughput::Elements(16 * 16));
  for policy in [
    TriangulationPolicy::RisingDiagonal,
    TriangulationPolicy::FallingDiagonal,
  ] {
    group.bench_with_input(
      BenchmarkId::new("build", format!("{:?}", policy)),
      &policy,
      |b, &policy| b.iter(|| mesh::build(black_box(&window), &field, &extent, policy)),
    );
  }
  group.finish();
}

/// Full hierarchy, tiled vs untiled.
fn bench_tiling_modes(c: &mut Criterion) {
  let mut group = c.benchmark_group("generate_tiling");
  group.sample_size(20);

  for resolution in [129u32, 513] {
    let field = hills(resolution);
    let tiled = LandscapeConfig::default();
    let untiled = LandscapeConfig::default().with_tiling(Tiling::None);

    group.bench_with_input(BenchmarkId::new("tiled", resolution), &field, |b, field| {
      b.iter(|| generate(black_box(field), &tiled))
    });
    group.bench_with_input(BenchmarkId::new("untiled", resolution), &field, |b, field| {
      b.iter(|| generate(black_box(field), &untiled))
    });
  }

  group.finish();
}

/// Sequential vs rayon on a 1025² field.
fn bench_sequential_vs_parallel(c: &mut Criterion) {
  let field = hills(1025);
  let config = LandscapeConfig::default();

  let mut group = c.benchmark_group("generate_1025");
  group.sample_size(10);
  group.throughput(Throughput::Elements(1024 * 1024));

  group.bench_function("sequential", |b| {
    b.iter(|| generate(black_box(&field), &config))
  });
  group.bench_function("parallel", |b| {
    b.iter(|| generate_par(black_box(&field), &config))
  });

  group.finish();
}

criterion_group!(
  benches,
  bench_single_block,
  bench_tiling_modes,
  bench_sequential_vs_parallel
);
criterion_main!(benches);
