//! Refinement benchmarks.
//!
//! `Bundle::refine` is the dominant cost center of the crate:
//! O(new points × ncomp) interpolator evaluations. Benchmarked across source
//! grid sizes plus the one-level tree refine that sits on top of it.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use fibretree::{Bundle, Chart, TreeConfig, TreeNode};
use glam::{DVec3, UVec3};

/// Bundle over the unit cube carrying `ncomp` distinct linear fields.
fn linear_bundle(cells: u32, ncomp: usize) -> Bundle {
  let chart = Chart::new(DVec3::ZERO, DVec3::ONE, UVec3::splat(cells));
  let mut fibre = Vec::with_capacity(chart.lattice().len() * ncomp);
  for &p in chart.grid() {
    for comp in 0..ncomp {
      fibre.push(p.x + comp as f64 * p.y - p.z);
    }
  }
  Bundle::with_fibre(chart, ncomp, fibre).unwrap()
}

fn bench_bundle_refine(c: &mut Criterion) {
  let mut group = c.benchmark_group("bundle_refine");
  for cells in [2u32, 4, 8, 16] {
    let bundle = linear_bundle(cells, 4);
    group.bench_with_input(
      BenchmarkId::new("factor_2", format!("{cells}^3_cells")),
      &bundle,
      |b, bundle| b.iter(|| black_box(bundle.refine(2).unwrap())),
    );
  }
  for factor in [2u32, 4] {
    let bundle = linear_bundle(4, 4);
    group.bench_with_input(
      BenchmarkId::new("factor_sweep", factor),
      &bundle,
      |b, bundle| b.iter(|| black_box(bundle.refine(factor).unwrap())),
    );
  }
  group.finish();
}

fn bench_tree_refine(c: &mut Criterion) {
  c.bench_function("tree_refine_one_level", |b| {
    b.iter_batched(
      || TreeNode::root(linear_bundle(2, 8), TreeConfig::default()),
      |mut root| {
        root.refine(2).unwrap();
        root
      },
      BatchSize::SmallInput,
    )
  });
}

criterion_group!(benches, bench_bundle_refine, bench_tree_refine);
criterion_main!(benches);
