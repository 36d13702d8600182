//! Benchmarks for tube-from-curves rebuilds.
//!
//! Run with: cargo bench -p tube-from-curves
//!
//! To compare against baseline:
//! 1. First run: cargo bench -p tube-from-curves -- --save-baseline main
//! 2. After changes: cargo bench -p tube-from-curves -- --baseline main

#![allow(missing_docs, clippy::unwrap_used, clippy::cast_possible_truncation)]

use bezier_types::CubicBezier;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use nalgebra::Point3;
use tube_from_curves::{BezierPath, TubeParams, segment_curve};

// =============================================================================
// Test Path Generation
// =============================================================================

/// The two-curve path: a rising bend followed by a steep climb.
fn demo_curves() -> Vec<CubicBezier> {
    vec![
        CubicBezier::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(10.0, 0.0, 0.0),
            Point3::new(20.0, 5.0, 10.0),
            Point3::new(30.0, 10.0, 30.0),
        ),
        CubicBezier::new(
            Point3::new(30.0, 10.0, 30.0),
            Point3::new(40.0, 20.0, 40.0),
            Point3::new(40.0, 20.0, 40.0),
            Point3::new(60.0, -10.0, 100.0),
        ),
    ]
}

/// A long chain of `count` joined S-bends.
fn chain_curves(count: usize) -> Vec<CubicBezier> {
    let mut curves = Vec::with_capacity(count);
    let mut start = Point3::origin();
    for i in 0..count {
        let sign = if i % 2 == 0 { 1.0 } else { -1.0 };
        let end = start + nalgebra::Vector3::new(30.0, 0.0, 10.0);
        curves.push(CubicBezier::new(
            start,
            start + nalgebra::Vector3::new(10.0, 8.0 * sign, 0.0),
            start + nalgebra::Vector3::new(20.0, -8.0 * sign, 10.0),
            end,
        ));
        start = end;
    }
    curves
}

// =============================================================================
// Segmentation Benchmarks
// =============================================================================

fn bench_segment(c: &mut Criterion) {
    let mut group = c.benchmark_group("Segment");
    let curve = demo_curves()[1];

    for granularity in [90, 360, 1440] {
        group.throughput(Throughput::Elements(granularity as u64));
        group.bench_with_input(
            BenchmarkId::new("segment_curve", granularity),
            &granularity,
            |b, &g| b.iter(|| segment_curve(black_box(&curve), g, 5.0)),
        );
    }

    group.finish();
}

// =============================================================================
// Rebuild Benchmarks
// =============================================================================

fn bench_rebuild(c: &mut Criterion) {
    let mut group = c.benchmark_group("Rebuild");

    for (name, params) in [
        ("coarse", TubeParams::coarse()),
        ("default", TubeParams::default()),
        ("fine", TubeParams::fine()),
        ("fine_parallel", TubeParams::fine().with_parallel(true)),
    ] {
        let mut path = BezierPath::with_curves(demo_curves(), params).unwrap();
        let summary = path.rebuild().unwrap();
        group.throughput(Throughput::Elements(summary.triangles as u64));
        group.bench_function(BenchmarkId::new("demo_path", name), |b| {
            b.iter(|| black_box(&mut path).rebuild());
        });
    }

    group.finish();

    let mut group = c.benchmark_group("Rebuild_Chain");
    group.sample_size(20);

    for count in [8, 32] {
        let mut path = BezierPath::with_curves(chain_curves(count), TubeParams::default()).unwrap();
        group.bench_with_input(BenchmarkId::new("curves", count), &count, |b, _| {
            b.iter(|| black_box(&mut path).rebuild());
        });
    }

    group.finish();
}

// =============================================================================
// Criterion Setup
// =============================================================================

criterion_group!(benches, bench_segment, bench_rebuild);
criterion_main!(benches);
