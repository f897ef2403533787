//! Criterion benchmarks for mesh extraction.

use cgmath::{point3, vec3, EuclideanSpace, InnerSpace};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dmc::prelude::*;

fn sphere(samples: u32) -> DenseGrid {
    DenseGrid::sample(vec3(samples, samples, samples), &Bounds::unit(), |p| {
        p.to_vec().magnitude()
    })
}

fn gyroid_bounds() -> Bounds {
    Bounds::new(point3(-5., -5., -5.), point3(5., 5., 5.))
}

fn gyroid(samples: u32) -> DenseGrid {
    DenseGrid::sample(
        vec3(samples, samples, samples),
        &gyroid_bounds(),
        |p| p.x.cos() * p.y.sin() + p.y.cos() * p.z.sin() + p.z.cos() * p.x.sin(),
    )
}

fn bench_sphere(c: &mut Criterion) {
    let mut group = c.benchmark_group("sphere");
    for samples in [32u32, 64] {
        let field = sphere(samples);
        group.throughput(Throughput::Elements(samples.pow(3) as u64));
        for iterations in [0, 2] {
            let config = DmcConfig::default()
                .with_iso_value(0.6)
                .with_smoothing_iterations(iterations);
            group.bench_with_input(
                BenchmarkId::new(format!("smoothing_{}", iterations), samples),
                &field,
                |b, field| b.iter(|| black_box(mesh_from_field(field, &config).unwrap())),
            );
        }
    }
    group.finish();
}

fn bench_gyroid(c: &mut Criterion) {
    let mut group = c.benchmark_group("gyroid");
    for samples in [32u32, 64] {
        let field = gyroid(samples);
        group.throughput(Throughput::Elements(samples.pow(3) as u64));
        for iterations in [0, 2] {
            let config = DmcConfig::default()
                .with_bounds(gyroid_bounds())
                .with_smoothing_iterations(iterations);
            group.bench_with_input(
                BenchmarkId::new(format!("smoothing_{}", iterations), samples),
                &field,
                |b, field| b.iter(|| black_box(mesh_from_field(field, &config).unwrap())),
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_sphere, bench_gyroid);
criterion_main!(benches);
