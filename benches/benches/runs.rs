// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use understory_wrap::{Axis, RunConstraints, RunParams, WrapLayout, compute_runs, fixed_runs};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_sizes(n: usize) -> Vec<Size> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..n)
        .map(|_| Size::new(20.0 + rng.next_f64() * 120.0, 24.0 + rng.next_f64() * 16.0))
        .collect()
}

fn params(constraints: RunConstraints) -> RunParams {
    RunParams {
        axis: Axis::Horizontal,
        main_axis_limit: 800.0,
        spacing: 8.0,
        constraints,
    }
}

fn bench_compute_runs(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_runs");
    for &n in &[64usize, 1024, 16384] {
        let sizes = gen_sizes(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("greedy_n{}", n), |b| {
            let p = params(RunConstraints::UNBOUNDED);
            b.iter(|| black_box(compute_runs(black_box(&sizes), &p)));
        });
        group.bench_function(format!("bounded_n{}", n), |b| {
            let p = params(RunConstraints::new(Some(2), Some(6)));
            b.iter(|| black_box(compute_runs(black_box(&sizes), &p)));
        });
        group.bench_function(format!("fixed_grid_n{}", n), |b| {
            let constraints = RunConstraints::fixed(5);
            b.iter(|| black_box(fixed_runs(black_box(n), &constraints)));
        });
    }
    group.finish();
}

fn bench_geometry(c: &mut Criterion) {
    let mut group = c.benchmark_group("wrap_layout");
    for &n in &[64usize, 1024, 16384] {
        let sizes = gen_sizes(n);
        let p = params(RunConstraints::UNBOUNDED);
        let runs = compute_runs(&sizes, &p);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("compute_n{}", n), |b| {
            b.iter(|| black_box(WrapLayout::compute(&sizes, &runs, p.axis, p.spacing, 8.0)));
        });
        let layout = WrapLayout::compute(&sizes, &runs, p.axis, p.spacing, 8.0);
        let probe = Point::new(400.0, layout.size().height * 0.5);
        group.bench_function(format!("hit_test_n{}", n), |b| {
            b.iter(|| black_box(layout.hit_test(black_box(probe))));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_compute_runs, bench_geometry);
criterion_main!(benches);
