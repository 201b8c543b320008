// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Size;
use understory_reorder::{LayoutEngine, WrapConfig};

fn engine(n: usize) -> LayoutEngine<usize> {
    let config = WrapConfig {
        main_axis_extent: 800.0,
        spacing: 8.0,
        run_spacing: 8.0,
        ..WrapConfig::default()
    };
    let mut e = LayoutEngine::new((0..n).collect(), config, ());
    e.set_item_sizes(core::iter::repeat_n(Size::new(48.0, 48.0), n));
    e
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_layout");
    for &n in &[64usize, 1024, 8192] {
        let e = engine(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("idle_n{}", n), |b| {
            b.iter(|| black_box(e.layout().len()));
        });
    }
    group.finish();
}

fn bench_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_drag");
    for &n in &[64usize, 1024, 8192] {
        group.throughput(Throughput::Elements(n as u64));
        // Sweep the dragged item across the whole list, one settled step at a time.
        group.bench_function(format!("sweep_n{}", n), |b| {
            b.iter_batched(
                || engine(n),
                |mut e| {
                    let _ = e.drag_start(0);
                    for target in 1..n.min(64) {
                        let _ = e.drag_hover(0, target, false);
                        let _ = e.tick(Duration::from_millis(200));
                    }
                    black_box(e.drag_end(0, false));
                },
                BatchSize::LargeInput,
            )
        });
        group.bench_function(format!("resize_n{}", n), |b| {
            b.iter_batched(
                || engine(n),
                |mut e| {
                    e.set_main_axis_extent(600.0);
                    black_box(e.runs().map(|r| r.run_count()));
                },
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_layout, bench_drag);
criterion_main!(benches);
