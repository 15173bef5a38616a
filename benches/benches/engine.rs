// Copyright 2025 the Anchorzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use anchorzoom::{AnchorMode, EngineConfig, TransformDescriptor, ZoomPanEngine};
use anchorzoom_controls::{Controls, ControlsConfig};
use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, Vec2};

fn bench_zoom_steps(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine/zoom");

    for (name, mode) in [
        ("origin", AnchorMode::Origin),
        ("compensated", AnchorMode::Compensated),
    ] {
        let config = EngineConfig::new().with_anchor_mode(mode);
        for steps in [64usize, 1_024] {
            group.throughput(Throughput::Elements(steps as u64));
            group.bench_with_input(BenchmarkId::new(name, steps), &steps, |b, &steps| {
                b.iter_batched(
                    || ZoomPanEngine::new(None::<TransformDescriptor>, config),
                    |mut engine| {
                        for i in 0..steps {
                            let sign = if i % 7 < 4 { 1.0 } else { -1.0 };
                            engine.zoom(i as f64, (steps - i) as f64, sign);
                        }
                        black_box(engine.state());
                    },
                    BatchSize::SmallInput,
                );
            });
        }
    }

    group.finish();
}

fn bench_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("controls/drag");

    // A drag gesture is one pan per pointer move.
    for moves in [64usize, 1_024] {
        group.throughput(Throughput::Elements(moves as u64));
        group.bench_with_input(BenchmarkId::new("drag_move", moves), &moves, |b, &moves| {
            b.iter_batched(
                || Controls::new((), ControlsConfig::default()),
                |mut controls| {
                    controls.drag_start(Point::ZERO);
                    for i in 0..moves {
                        controls.drag_move(Point::new(i as f64, (i / 2) as f64));
                    }
                    controls.drag_end();
                    black_box(controls.state());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.bench_function("wheel_at", |b| {
        let mut controls = Controls::new((), ControlsConfig::default());
        let mut sign = -1.0;
        b.iter(|| {
            sign = -sign;
            controls.wheel_at(Point::new(320.0, 240.0), Vec2::new(0.0, sign));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_zoom_steps, bench_drag);
criterion_main!(benches);
