// Copyright 2025 the Anchorzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use anchorzoom_math::TransformDescriptor;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;

fn bench_descriptor_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("descriptor");
    let descriptor = TransformDescriptor::new(1.0 / 3.0, 1234.5678, -0.000_125);
    let text = descriptor.to_string();

    group.bench_function("format", |b| {
        b.iter(|| black_box(black_box(descriptor).to_string()));
    });
    group.bench_function("parse", |b| {
        b.iter(|| black_box(black_box(text.as_str()).parse::<TransformDescriptor>()));
    });
    group.bench_function("affine_about", |b| {
        b.iter(|| black_box(black_box(descriptor).affine_about(Point::new(400.0, 300.0))));
    });

    group.finish();
}

criterion_group!(benches, bench_descriptor_text);
criterion_main!(benches);
