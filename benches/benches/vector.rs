// Copyright 2026 the Osier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for stick-frame geometry and heading classification.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Vec2};
use osier_vector::{Direction, StickFrame, heading};

/// Deterministic pointer positions drifting around (and past) a radius-50 frame.
fn pointer_drift(len: usize) -> Vec<Point> {
    (0..len)
        .map(|i| {
            let x = 50.0 + ((i * 7) % 120) as f64 - 60.0;
            let y = 50.0 + ((i * 13) % 80) as f64 - 40.0;
            Point::new(x, y)
        })
        .collect()
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("vector/resolve");
    let frame = StickFrame::from_rect(Rect::new(0.0, 0.0, 100.0, 100.0));

    // Hypothesis: the clamp branch is a division and a scale, so out-of-range
    // pointers should cost barely more than in-range ones.
    for len in [256usize, 1_024, 4_096] {
        let mixed = pointer_drift(len);
        let inside: Vec<Point> = (0..len)
            .map(|i| Point::new(50.0 + ((i * 7) % 40) as f64 - 20.0, 50.0))
            .collect();
        let clamped: Vec<Point> = (0..len)
            .map(|i| Point::new(200.0 + (i % 40) as f64, 50.0))
            .collect();
        group.throughput(Throughput::Elements(len as u64));

        for (name, points) in [("mixed", &mixed), ("inside", &inside), ("clamped", &clamped)] {
            group.bench_with_input(BenchmarkId::new(name, len), points, |b, points| {
                b.iter(|| {
                    let mut acc = 0.0;
                    for pointer in points {
                        acc += frame.resolve(*pointer).magnitude();
                    }
                    black_box(acc)
                });
            });
        }
    }

    group.finish();
}

fn bench_heading(c: &mut Criterion) {
    let mut group = c.benchmark_group("vector/heading");

    for len in [256usize, 4_096] {
        let offsets: Vec<Vec2> = pointer_drift(len)
            .into_iter()
            .map(|p| p - Point::new(50.0, 50.0))
            .collect();
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("angle", len), &offsets, |b, offsets| {
            b.iter(|| {
                let mut acc = 0.0;
                for offset in offsets {
                    acc += heading(*offset);
                }
                black_box(acc)
            });
        });

        group.bench_with_input(BenchmarkId::new("classify", len), &offsets, |b, offsets| {
            b.iter(|| {
                let mut rightward = 0usize;
                for offset in offsets {
                    if Direction::from_offset(*offset) == Direction::Right {
                        rightward += 1;
                    }
                }
                black_box(rightward)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_resolve, bench_heading);
criterion_main!(benches);
