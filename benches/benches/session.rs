// Copyright 2026 the Osier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for drag-session dispatch and throttling.

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, Rect};
use osier_session::{StickConfig, StickEvent, StickSession, UpdateSink, emit};
use osier_surface::{
    MoveSample, PointerSource, PressSample, ReleaseSample, StickBinding, SurfaceSample,
};

#[derive(Default)]
struct CountingSink {
    moves: u64,
}

impl UpdateSink for CountingSink {
    fn on_move(&mut self, event: &StickEvent) {
        let _ = event;
        self.moves += 1;
    }
}

fn bounds() -> Rect {
    Rect::new(0.0, 0.0, 100.0, 100.0)
}

/// Deterministic pointer positions drifting around (and past) the frame.
fn pointer_drift(len: usize) -> Vec<Point> {
    (0..len)
        .map(|i| {
            let x = 50.0 + ((i * 7) % 120) as f64 - 60.0;
            let y = 50.0 + ((i * 13) % 80) as f64 - 40.0;
            Point::new(x, y)
        })
        .collect()
}

fn bench_move_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("session/move_stream");

    // Hypothesis: a suppressed move only refreshes the cached vector, so a wide
    // throttle window should cut per-move cost to roughly the resolve alone.
    for window in [0u64, 100] {
        let len = 4_096usize;
        let positions = pointer_drift(len);
        let config = StickConfig {
            throttle_ms: window,
            ..StickConfig::default()
        };
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(
            BenchmarkId::new("window_ms", window),
            &positions,
            |b, positions| {
                b.iter_batched(
                    || {
                        let mut session = StickSession::new(config);
                        let _ = session.on_press(bounds());
                        session
                    },
                    |mut session| {
                        let mut sink = CountingSink::default();
                        // Timestamps advance at a 60 Hz-ish cadence.
                        for (i, pos) in positions.iter().enumerate() {
                            if let Some(event) = session.on_move(*pos, (i as u64) * 16) {
                                emit(&mut sink, &event);
                            }
                        }
                        black_box(sink.moves);
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

fn bench_lifecycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("session/lifecycle");

    let mut session = StickSession::new(StickConfig::default());
    group.bench_function("press_move_release", |b| {
        b.iter(|| {
            let start = session.on_press(bounds());
            let moved = session.on_move(Point::new(80.0, 30.0), 0);
            let stop = session.on_release();
            black_box((start, moved, stop))
        });
    });

    group.finish();
}

fn bench_binding_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("session/dispatch");

    // One press, a stream of moves, one release, all routed through the
    // surface-facing binding with a no-op surface.
    let len = 1_024usize;
    let mut script = Vec::with_capacity(len + 2);
    script.push(SurfaceSample::Press(PressSample {
        bounds: bounds(),
        pos: Point::new(50.0, 50.0),
        timestamp_ms: 0,
        source: PointerSource::Touch,
    }));
    for (i, pos) in pointer_drift(len).into_iter().enumerate() {
        script.push(SurfaceSample::Move(MoveSample {
            pos,
            timestamp_ms: (i as u64) * 16,
            source: PointerSource::Touch,
        }));
    }
    script.push(SurfaceSample::Release(ReleaseSample {
        timestamp_ms: (len as u64) * 16,
        source: PointerSource::Touch,
    }));
    group.throughput(Throughput::Elements(script.len() as u64));

    group.bench_with_input(
        BenchmarkId::new("scripted", script.len()),
        &script,
        |b, script| {
            b.iter_batched(
                || StickBinding::new(StickConfig::default(), &mut ()),
                |mut binding| {
                    let mut sink = CountingSink::default();
                    for sample in script {
                        binding.handle(sample, &mut (), &mut sink);
                    }
                    black_box(sink.moves);
                },
                BatchSize::SmallInput,
            );
        },
    );

    group.finish();
}

criterion_group!(benches, bench_move_stream, bench_lifecycle, bench_binding_dispatch);
criterion_main!(benches);
