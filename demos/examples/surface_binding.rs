// Copyright 2026 the Osier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer samples routed through a surface binding.
//!
//! Demonstrate subscribing a stick binding to an input surface, filtering a
//! sample script by the surface's active mask, and fanning the resulting
//! events out to an update sink.
//!
//! Run:
//! - `cargo run -p osier_demos --example surface_binding`

use kurbo::{Point, Rect};
use osier_session::{StickConfig, StickEvent, UpdateSink};
use osier_surface::{
    InputSurface, MoveSample, PointerSource, PressSample, ReleaseSample, SampleMask, StickBinding,
    SurfaceSample, primary_touch,
};
use peniko::Color;

struct LoggingSurface {
    active: SampleMask,
}

impl InputSurface for LoggingSurface {
    fn subscribe(&mut self, mask: SampleMask) {
        self.active.insert(mask);
        println!("  surface subscribe   {mask:?} (active: {:?})", self.active);
    }

    fn unsubscribe(&mut self, mask: SampleMask) {
        self.active.remove(mask);
        println!("  surface unsubscribe {mask:?} (active: {:?})", self.active);
    }
}

struct Console;

impl UpdateSink for Console {
    fn on_start(&mut self, _: &StickEvent) {
        println!("  sink  start");
    }

    fn on_move(&mut self, event: &StickEvent) {
        if let StickEvent::Move { output, direction } = event {
            println!(
                "  sink  move ({:+.1}, {:+.1}) heading {direction:?}",
                output.x, output.y
            );
        }
    }

    fn on_stop(&mut self, _: &StickEvent) {
        println!("  sink  stop");
    }
}

fn touch_move(touches: &[Point], timestamp_ms: u64) -> SurfaceSample {
    SurfaceSample::Move(MoveSample {
        pos: primary_touch(touches).unwrap_or(Point::ZERO),
        timestamp_ms,
        source: PointerSource::Touch,
    })
}

fn main() {
    // A larger stick with a sea-green cap; its frame spans (40, 40)..(160, 160).
    let config = StickConfig {
        size: 120.0,
        stick_color: Color::from_rgb8(0x2e, 0x8b, 0x57),
        ..StickConfig::default()
    };

    let mut surface = LoggingSurface {
        active: SampleMask::empty(),
    };
    let mut sink = Console;

    println!("== Attach ==");
    let mut binding = StickBinding::new(config, &mut surface);

    let script = [
        SurfaceSample::Press(PressSample {
            bounds: Rect::new(40.0, 40.0, 160.0, 160.0),
            pos: Point::new(100.0, 100.0),
            timestamp_ms: 0,
            source: PointerSource::Touch,
        }),
        touch_move(&[Point::new(160.0, 100.0), Point::new(20.0, 20.0)], 16),
        touch_move(&[Point::new(190.0, 100.0)], 32),
        SurfaceSample::Release(ReleaseSample {
            timestamp_ms: 48,
            source: PointerSource::Touch,
        }),
    ];

    println!("== Gesture ==");
    for sample in script {
        if surface.active.contains(sample.mask()) {
            binding.handle(&sample, &mut surface, &mut sink);
        }
    }

    println!("== Detach ==");
    binding.detach(&mut surface, &mut sink);

    assert!(!binding.session().is_dragging());
    assert!(surface.active.is_empty());
}
