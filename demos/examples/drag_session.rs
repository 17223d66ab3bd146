// Copyright 2026 the Osier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-session lifecycle and throttling.
//!
//! Demonstrate the press/move/release event flow, offset clamping at the
//! frame edge, and the wall-clock move throttle.
//!
//! Run:
//! - `cargo run -p osier_demos --example drag_session`

use kurbo::{Point, Rect, Vec2};
use osier_session::{StickConfig, StickEvent, StickSession};
use osier_vector::Direction;

fn describe(event: Option<StickEvent>) -> String {
    match event {
        None => "(suppressed)".to_owned(),
        Some(StickEvent::Start) => "start".to_owned(),
        Some(StickEvent::Move { output, direction }) => {
            format!("move ({:+.1}, {:+.1}) heading {direction:?}", output.x, output.y)
        }
        Some(StickEvent::Stop) => "stop".to_owned(),
    }
}

fn main() {
    let frame = Rect::new(0.0, 0.0, 100.0, 100.0);

    let mut session = StickSession::new(StickConfig::default());
    let start = session.on_press(frame);
    let inside = session.on_move(Point::new(80.0, 30.0), 0);
    let past_edge = session.on_move(Point::new(130.0, 50.0), 5);
    let stop = session.on_release();

    println!("== Unthrottled session ==");
    println!("  press           -> {}", describe(start));
    println!("  move (80, 30)   -> {}", describe(inside));
    println!("  move (130, 50)  -> {}", describe(past_edge));
    println!("  release         -> {}", describe(stop));

    // Same gesture again, but only one move per 100 ms window is delivered.
    let config = StickConfig {
        throttle_ms: 100,
        ..StickConfig::default()
    };
    let mut throttled = StickSession::new(config);
    let _ = throttled.on_press(frame);
    println!("== Throttled session (100 ms window) ==");
    let mut delivered = Vec::new();
    for at in [0u64, 50, 110] {
        let event = throttled.on_move(Point::new(64.0, 50.0), at);
        println!("  move at {at:>3} ms -> {}", describe(event));
        delivered.extend(event);
    }
    let _ = throttled.on_release();

    assert_eq!(start, Some(StickEvent::Start));
    assert_eq!(
        inside,
        Some(StickEvent::Move {
            output: Vec2::new(30.0, 20.0),
            direction: Direction::Right,
        })
    );
    assert_eq!(
        past_edge,
        Some(StickEvent::Move {
            output: Vec2::new(50.0, 0.0),
            direction: Direction::Right,
        })
    );
    assert_eq!(stop, Some(StickEvent::Stop));
    assert_eq!(delivered.len(), 2);
}
