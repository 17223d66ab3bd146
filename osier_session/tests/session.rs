// Copyright 2026 the Osier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `osier_session` crate.
//!
//! These drive full sessions through the public entry points and assert on
//! what an [`UpdateSink`] observes: channel counts, event ordering, payload
//! shape, and throttle suppression.

use std::cell::RefCell;

use kurbo::{Point, Rect, Vec2};
use osier_session::{FnSink, StickConfig, StickEvent, StickSession, UpdateSink, emit};
use osier_vector::Direction;

#[derive(Default)]
struct Recorder {
    events: Vec<StickEvent>,
    starts: u32,
    moves: u32,
    stops: u32,
}

impl UpdateSink for Recorder {
    fn on_start(&mut self, event: &StickEvent) {
        self.starts += 1;
        self.events.push(*event);
    }

    fn on_move(&mut self, event: &StickEvent) {
        self.moves += 1;
        self.events.push(*event);
    }

    fn on_stop(&mut self, event: &StickEvent) {
        self.stops += 1;
        self.events.push(*event);
    }
}

fn deliver(sink: &mut impl UpdateSink, event: Option<StickEvent>) {
    if let Some(event) = event {
        emit(sink, &event);
    }
}

fn bounds() -> Rect {
    Rect::new(0.0, 0.0, 100.0, 100.0)
}

#[test]
fn full_session_reaches_all_three_channels_in_order() {
    let mut session = StickSession::new(StickConfig::default());
    let mut recorder = Recorder::default();

    deliver(&mut recorder, session.on_press(bounds()));
    deliver(&mut recorder, session.on_move(Point::new(80.0, 30.0), 0));
    deliver(&mut recorder, session.on_move(Point::new(50.0, 20.0), 5));
    deliver(&mut recorder, session.on_release());

    assert_eq!(recorder.starts, 1);
    assert_eq!(recorder.moves, 2);
    assert_eq!(recorder.stops, 1);
    assert_eq!(recorder.events.first(), Some(&StickEvent::Start));
    assert_eq!(recorder.events.last(), Some(&StickEvent::Stop));
}

#[test]
fn fn_sink_observes_a_full_session() {
    let mut session = StickSession::new(StickConfig::default());
    let log = RefCell::new(Vec::new());
    let mut sink = FnSink::new()
        .with_start(|_event| log.borrow_mut().push("start"))
        .with_move(|_event| log.borrow_mut().push("move"))
        .with_stop(|_event| log.borrow_mut().push("stop"));

    deliver(&mut sink, session.on_press(bounds()));
    deliver(&mut sink, session.on_move(Point::new(80.0, 30.0), 0));
    deliver(&mut sink, session.on_release());

    assert_eq!(*log.borrow(), ["start", "move", "stop"]);
}

#[test]
fn start_and_stop_payloads_carry_no_geometry() {
    let mut session = StickSession::new(StickConfig::default());

    let start = session.on_press(bounds()).unwrap();
    assert_eq!(start.x(), None);
    assert_eq!(start.y(), None);
    assert_eq!(start.direction(), None);

    session.on_move(Point::new(80.0, 30.0), 0);
    let stop = session.on_release().unwrap();
    assert_eq!(stop.x(), None);
    assert_eq!(stop.y(), None);
    assert_eq!(stop.direction(), None);
}

#[test]
fn move_while_idle_reaches_no_channel() {
    let mut session = StickSession::new(StickConfig::default());
    let mut recorder = Recorder::default();

    deliver(&mut recorder, session.on_move(Point::new(40.0, 40.0), 0));

    assert_eq!(recorder.moves, 0);
    assert!(recorder.events.is_empty());
    assert!(!session.is_dragging());
    assert!(session.last_vector().is_none());
}

#[test]
fn throttle_delivers_first_then_one_per_window() {
    let config = StickConfig {
        throttle_ms: 100,
        ..StickConfig::default()
    };
    let mut session = StickSession::new(config);
    let mut recorder = Recorder::default();

    deliver(&mut recorder, session.on_press(bounds()));
    deliver(&mut recorder, session.on_move(Point::new(60.0, 50.0), 0));
    deliver(&mut recorder, session.on_move(Point::new(70.0, 50.0), 50));
    assert_eq!(recorder.moves, 1, "second sample 50ms in should be suppressed");

    deliver(&mut recorder, session.on_move(Point::new(80.0, 50.0), 110));
    assert_eq!(recorder.moves, 2, "third sample 110ms in should be delivered");
}

#[test]
fn stop_bypasses_the_throttle_gate() {
    let config = StickConfig {
        throttle_ms: 10_000,
        ..StickConfig::default()
    };
    let mut session = StickSession::new(config);
    let mut recorder = Recorder::default();

    deliver(&mut recorder, session.on_press(bounds()));
    deliver(&mut recorder, session.on_move(Point::new(60.0, 50.0), 0));
    // Well inside the window; the release must still be delivered.
    deliver(&mut recorder, session.on_release());

    assert_eq!(recorder.stops, 1);
    assert_eq!(recorder.events.last(), Some(&StickEvent::Stop));
}

#[test]
fn press_move_release_end_to_end() {
    let mut session = StickSession::new(StickConfig::default());
    let mut recorder = Recorder::default();

    deliver(&mut recorder, session.on_press(bounds()));

    let event = session.on_move(Point::new(80.0, 30.0), 0).unwrap();
    assert_eq!(event.x(), Some(30.0));
    assert_eq!(event.y(), Some(20.0));
    assert_eq!(event.direction(), Some(Direction::Right));
    deliver(&mut recorder, Some(event));

    deliver(&mut recorder, session.on_release());
    assert!(!session.is_dragging());
    assert_eq!(recorder.stops, 1);
}

#[test]
fn out_of_range_move_emits_the_clamped_offset() {
    let mut session = StickSession::new(StickConfig::default());
    session.on_press(bounds());

    // Raw center offset (80, 0) clamps onto the circle at (50, 0).
    let event = session.on_move(Point::new(130.0, 50.0), 0).unwrap();
    assert_eq!(event.x(), Some(50.0));
    assert_eq!(event.y(), Some(0.0));
    assert_eq!(event.direction(), Some(Direction::Right));

    let vector = session.last_vector().unwrap();
    assert_eq!(vector.offset, Vec2::new(50.0, 0.0));
    assert_eq!(vector.local, Point::new(130.0, 50.0));
}

#[test]
fn disabled_session_emits_nothing() {
    let config = StickConfig {
        disabled: true,
        ..StickConfig::default()
    };
    let mut session = StickSession::new(config);
    let mut recorder = Recorder::default();

    deliver(&mut recorder, session.on_press(bounds()));
    deliver(&mut recorder, session.on_move(Point::new(80.0, 30.0), 0));
    deliver(&mut recorder, session.on_release());

    assert!(recorder.events.is_empty());
}

#[test]
fn disable_mid_drag_delivers_a_final_stop() {
    let mut session = StickSession::new(StickConfig::default());
    let mut recorder = Recorder::default();

    deliver(&mut recorder, session.on_press(bounds()));
    deliver(&mut recorder, session.on_move(Point::new(80.0, 30.0), 0));
    deliver(&mut recorder, session.set_disabled(true));

    assert_eq!(recorder.stops, 1);
    assert!(!session.is_dragging());

    // No further events while disabled.
    deliver(&mut recorder, session.on_press(bounds()));
    assert_eq!(recorder.starts, 1);
}

#[test]
fn sessions_are_independent_once_stopped() {
    let mut session = StickSession::new(StickConfig::default());
    let mut recorder = Recorder::default();

    deliver(&mut recorder, session.on_press(bounds()));
    deliver(&mut recorder, session.on_move(Point::new(80.0, 30.0), 0));
    deliver(&mut recorder, session.on_release());

    deliver(&mut recorder, session.on_press(Rect::new(10.0, 10.0, 110.0, 110.0)));
    let event = session.on_move(Point::new(90.0, 40.0), 1_000).unwrap();
    // Same relative drag as the first session, shifted frame.
    assert_eq!(event.x(), Some(30.0));
    assert_eq!(event.y(), Some(20.0));
    deliver(&mut recorder, Some(event));
    deliver(&mut recorder, session.on_release());

    assert_eq!(recorder.starts, 2);
    assert_eq!(recorder.moves, 2);
    assert_eq!(recorder.stops, 2);
}
