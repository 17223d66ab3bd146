// Copyright 2026 the Osier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=osier_session --heading-base-level=0

//! Osier Session: drag-session state machine for virtual analog sticks.
//!
//! This crate is the stateful half of the Osier stack. It consumes raw
//! press/move/release samples, resolves them with `osier_vector`, and hands
//! consumers a stream of normalized [`StickEvent`]s:
//!
//! - [`StickSession`]: the idle/dragging state machine, one per control.
//! - [`ThrottleGate`]: wall-clock suppression window for move updates.
//! - [`StickEvent`]: the uniform event shape shared by all three channels.
//! - [`UpdateSink`] and [`emit`]: the consumer notification boundary, with
//!   [`FnSink`] adapting plain closures to it.
//! - [`StickConfig`]: construction-time options, including render-only
//!   colors carried through for the visual layer.
//!
//! The session never reads a clock, never touches a UI surface, and never
//! owns callbacks. Timestamps arrive with each move sample, events are
//! returned to the caller, and delivery happens through [`emit`]. That keeps
//! every behavior, throttle suppression included, drivable from plain unit
//! tests.
//!
//! ## Lifecycle example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use osier_session::{StickConfig, StickEvent, StickSession};
//! use osier_vector::Direction;
//!
//! let mut session = StickSession::new(StickConfig::default());
//!
//! // A press captures the frame from the control's bounding box.
//! let start = session.on_press(Rect::new(0.0, 0.0, 100.0, 100.0));
//! assert_eq!(start, Some(StickEvent::Start));
//! assert!(session.is_dragging());
//!
//! // Moves resolve against the captured frame. The emitted `y` points up
//! // the screen, so this drag toward the top-right corner reads positive.
//! let ev = session.on_move(Point::new(80.0, 30.0), 0).unwrap();
//! assert_eq!(ev.x(), Some(30.0));
//! assert_eq!(ev.y(), Some(20.0));
//! assert_eq!(ev.direction(), Some(Direction::Right));
//!
//! // Release returns the session to idle and discards the geometry.
//! let stop = session.on_release();
//! assert_eq!(stop, Some(StickEvent::Stop));
//! assert!(!session.is_dragging());
//! assert!(session.last_vector().is_none());
//! ```
//!
//! ## Throttled moves
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use osier_session::{StickConfig, StickSession};
//!
//! let config = StickConfig {
//!     throttle_ms: 100,
//!     ..StickConfig::default()
//! };
//! let mut session = StickSession::new(config);
//! session.on_press(Rect::new(0.0, 0.0, 100.0, 100.0));
//!
//! assert!(session.on_move(Point::new(60.0, 50.0), 0).is_some());
//! assert!(session.on_move(Point::new(62.0, 50.0), 50).is_none());
//! assert!(session.on_move(Point::new(64.0, 50.0), 110).is_some());
//!
//! // Suppressed samples still refresh the cached vector for renderers.
//! assert_eq!(session.last_vector().unwrap().local, Point::new(64.0, 50.0));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod events;
mod gate;
mod session;
mod sink;

pub use config::StickConfig;
pub use events::StickEvent;
pub use gate::ThrottleGate;
pub use session::{SessionSnapshot, StickSession};
pub use sink::{FnSink, UpdateSink, emit};
