// Copyright 2026 the Osier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=osier_surface --heading-base-level=0

//! Osier Surface: the boundary between host input and a stick session.
//!
//! `osier_session` is deliberately ignorant of where samples come from. This
//! crate models that outside world:
//!
//! - [`SurfaceSample`] and friends: the press/move/release samples a host
//!   delivers, tagged with [`PointerSource`] and timestamps.
//! - [`SampleMask`] and [`InputSurface`]: how interest in sample kinds is
//!   registered and dropped, so hosts only forward what is wanted.
//! - [`StickBinding`]: owns one session, keeps surface registration in step
//!   with the session lifecycle, and forwards events to an update sink.
//!
//! No real event loop lives here. A host adapter (DOM, winit, a test
//! script) implements [`InputSurface`], assembles samples, and feeds them to
//! [`StickBinding::handle`].
//!
//! ## Scripted example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use osier_session::StickConfig;
//! use osier_surface::{
//!     MoveSample, PointerSource, PressSample, ReleaseSample, StickBinding, SurfaceSample,
//! };
//!
//! // A surface that ignores registration and a sink that ignores events
//! // are both spelled `()`.
//! let mut binding = StickBinding::new(StickConfig::default(), &mut ());
//!
//! let press = SurfaceSample::Press(PressSample {
//!     bounds: Rect::new(0.0, 0.0, 100.0, 100.0),
//!     pos: Point::new(50.0, 50.0),
//!     timestamp_ms: 0,
//!     source: PointerSource::Touch,
//! });
//! assert!(binding.handle(&press, &mut (), &mut ()));
//! assert!(binding.session().is_dragging());
//!
//! let mv = SurfaceSample::Move(MoveSample {
//!     pos: Point::new(80.0, 30.0),
//!     timestamp_ms: 16,
//!     source: PointerSource::Touch,
//! });
//! assert!(binding.handle(&mv, &mut (), &mut ()));
//!
//! let release = SurfaceSample::Release(ReleaseSample {
//!     timestamp_ms: 32,
//!     source: PointerSource::Touch,
//! });
//! assert!(binding.handle(&release, &mut (), &mut ()));
//! assert!(!binding.session().is_dragging());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod binding;
mod sample;
mod surface;

pub use binding::StickBinding;
pub use sample::{
    MoveSample, PointerSource, PressSample, ReleaseSample, SurfaceSample, primary_touch,
};
pub use surface::{InputSurface, SampleMask};
