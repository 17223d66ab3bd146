// Copyright 2026 the Osier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=osier_vector --heading-base-level=0

//! Osier Vector: circle-clamped stick geometry and direction bands.
//!
//! This crate provides the pure geometry underneath a virtual analog stick:
//!
//! - [`StickFrame`]: the coordinate frame captured when a drag session begins,
//!   made of the control's top-left corner and its clamp radius.
//! - [`StickVector`]: a pointer sample resolved into that frame, with the
//!   center offset clamped onto the frame's circle.
//! - [`Direction`]: a coarse four-way classification of an offset's heading.
//!
//! Everything here is stateless. Session bookkeeping (when a frame is
//! captured, which samples reach consumers) lives in `osier_session`; this
//! crate only answers "where is the pointer relative to the control, and
//! which way does that point".
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use osier_vector::{Direction, StickFrame};
//!
//! // A 100x100 control whose top-left corner sits at (200, 120).
//! let frame = StickFrame::from_rect(Rect::new(200.0, 120.0, 300.0, 220.0));
//! assert_eq!(frame.radius(), 50.0);
//!
//! // A pointer inside the circle resolves without clamping.
//! let v = frame.resolve(Point::new(280.0, 150.0));
//! assert_eq!(v.offset.x, 30.0);
//! assert_eq!(v.offset.y, -20.0);
//! assert_eq!(v.direction(), Direction::Right);
//!
//! // A pointer outside is pulled back onto the circle boundary, keeping
//! // its heading.
//! let far = frame.resolve(Point::new(330.0, 170.0));
//! assert!(far.magnitude() <= frame.radius() + 1e-9);
//! assert_eq!(far.offset, kurbo::Vec2::new(50.0, 0.0));
//! ```
//!
//! Offsets are expressed in screen coordinates, so positive `y` points down
//! the screen. The heading convention puts "up the screen" in the
//! [`Direction::Forward`] band; see [`Direction`] for the exact bands.
//!
//! This crate is `no_std`.

#![no_std]

mod direction;
mod frame;
mod vector;

pub use direction::{Direction, LOWER_DIAGONAL, UPPER_DIAGONAL, heading};
pub use frame::StickFrame;
pub use vector::StickVector;
