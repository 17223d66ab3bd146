// Copyright 2026 the Osier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Vec2};

use crate::vector::StickVector;

/// Coordinate frame of one drag session.
///
/// A frame is captured once, when a session starts, from the control's
/// bounding box in host-surface coordinates. It stays fixed for the life of
/// the session: every later pointer sample is resolved against the same
/// origin and radius, so a control that moves mid-drag does not shift the
/// stick under the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StickFrame {
    origin: Point,
    radius: f64,
}

impl StickFrame {
    /// Creates a frame from the control's top-left corner and clamp radius.
    #[must_use]
    pub const fn new(origin: Point, radius: f64) -> Self {
        Self { origin, radius }
    }

    /// Creates a frame from a control's bounding box.
    ///
    /// The box's top-left corner becomes the origin. The clamp circle is
    /// inscribed in the box, so for non-square boxes the smaller side
    /// determines the radius.
    #[must_use]
    pub fn from_rect(rect: Rect) -> Self {
        Self {
            origin: rect.origin(),
            radius: 0.5 * rect.width().min(rect.height()),
        }
    }

    /// Returns the frame's top-left corner in host-surface coordinates.
    #[must_use]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Returns the clamp radius in layout units.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the center of the clamp circle in host-surface coordinates.
    #[must_use]
    pub fn center(&self) -> Point {
        self.origin + Vec2::new(self.radius, self.radius)
    }

    /// Resolves an absolute pointer position into this frame.
    ///
    /// The returned vector carries two views of the same sample: the offset
    /// from the frame's center, clamped onto the clamp circle, and the raw
    /// corner-relative position, which is never clamped.
    ///
    /// Clamping rescales both axes by `radius / distance`, so an out-of-range
    /// sample lands on the circle boundary with its heading intact. A sample
    /// exactly at the center keeps the zero offset; no scaling is applied
    /// there.
    #[must_use]
    pub fn resolve(&self, pointer: Point) -> StickVector {
        let local = (pointer - self.origin).to_point();
        let mut offset = pointer - self.center();
        let distance = offset.length();
        if distance > self.radius {
            offset = offset * (self.radius / distance);
        }
        StickVector { offset, local }
    }
}
