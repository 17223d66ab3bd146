// Copyright 2026 the Osier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

use crate::direction::Direction;

/// A pointer sample resolved into a session's frame.
///
/// Produced by [`StickFrame::resolve`](crate::StickFrame::resolve). Both
/// fields describe the same sample in the frame's screen-space coordinates,
/// where positive `y` points down the screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StickVector {
    /// Offset from the frame's center, clamped onto the clamp circle.
    pub offset: Vec2,
    /// Pointer position relative to the frame's top-left corner, unclamped.
    ///
    /// Useful for positioning a visual stick element inside the control's
    /// box; it tracks the pointer even past the clamp circle.
    pub local: Point,
}

impl StickVector {
    /// Euclidean length of the clamped center offset.
    ///
    /// Never exceeds the radius of the frame the sample was resolved in.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.offset.length()
    }

    /// Coarse direction band of the center offset.
    #[must_use]
    pub fn direction(&self) -> Direction {
        Direction::from_offset(self.offset)
    }
}
