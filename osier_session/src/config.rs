// Copyright 2026 the Osier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;

/// Construction-time options for a [`StickSession`](crate::StickSession).
///
/// `size`, `throttle_ms`, and `disabled` drive the session itself. The two
/// colors are carried for the visual layer and never read by the session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StickConfig {
    /// Control diameter in layout units. The session's clamp radius is half
    /// of this.
    pub size: f64,
    /// Fill color of the control's base circle. Pass-through for renderers.
    pub base_color: Color,
    /// Fill color of the movable stick. Pass-through for renderers.
    pub stick_color: Color,
    /// Minimum milliseconds between two delivered move updates. Zero
    /// delivers every move.
    pub throttle_ms: u64,
    /// While `true`, press samples are ignored and no session starts.
    pub disabled: bool,
}

impl Default for StickConfig {
    fn default() -> Self {
        Self {
            size: 100.0,
            base_color: Color::from_rgb8(0x00, 0x00, 0x33),
            stick_color: Color::from_rgb8(0x3d, 0x59, 0xab),
            throttle_ms: 0,
            disabled: false,
        }
    }
}
