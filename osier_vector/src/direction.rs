// Copyright 2026 the Osier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Vec2;

/// Heading of the diagonals separating [`Direction::Forward`] from the side
/// bands, in radians (135 degrees; the negative mirror bounds the other side).
pub const UPPER_DIAGONAL: f64 = 2.356_194_49;

/// Heading of the diagonals separating the side bands from
/// [`Direction::Backward`], in radians (45 degrees).
pub const LOWER_DIAGONAL: f64 = 0.785_398_163;

/// Coarse direction band of a stick offset.
///
/// The clamp circle splits along its diagonals into four quarter-turn bands.
/// Offsets are read in screen coordinates, positive `y` down:
///
/// - [`Forward`](Self::Forward): up the screen, away from the user.
/// - [`Right`](Self::Right): toward positive `x`.
/// - [`Left`](Self::Left): toward negative `x`.
/// - [`Backward`](Self::Backward): down the screen, toward the user.
///
/// ```rust
/// use kurbo::Vec2;
/// use osier_vector::Direction;
///
/// assert_eq!(Direction::from_offset(Vec2::new(0.0, -10.0)), Direction::Forward);
/// assert_eq!(Direction::from_offset(Vec2::new(10.0, 0.0)), Direction::Right);
/// assert_eq!(Direction::from_offset(Vec2::new(-10.0, 0.0)), Direction::Left);
/// assert_eq!(Direction::from_offset(Vec2::new(0.0, 10.0)), Direction::Backward);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// The offset points up the screen.
    Forward,
    /// The offset points toward positive `x`.
    Right,
    /// The offset points toward negative `x`.
    Left,
    /// The offset points down the screen.
    Backward,
}

impl Direction {
    /// Classifies a heading angle in radians, as produced by [`heading`].
    ///
    /// Exact diagonal headings resolve by branch order rather than by any
    /// symmetric rounding: [`UPPER_DIAGONAL`] and [`LOWER_DIAGONAL`] both
    /// classify as [`Self::Right`], while `-LOWER_DIAGONAL` falls through to
    /// [`Self::Backward`] and `-UPPER_DIAGONAL` to [`Self::Left`].
    #[must_use]
    pub fn from_angle(angle: f64) -> Self {
        if angle > UPPER_DIAGONAL || angle < -UPPER_DIAGONAL {
            Self::Forward
        } else if angle >= LOWER_DIAGONAL {
            Self::Right
        } else if angle < -LOWER_DIAGONAL {
            Self::Left
        } else {
            Self::Backward
        }
    }

    /// Classifies a screen-space center offset.
    ///
    /// The zero offset has heading zero and classifies as
    /// [`Self::Backward`].
    #[must_use]
    pub fn from_offset(offset: Vec2) -> Self {
        Self::from_angle(heading(offset))
    }
}

/// Heading of a screen-space offset in radians.
///
/// Zero points straight down the screen, the angle grows toward positive
/// `x`, and straight up is the pair of extremes around plus or minus pi.
/// This is `atan2` with swapped arguments; the diagonal constants in this
/// module are calibrated against exactly this convention, so do not swap the
/// arguments back without re-deriving them.
#[must_use]
pub fn heading(offset: Vec2) -> f64 {
    offset.x.atan2(offset.y)
}
