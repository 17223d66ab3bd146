// Copyright 2026 the Osier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;
use osier_vector::Direction;

/// A normalized update emitted by a session.
///
/// All three consumer channels carry this one shape. Only
/// [`Move`](Self::Move) events know any geometry; the accessors return
/// `None` on the other variants, so consumers reading `x`/`y`/`direction`
/// uniformly see "nothing" at the edges of a session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StickEvent {
    /// A session began. No geometry is known yet.
    Start,
    /// The pointer moved while dragging.
    Move {
        /// Clamped center offset with `y` flipped to point up the screen,
        /// so dragging away from the user reads positive.
        output: Vec2,
        /// Direction band of the screen-space offset.
        direction: Direction,
    },
    /// The session ended; its cached geometry has been discarded.
    Stop,
}

impl StickEvent {
    /// The emitted `x` value. `None` unless this is a move event.
    #[must_use]
    pub fn x(&self) -> Option<f64> {
        match self {
            Self::Move { output, .. } => Some(output.x),
            _ => None,
        }
    }

    /// The emitted `y` value, positive up the screen. `None` unless this is
    /// a move event.
    #[must_use]
    pub fn y(&self) -> Option<f64> {
        match self {
            Self::Move { output, .. } => Some(output.y),
            _ => None,
        }
    }

    /// The direction band. `None` unless this is a move event.
    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Self::Move { direction, .. } => Some(*direction),
            _ => None,
        }
    }
}
