// Copyright 2026 the Osier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};

use crate::surface::SampleMask;

/// The device class a sample came from.
///
/// Hosts that merge mouse and touch streams tag each sample. The binding
/// treats both classes identically; the tag exists for host-side filtering
/// and diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerSource {
    /// A pointing device such as a mouse or trackpad.
    Mouse,
    /// A touch contact. Feed only the primary contact; see
    /// [`primary_touch`].
    Touch,
}

/// A press sample opening a session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PressSample {
    /// The control's current bounding box in host-surface coordinates.
    pub bounds: Rect,
    /// Absolute pointer position at the press. Not used for geometry; the
    /// first move sample establishes the stick offset.
    pub pos: Point,
    /// Sample time in milliseconds on the host's clock.
    pub timestamp_ms: u64,
    /// Which device class produced the sample.
    pub source: PointerSource,
}

/// A move sample streamed while a session is active.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoveSample {
    /// Absolute pointer position in host-surface coordinates.
    pub pos: Point,
    /// Sample time in milliseconds on the host's clock. Feeds the session's
    /// throttle gate.
    pub timestamp_ms: u64,
    /// Which device class produced the sample.
    pub source: PointerSource,
}

/// The release sample terminating a session.
///
/// Carries no position: touch streams end without one, and the session
/// discards all geometry at stop anyway.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ReleaseSample {
    /// Sample time in milliseconds on the host's clock.
    pub timestamp_ms: u64,
    /// Which device class produced the sample.
    pub source: PointerSource,
}

/// Any sample a host surface can deliver to a binding.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SurfaceSample {
    /// A press opening a session.
    Press(PressSample),
    /// A pointer move while a session is active.
    Move(MoveSample),
    /// The release terminating a session.
    Release(ReleaseSample),
}

impl SurfaceSample {
    /// The mask bit for this sample's kind.
    ///
    /// Hosts use this to check a sample against the currently registered
    /// interest before delivering it.
    #[must_use]
    pub fn mask(&self) -> SampleMask {
        match self {
            Self::Press(_) => SampleMask::PRESS,
            Self::Move(_) => SampleMask::MOVE,
            Self::Release(_) => SampleMask::RELEASE,
        }
    }
}

/// Selects the primary contact from a touch list.
///
/// A virtual stick is a single-touch control: the first contact drives the
/// session and every later contact is ignored. Returns `None` for an empty
/// list, which hosts should treat as "no sample".
#[must_use]
pub fn primary_touch(touches: &[Point]) -> Option<Point> {
    touches.first().copied()
}
