// Copyright 2026 the Osier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Vec2};
use osier_vector::{StickFrame, StickVector};

use crate::config::StickConfig;
use crate::events::StickEvent;
use crate::gate::ThrottleGate;

/// Drag-session state machine for one stick control.
///
/// A session is idle until a press captures a [`StickFrame`]; it then
/// resolves every move sample against that same frame until release, so a
/// control that the host moves mid-drag does not shift the stick under the
/// pointer. Within a session the start event precedes every move and the
/// stop event follows the last one; no move can be produced while idle.
///
/// The caller owns delivery. Each entry point returns the event to forward,
/// if any, and [`emit`](crate::emit) routes it to an
/// [`UpdateSink`](crate::UpdateSink).
///
/// ## Usage
///
/// 1) Deliver a press with the control's bounding box via [`Self::on_press`].
/// 2) Deliver absolute pointer positions with timestamps via [`Self::on_move`].
/// 3) Deliver the terminating release via [`Self::on_release`].
/// 4) Render from [`Self::snapshot`] at whatever cadence suits the host.
#[derive(Clone, Copy, Debug)]
pub struct StickSession {
    config: StickConfig,
    gate: ThrottleGate,
    frame: Option<StickFrame>,
    last_vector: Option<StickVector>,
}

impl StickSession {
    /// Creates an idle session with the given options.
    #[must_use]
    pub fn new(config: StickConfig) -> Self {
        Self {
            config,
            gate: ThrottleGate::new(config.throttle_ms),
            frame: None,
            last_vector: None,
        }
    }

    /// Returns the session's options.
    #[must_use]
    pub fn config(&self) -> &StickConfig {
        &self.config
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.frame.is_some()
    }

    /// Returns the frame captured by the current session, if dragging.
    #[must_use]
    pub fn frame(&self) -> Option<StickFrame> {
        self.frame
    }

    /// Returns the most recently resolved vector of the current session.
    ///
    /// Refreshed on every move sample, including ones the throttle gate
    /// suppresses, and cleared on release.
    #[must_use]
    pub fn last_vector(&self) -> Option<StickVector> {
        self.last_vector
    }

    /// Handles a press sample carrying the control's current bounding box.
    ///
    /// Captures the session frame from the box's corner and half the
    /// configured size, resets the throttle gate, and returns the start
    /// event. Returns `None` while disabled, and for re-entrant presses
    /// mid-drag, which leave the original frame untouched.
    pub fn on_press(&mut self, bounds: Rect) -> Option<StickEvent> {
        if self.config.disabled || self.frame.is_some() {
            return None;
        }
        self.frame = Some(StickFrame::new(bounds.origin(), 0.5 * self.config.size));
        self.gate.reset();
        Some(StickEvent::Start)
    }

    /// Handles a move sample while dragging.
    ///
    /// Resolves the pointer against the captured frame and refreshes
    /// [`Self::last_vector`] unconditionally. Returns `None` while idle and
    /// for samples the throttle gate suppresses; suppressed samples still
    /// refresh the cached vector.
    pub fn on_move(&mut self, pointer: Point, now_ms: u64) -> Option<StickEvent> {
        let frame = self.frame?;
        let vector = frame.resolve(pointer);
        self.last_vector = Some(vector);
        if !self.gate.admit(now_ms) {
            return None;
        }
        Some(StickEvent::Move {
            output: Vec2::new(vector.offset.x, -vector.offset.y),
            direction: vector.direction(),
        })
    }

    /// Handles the release sample terminating the session.
    ///
    /// Clears the frame and the cached vector, then returns the stop event,
    /// which never passes through the throttle gate. Returns `None` when no
    /// session was in progress.
    pub fn on_release(&mut self) -> Option<StickEvent> {
        self.frame.take()?;
        self.last_vector = None;
        Some(StickEvent::Stop)
    }

    /// Abandons an in-progress drag without a release sample.
    ///
    /// For hosts that lose pointer capture. Consumers still observe an
    /// ordinary stop event, so the stick reads neutral afterwards.
    pub fn cancel(&mut self) -> Option<StickEvent> {
        self.on_release()
    }

    /// Toggles the disabled flag.
    ///
    /// Disabling mid-drag force-stops the session immediately; the returned
    /// stop event must still reach consumers. Enabling never produces an
    /// event.
    pub fn set_disabled(&mut self, disabled: bool) -> Option<StickEvent> {
        self.config.disabled = disabled;
        if disabled { self.on_release() } else { None }
    }

    /// Plain-data view of the session for renderers.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            dragging: self.is_dragging(),
            vector: self.last_vector,
        }
    }
}

impl Default for StickSession {
    fn default() -> Self {
        Self::new(StickConfig::default())
    }
}

/// Plain-data view of a session for renderers.
///
/// Carries what the visual layer needs: whether styling should show a drag
/// in progress, and the vector to draw the stick at. A present vector
/// implies `dragging`; a fresh session has none until its first move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionSnapshot {
    /// `true` while a drag is in progress.
    pub dragging: bool,
    /// Most recently resolved vector. Absent while idle and before the
    /// first move of a session.
    pub vector: Option<StickVector>,
}
