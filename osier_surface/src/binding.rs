// Copyright 2026 the Osier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use osier_session::{StickConfig, StickSession, UpdateSink, emit};

use crate::sample::SurfaceSample;
use crate::surface::{InputSurface, SampleMask};

/// Glue between a host input surface and one stick session.
///
/// The binding owns the session, keeps surface registration in step with
/// the session's lifecycle, and forwards produced events to the caller's
/// sink:
///
/// - Construction subscribes to press samples.
/// - A press that starts a session adds move and release interest.
/// - A stop of any kind (release, cancel, disable mid-drag) removes it.
/// - [`StickBinding::detach`] removes everything for teardown.
#[derive(Clone, Debug)]
pub struct StickBinding {
    session: StickSession,
}

impl StickBinding {
    /// Creates a binding and registers press interest with the surface.
    #[must_use]
    pub fn new(config: StickConfig, surface: &mut impl InputSurface) -> Self {
        surface.subscribe(SampleMask::PRESS);
        Self {
            session: StickSession::new(config),
        }
    }

    /// Returns the owned session, for snapshots and state queries.
    #[must_use]
    pub fn session(&self) -> &StickSession {
        &self.session
    }

    /// Handles one sample from the surface.
    ///
    /// Routes the sample into the session, adjusts surface registration on
    /// session start and stop, and emits the produced event, if any, into
    /// `sink`. Returns `true` when an event was delivered; `false` covers
    /// ignored samples (idle moves, re-entrant or disabled presses) and
    /// throttle-suppressed moves.
    pub fn handle(
        &mut self,
        sample: &SurfaceSample,
        surface: &mut impl InputSurface,
        sink: &mut impl UpdateSink,
    ) -> bool {
        let event = match sample {
            SurfaceSample::Press(press) => {
                let event = self.session.on_press(press.bounds);
                if event.is_some() {
                    surface.subscribe(SampleMask::MOVE | SampleMask::RELEASE);
                }
                event
            }
            SurfaceSample::Move(mv) => self.session.on_move(mv.pos, mv.timestamp_ms),
            SurfaceSample::Release(_) => {
                let event = self.session.on_release();
                if event.is_some() {
                    surface.unsubscribe(SampleMask::MOVE | SampleMask::RELEASE);
                }
                event
            }
        };
        match event {
            Some(event) => {
                emit(sink, &event);
                true
            }
            None => false,
        }
    }

    /// Abandons any drag in progress, as on lost pointer capture.
    ///
    /// Drops move and release interest and delivers the final stop event.
    pub fn cancel(&mut self, surface: &mut impl InputSurface, sink: &mut impl UpdateSink) {
        if let Some(event) = self.session.cancel() {
            surface.unsubscribe(SampleMask::MOVE | SampleMask::RELEASE);
            emit(sink, &event);
        }
    }

    /// Toggles the session's disabled flag.
    ///
    /// Disabling mid-drag stops the session: registration drops back to
    /// press interest only and the final stop event reaches the sink.
    pub fn set_disabled(
        &mut self,
        disabled: bool,
        surface: &mut impl InputSurface,
        sink: &mut impl UpdateSink,
    ) {
        if let Some(event) = self.session.set_disabled(disabled) {
            surface.unsubscribe(SampleMask::MOVE | SampleMask::RELEASE);
            emit(sink, &event);
        }
    }

    /// Removes all surface registration for teardown.
    ///
    /// Cancels a drag in progress first, so consumers observe a final stop
    /// before the binding goes quiet.
    pub fn detach(&mut self, surface: &mut impl InputSurface, sink: &mut impl UpdateSink) {
        self.cancel(surface, sink);
        surface.unsubscribe(SampleMask::PRESS);
    }
}
