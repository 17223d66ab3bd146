// Copyright 2026 the Osier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use crate::events::StickEvent;

/// Consumer notification channels for session updates.
///
/// The three channels mirror the three [`StickEvent`] variants and all carry
/// the same event shape. Default bodies do nothing, so implementors opt into
/// only the channels they care about; `()` is the sink that ignores
/// everything.
///
/// Channels are invoked at most once per matching session transition. There
/// is no buffering: an update delivered while a channel is unimplemented is
/// simply gone.
pub trait UpdateSink {
    /// Receives the start event of each session.
    fn on_start(&mut self, event: &StickEvent) {
        let _ = event;
    }

    /// Receives the move events the session's throttle gate admits.
    fn on_move(&mut self, event: &StickEvent) {
        let _ = event;
    }

    /// Receives the stop event of each session.
    fn on_stop(&mut self, event: &StickEvent) {
        let _ = event;
    }
}

impl UpdateSink for () {}

/// An [`UpdateSink`] assembled from up to three closures.
///
/// Each `with_*` call fills one channel; channels left unfilled stay silent,
/// matching the trait's default bodies. Handy when a consumer wants a couple
/// of callbacks without naming a sink type:
///
/// ```rust
/// use kurbo::Vec2;
/// use osier_session::{FnSink, StickEvent, emit};
/// use osier_vector::Direction;
///
/// let mut swings = Vec::new();
/// let mut sink = FnSink::new().with_move(|event| swings.extend(event.direction()));
///
/// emit(&mut sink, &StickEvent::Start);
/// emit(
///     &mut sink,
///     &StickEvent::Move {
///         output: Vec2::new(30.0, 20.0),
///         direction: Direction::Right,
///     },
/// );
/// emit(&mut sink, &StickEvent::Stop);
///
/// assert_eq!(swings, [Direction::Right]);
/// ```
pub struct FnSink<A = fn(&StickEvent), B = fn(&StickEvent), C = fn(&StickEvent)> {
    on_start: Option<A>,
    on_move: Option<B>,
    on_stop: Option<C>,
}

impl FnSink {
    /// Creates a sink with every channel empty.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            on_start: None,
            on_move: None,
            on_stop: None,
        }
    }
}

impl Default for FnSink {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, B, C> FnSink<A, B, C> {
    /// Returns the sink with its start channel filled by `f`.
    #[must_use]
    pub fn with_start<F: FnMut(&StickEvent)>(self, f: F) -> FnSink<F, B, C> {
        FnSink {
            on_start: Some(f),
            on_move: self.on_move,
            on_stop: self.on_stop,
        }
    }

    /// Returns the sink with its move channel filled by `f`.
    #[must_use]
    pub fn with_move<F: FnMut(&StickEvent)>(self, f: F) -> FnSink<A, F, C> {
        FnSink {
            on_start: self.on_start,
            on_move: Some(f),
            on_stop: self.on_stop,
        }
    }

    /// Returns the sink with its stop channel filled by `f`.
    #[must_use]
    pub fn with_stop<F: FnMut(&StickEvent)>(self, f: F) -> FnSink<A, B, F> {
        FnSink {
            on_start: self.on_start,
            on_move: self.on_move,
            on_stop: Some(f),
        }
    }
}

impl<A, B, C> fmt::Debug for FnSink<A, B, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnSink")
            .field("on_start", &self.on_start.is_some())
            .field("on_move", &self.on_move.is_some())
            .field("on_stop", &self.on_stop.is_some())
            .finish()
    }
}

impl<A, B, C> UpdateSink for FnSink<A, B, C>
where
    A: FnMut(&StickEvent),
    B: FnMut(&StickEvent),
    C: FnMut(&StickEvent),
{
    fn on_start(&mut self, event: &StickEvent) {
        if let Some(f) = &mut self.on_start {
            f(event);
        }
    }

    fn on_move(&mut self, event: &StickEvent) {
        if let Some(f) = &mut self.on_move {
            f(event);
        }
    }

    fn on_stop(&mut self, event: &StickEvent) {
        if let Some(f) = &mut self.on_stop {
            f(event);
        }
    }
}

/// Routes an event to the sink channel matching its variant.
///
/// Pairs with the session entry points, which return the event to deliver:
///
/// ```rust
/// use kurbo::{Point, Rect};
/// use osier_session::{StickConfig, StickEvent, StickSession, UpdateSink, emit};
///
/// #[derive(Default)]
/// struct Counts {
///     starts: u32,
///     moves: u32,
///     stops: u32,
/// }
///
/// impl UpdateSink for Counts {
///     fn on_start(&mut self, _event: &StickEvent) {
///         self.starts += 1;
///     }
///     fn on_move(&mut self, _event: &StickEvent) {
///         self.moves += 1;
///     }
///     fn on_stop(&mut self, _event: &StickEvent) {
///         self.stops += 1;
///     }
/// }
///
/// let mut session = StickSession::new(StickConfig::default());
/// let mut counts = Counts::default();
///
/// for event in [
///     session.on_press(Rect::new(0.0, 0.0, 100.0, 100.0)),
///     session.on_move(Point::new(80.0, 30.0), 0),
///     session.on_release(),
/// ]
/// .into_iter()
/// .flatten()
/// {
///     emit(&mut counts, &event);
/// }
///
/// assert_eq!(counts.starts, 1);
/// assert_eq!(counts.moves, 1);
/// assert_eq!(counts.stops, 1);
/// ```
pub fn emit(sink: &mut impl UpdateSink, event: &StickEvent) {
    match event {
        StickEvent::Start => sink.on_start(event),
        StickEvent::Move { .. } => sink.on_move(event),
        StickEvent::Stop => sink.on_stop(event),
    }
}
