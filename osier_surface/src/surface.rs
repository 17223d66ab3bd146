// Copyright 2026 the Osier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

bitflags::bitflags! {
    /// Sample kinds a binding can register interest in.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct SampleMask: u8 {
        /// Press samples opening a session.
        const PRESS   = 0b0000_0001;
        /// Move samples streamed while a session is active.
        const MOVE    = 0b0000_0010;
        /// The release sample terminating a session.
        const RELEASE = 0b0000_0100;
    }
}

/// Host-side pointer capture that a binding registers interest with.
///
/// The binding asks for press samples up front, adds move and release
/// interest while a session runs, and drops it again at stop. This
/// registration traffic is the binding's only side effect on the host.
///
/// Hosts that deliver every sample unconditionally can pass `()`, the
/// surface that ignores registration.
pub trait InputSurface {
    /// Requests delivery of the sample kinds in `mask`, in addition to any
    /// kinds already requested.
    fn subscribe(&mut self, mask: SampleMask);

    /// Stops delivery of the sample kinds in `mask`.
    fn unsubscribe(&mut self, mask: SampleMask);
}

impl InputSurface for () {
    fn subscribe(&mut self, _mask: SampleMask) {}

    fn unsubscribe(&mut self, _mask: SampleMask) {}
}
