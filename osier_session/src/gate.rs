// Copyright 2026 the Osier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Wall-clock rate limiter for move updates.
///
/// One gate guards one session's move channel; start and stop events never
/// pass through it. Timestamps are supplied by the caller in milliseconds,
/// so suppression is fully deterministic under test and the gate stays
/// `no_std`.
///
/// ```rust
/// use osier_session::ThrottleGate;
///
/// let mut gate = ThrottleGate::new(100);
/// assert!(gate.admit(0));
/// assert!(!gate.admit(50));
/// assert!(gate.admit(110));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct ThrottleGate {
    window_ms: u64,
    last_admit_ms: Option<u64>,
}

impl ThrottleGate {
    /// Creates a gate with the given suppression window.
    ///
    /// A zero window admits every candidate. A fresh gate has never
    /// admitted, so its first candidate always passes regardless of its
    /// timestamp.
    #[must_use]
    pub const fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            last_admit_ms: None,
        }
    }

    /// Decides one candidate move update.
    ///
    /// Admits when the gate has never admitted before, or when at least the
    /// configured window has elapsed since the last admission. Suppressed
    /// candidates leave the gate untouched, so a burst of samples delivers
    /// its first and then one per window. A timestamp behind the last
    /// admission counts as zero elapsed time.
    pub fn admit(&mut self, now_ms: u64) -> bool {
        if let Some(last) = self.last_admit_ms {
            let elapsed = now_ms.saturating_sub(last);
            if self.window_ms > 0 && elapsed < self.window_ms {
                return false;
            }
        }
        self.last_admit_ms = Some(now_ms);
        true
    }

    /// Returns the suppression window in milliseconds.
    #[must_use]
    pub fn window_ms(&self) -> u64 {
        self.window_ms
    }

    /// Forgets the last admission, so the next candidate passes untimed.
    pub fn reset(&mut self) {
        self.last_admit_ms = None;
    }
}
