//! Tap / double-tap disambiguation.

use web_time::{Duration, Instant};

/// What a completed tap turns into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TapOutcome {
    /// Deliver `Activate` now.
    Activate,
    /// Held back until `deadline` waiting for a second tap.
    Deferred { deadline: Instant },
    /// Second tap inside the window.
    DoubleActivate,
}

/// Tracks the tap awaiting a possible second tap.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TapTracker {
    window: Option<Duration>,
    pending: Option<(u64, Instant)>,
}

impl TapTracker {
    pub fn new(window: Option<Duration>) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    /// Registers a tap released at `now` by gesture `gesture`. A window that
    /// would run past the clock's range activates at once.
    pub fn register(&mut self, gesture: u64, now: Instant) -> TapOutcome {
        let Some(window) = self.window else {
            return TapOutcome::Activate;
        };
        match self.pending.take() {
            Some((_, deadline)) if now <= deadline => TapOutcome::DoubleActivate,
            _ => match now.checked_add(window) {
                Some(deadline) => {
                    self.pending = Some((gesture, deadline));
                    TapOutcome::Deferred { deadline }
                }
                None => TapOutcome::Activate,
            },
        }
    }

    /// Gesture id and deadline of the deferred tap, if any.
    pub fn pending(&self) -> Option<(u64, Instant)> {
        self.pending
    }

    /// Drops the deferred tap of `gesture` once its window has lapsed.
    /// Returns `true` when that tap should now be delivered as `Activate`.
    pub fn expire(&mut self, gesture: u64, now: Instant) -> bool {
        match self.pending {
            Some((pending, deadline)) if pending == gesture && deadline <= now => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    /// Forgets the deferred tap without delivering it.
    pub fn reset(&mut self) {
        self.pending = None;
    }
}
