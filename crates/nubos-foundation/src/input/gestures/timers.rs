//! Deadline bookkeeping for the recognizer's cancellable waits.
//!
//! Nothing here sleeps. The host polls `next_deadline()` for `WaitUntil`
//! scheduling and calls back into the recognizer when it passes.

use smallvec::SmallVec;
use web_time::Instant;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Idle press → cursor mode.
    Hold,
    /// Motionless press → long-press.
    LongPress,
    /// Deferred tap → activate.
    DoubleTap,
}

impl TimerKind {
    const COUNT: usize = 3;

    fn slot(self) -> usize {
        match self {
            TimerKind::Hold => 0,
            TimerKind::LongPress => 1,
            TimerKind::DoubleTap => 2,
        }
    }
}

/// Identifies one armed timer of one gesture.
///
/// A token outlives its gesture; firing it afterwards is a no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerToken {
    pub gesture: u64,
    pub kind: TimerKind,
}

#[derive(Clone, Debug, Default)]
pub(crate) struct GestureTimers {
    slots: [Option<(TimerToken, Instant)>; TimerKind::COUNT],
}

impl GestureTimers {
    pub(crate) fn arm(&mut self, token: TimerToken, deadline: Instant) {
        self.slots[token.kind.slot()] = Some((token, deadline));
    }

    pub(crate) fn cancel(&mut self, kind: TimerKind) {
        self.slots[kind.slot()] = None;
    }

    pub(crate) fn is_armed(&self, kind: TimerKind) -> bool {
        self.slots[kind.slot()].is_some()
    }

    /// Disarms `token` if it is still the armed timer of its kind and its
    /// deadline has passed. Returns whether the caller should act on it.
    pub(crate) fn take_due(&mut self, token: TimerToken, now: Instant) -> bool {
        let slot = &mut self.slots[token.kind.slot()];
        match *slot {
            Some((armed, deadline)) if armed == token && deadline <= now => {
                *slot = None;
                true
            }
            _ => false,
        }
    }

    pub(crate) fn next_deadline(&self) -> Option<Instant> {
        self.slots
            .iter()
            .flatten()
            .map(|(_, deadline)| *deadline)
            .min()
    }

    /// Armed timers ordered by deadline.
    pub(crate) fn pending(&self) -> SmallVec<[(TimerToken, Instant); 3]> {
        let mut pending: SmallVec<[(TimerToken, Instant); 3]> =
            self.slots.iter().flatten().copied().collect();
        pending.sort_by_key(|(_, deadline)| *deadline);
        pending
    }

    /// Armed timers whose deadline is at or before `now`, earliest first.
    pub(crate) fn due(&self, now: Instant) -> SmallVec<[(TimerToken, Instant); 3]> {
        let mut due = self.pending();
        due.retain(|(_, deadline)| *deadline <= now);
        due
    }
}
