use nubos_ui::AppSlot;
use web_time::Instant;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionKind {
    Opening,
    Closing,
}

/// An app open or close animation in flight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub kind: TransitionKind,
    pub slot: AppSlot,
    pub deadline: Instant,
}

impl Transition {
    pub fn is_finished(&self, now: Instant) -> bool {
        now >= self.deadline
    }
}
