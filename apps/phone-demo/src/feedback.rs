use nubos_foundation::{Feedback, HapticStyle};
use std::cell::Cell;

/// Feedback sink that reports vibration and clicks to the log.
#[derive(Debug, Default)]
pub struct LogFeedback {
    pulses: Cell<usize>,
    clicks: Cell<usize>,
}

impl LogFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pulses(&self) -> usize {
        self.pulses.get()
    }

    pub fn clicks(&self) -> usize {
        self.clicks.get()
    }
}

impl Feedback for LogFeedback {
    fn haptic(&self, style: HapticStyle) {
        self.pulses.set(self.pulses.get() + 1);
        log::debug!("haptic {style:?} {:?}", style.vibration_pattern());
    }

    fn play_click(&self) {
        self.clicks.set(self.clicks.get() + 1);
        log::trace!("click");
    }
}
