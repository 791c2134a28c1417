use nubos_foundation::{Feedback, HapticStyle};
use std::cell::{Cell, RefCell};

/// Feedback sink that records every signal for later assertions.
#[derive(Debug, Default)]
pub struct RecordingFeedback {
    haptics: RefCell<Vec<HapticStyle>>,
    clicks: Cell<usize>,
}

impl RecordingFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn haptics(&self) -> Vec<HapticStyle> {
        self.haptics.borrow().clone()
    }

    pub fn clicks(&self) -> usize {
        self.clicks.get()
    }

    pub fn clear(&self) {
        self.haptics.borrow_mut().clear();
        self.clicks.set(0);
    }
}

impl Feedback for RecordingFeedback {
    fn haptic(&self, style: HapticStyle) {
        self.haptics.borrow_mut().push(style);
    }

    fn play_click(&self) {
        self.clicks.set(self.clicks.get() + 1);
    }
}
