//! Haptic and audio feedback collaborators.
//!
//! The core only signals *when* feedback should happen. Vibration and click
//! playback belong to the platform, which may not support either; every
//! method therefore has a no-op default and never reports failure.

use std::rc::Rc;

/// Intensity or pattern of a haptic pulse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HapticStyle {
    Light,
    Medium,
    Heavy,
}

impl HapticStyle {
    /// Vibration pattern in milliseconds, alternating on/off.
    pub fn vibration_pattern(self) -> &'static [u32] {
        match self {
            HapticStyle::Light => &[10],
            HapticStyle::Medium => &[20],
            HapticStyle::Heavy => &[30],
        }
    }
}

/// Fire-and-forget feedback sink.
///
/// Implementations must tolerate rapid repeated calls (overlapping click
/// playback) and must not panic when the platform lacks the capability.
pub trait Feedback {
    fn haptic(&self, _style: HapticStyle) {}

    fn play_click(&self) {}
}

/// Feedback sink for platforms without vibration or audio.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopFeedback;

impl Feedback for NoopFeedback {}

impl<F: Feedback + ?Sized> Feedback for Rc<F> {
    fn haptic(&self, style: HapticStyle) {
        (**self).haptic(style)
    }

    fn play_click(&self) {
        (**self).play_click()
    }
}
