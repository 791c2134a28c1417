//! Foundation for the nubos phone shell: pointer input, the nub gesture
//! recognizer and the feedback collaborator hooks.

pub mod feedback;
pub mod gesture_constants;
pub mod input;

#[cfg(test)]
mod tests;

pub use feedback::{Feedback, HapticStyle, NoopFeedback};
pub use input::{
    ConfigError, Direction, GestureConfig, GestureRecognizer, GestureState, Intents,
    NavigationIntent, PointerEvent, PointerEventKind, PointerOrigin, PointerSample, TimerKind,
    TimerToken,
};

pub mod prelude {
    pub use crate::feedback::{Feedback, HapticStyle, NoopFeedback};
    pub use crate::gesture_constants::*;
    pub use crate::input::prelude::*;
}
