pub mod direction;
pub mod gestures;
pub mod intent;
pub mod types;

pub use direction::Direction;
pub use gestures::{
    ConfigError, GestureConfig, GestureRecognizer, GestureState, TapOutcome, TapTracker,
    TimerKind, TimerToken, MAX_GESTURE_DELAY,
};
pub use intent::{Intents, NavigationIntent};
pub use types::{PointerEvent, PointerEventKind, PointerOrigin, PointerSample};

pub mod prelude {
    pub use super::direction::Direction;
    pub use super::gestures::{GestureConfig, GestureRecognizer, GestureState};
    pub use super::intent::{Intents, NavigationIntent};
    pub use super::types::{PointerEvent, PointerEventKind, PointerOrigin, PointerSample};
}
