use super::Direction;
use nubos_ui_graphics::Point;
use smallvec::SmallVec;

/// Discrete output of the gesture recognizer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavigationIntent {
    /// One directional step. Fired at most once per gesture.
    Direction(Direction),
    /// Scaled pointer delta while in cursor mode.
    ///
    /// Consumers treat the stream as latest-wins state updates.
    CursorDelta { x: f32, y: f32 },
    /// Tap.
    Activate,
    /// Two taps inside the double-tap window.
    DoubleActivate,
    /// Motionless hold past the long-press delay.
    LongPressed,
}

impl NavigationIntent {
    pub fn cursor_delta(delta: Point) -> Self {
        NavigationIntent::CursorDelta {
            x: delta.x,
            y: delta.y,
        }
    }

    pub fn direction(&self) -> Option<Direction> {
        match self {
            NavigationIntent::Direction(direction) => Some(*direction),
            _ => None,
        }
    }
}

/// Intents produced by a single input event or timer tick.
///
/// Rarely more than one; double-tap detection can flush a deferred tap
/// alongside a new one.
pub type Intents = SmallVec<[NavigationIntent; 2]>;
