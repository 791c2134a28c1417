//! Shared gesture constants for nub input handling.
//!
//! All distances are device pixels relative to the input surface, all
//! durations are wall-clock milliseconds. `GestureConfig::default()` is built
//! from these values; hosts override them per device through the config.

/// Displacement from the press point at which a gesture becomes a swipe.
///
/// Crossing it fires exactly one directional intent and rules out cursor
/// mode for the rest of the gesture.
pub const SWIPE_THRESHOLD: f32 = 15.0;

/// Movement tolerated during a long-press dwell.
///
/// Anything beyond this disarms the long-press timer for the remainder of
/// the gesture.
pub const JITTER_TOLERANCE: f32 = 5.0;

/// Delay after which a still-idle press turns into cursor mode.
pub const HOLD_DELAY_MS: u64 = 150;

/// Delay after which a motionless press becomes a long-press.
pub const LONG_PRESS_DELAY_MS: u64 = 3_000;

/// Scale applied to raw pointer deltas while in cursor mode.
pub const CURSOR_SENSITIVITY: f32 = 0.5;

/// Maximum travel of the rendered nub away from its rest position.
pub const NUB_MAX_OFFSET: f32 = 25.0;

/// Window in which a second tap counts as a double-tap.
pub const DOUBLE_TAP_WINDOW_MS: u64 = 300;

/// Minimum interval between two accepted directional intents.
///
/// Applied by consumers, not by the recognizer.
pub const NAVIGATION_COOLDOWN_MS: u64 = 200;
