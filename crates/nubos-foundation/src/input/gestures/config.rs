use crate::gesture_constants::{
    CURSOR_SENSITIVITY, HOLD_DELAY_MS, JITTER_TOLERANCE, LONG_PRESS_DELAY_MS, NUB_MAX_OFFSET,
    SWIPE_THRESHOLD,
};
use std::fmt;
use web_time::Duration;

/// Longest hold, long-press or double-tap delay `validate` accepts.
pub const MAX_GESTURE_DELAY: Duration = Duration::from_secs(60);

/// Thresholds and delays for the gesture recognizer.
///
/// Double-tap detection is off by default. With a window set, every single
/// tap is held back for the full window before it activates, which makes
/// plain selection feel laggy. Hosts that want flip-by-double-tap opt in
/// with a window of [`DOUBLE_TAP_WINDOW_MS`].
///
/// [`DOUBLE_TAP_WINDOW_MS`]: crate::gesture_constants::DOUBLE_TAP_WINDOW_MS
#[derive(Clone, Debug, PartialEq)]
pub struct GestureConfig {
    /// Displacement that turns an idle press into a swipe.
    pub swipe_threshold: f32,
    /// Movement allowed while a long-press is still possible.
    pub jitter_tolerance: f32,
    /// Press duration after which an idle press enters cursor mode.
    pub hold_delay: Duration,
    /// Press duration after which a motionless press becomes a long-press.
    pub long_press_delay: Duration,
    /// Scale applied to pointer deltas in cursor mode.
    pub cursor_sensitivity: f32,
    /// Clamp radius of the rendered nub offset.
    pub nub_max_offset: f32,
    /// When set, taps are held back for this long to detect a second tap.
    pub double_tap_window: Option<Duration>,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: SWIPE_THRESHOLD,
            jitter_tolerance: JITTER_TOLERANCE,
            hold_delay: Duration::from_millis(HOLD_DELAY_MS),
            long_press_delay: Duration::from_millis(LONG_PRESS_DELAY_MS),
            cursor_sensitivity: CURSOR_SENSITIVITY,
            nub_max_offset: NUB_MAX_OFFSET,
            double_tap_window: None,
        }
    }
}

impl GestureConfig {
    pub fn with_swipe_threshold(mut self, threshold: f32) -> Self {
        self.swipe_threshold = threshold;
        self
    }

    pub fn with_jitter_tolerance(mut self, tolerance: f32) -> Self {
        self.jitter_tolerance = tolerance;
        self
    }

    pub fn with_hold_delay(mut self, delay: Duration) -> Self {
        self.hold_delay = delay;
        self
    }

    pub fn with_long_press_delay(mut self, delay: Duration) -> Self {
        self.long_press_delay = delay;
        self
    }

    pub fn with_cursor_sensitivity(mut self, sensitivity: f32) -> Self {
        self.cursor_sensitivity = sensitivity;
        self
    }

    pub fn with_double_tap_window(mut self, window: Option<Duration>) -> Self {
        self.double_tap_window = window;
        self
    }

    /// Checks that the thresholds describe a usable state machine.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("swipe_threshold", self.swipe_threshold),
            ("cursor_sensitivity", self.cursor_sensitivity),
            ("nub_max_offset", self.nub_max_offset),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        if !self.jitter_tolerance.is_finite() || self.jitter_tolerance < 0.0 {
            return Err(ConfigError::NonPositive {
                name: "jitter_tolerance",
                value: self.jitter_tolerance,
            });
        }
        if self.jitter_tolerance >= self.swipe_threshold {
            return Err(ConfigError::JitterExceedsSwipe {
                jitter: self.jitter_tolerance,
                swipe: self.swipe_threshold,
            });
        }
        if self.long_press_delay <= self.hold_delay {
            return Err(ConfigError::LongPressBeforeHold {
                hold: self.hold_delay,
                long_press: self.long_press_delay,
            });
        }
        if self.double_tap_window == Some(Duration::ZERO) {
            return Err(ConfigError::EmptyDoubleTapWindow);
        }
        let delays = [
            ("hold_delay", Some(self.hold_delay)),
            ("long_press_delay", Some(self.long_press_delay)),
            ("double_tap_window", self.double_tap_window),
        ];
        for (name, delay) in delays {
            if let Some(delay) = delay.filter(|delay| *delay > MAX_GESTURE_DELAY) {
                return Err(ConfigError::DelayTooLong { name, delay });
            }
        }
        Ok(())
    }
}

/// Reason a [`GestureConfig`] was rejected.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    NonPositive { name: &'static str, value: f32 },
    JitterExceedsSwipe { jitter: f32, swipe: f32 },
    LongPressBeforeHold { hold: Duration, long_press: Duration },
    EmptyDoubleTapWindow,
    DelayTooLong { name: &'static str, delay: Duration },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositive { name, value } => {
                write!(f, "{name} must be a positive finite number, got {value}")
            }
            ConfigError::JitterExceedsSwipe { jitter, swipe } => write!(
                f,
                "jitter tolerance {jitter}px must be below the swipe threshold {swipe}px"
            ),
            ConfigError::LongPressBeforeHold { hold, long_press } => write!(
                f,
                "long-press delay {long_press:?} must be longer than the hold delay {hold:?}"
            ),
            ConfigError::EmptyDoubleTapWindow => {
                write!(f, "double-tap window must be non-zero; use None to disable it")
            }
            ConfigError::DelayTooLong { name, delay } => write!(
                f,
                "{name} of {delay:?} exceeds the {MAX_GESTURE_DELAY:?} limit"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
