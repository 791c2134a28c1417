//! Cursor-mode pointer state.
//!
//! The cursor lives in percentage space (`0..=100` on both axes) so it is
//! independent of the rendered screen size. It only becomes visible while
//! cursor-mode deltas arrive and hides itself after a period of inactivity:
//! - every delta re-arms the hide deadline
//! - the shell polls [`CursorOverlay::tick`] and schedules a `WaitUntil` on
//!   [`CursorOverlay::next_hide_time`] instead of redrawing continuously

use nubos_ui_graphics::{Point, Rect};
use web_time::{Duration, Instant};

/// Inactivity before the cursor hides, in milliseconds.
pub const CURSOR_HIDE_DELAY_MS: u64 = 1_500;

/// Where the cursor rests, in percent of the screen.
pub const CURSOR_HOME: Point = Point::new(50.0, 50.0);

/// Position of the nub on the screen, in percent.
pub const NUB_ANCHOR: Point = Point::new(50.0, 90.0);

#[derive(Clone, Debug, PartialEq)]
pub struct CursorConfig {
    pub hide_delay: Duration,
    /// Point the sensitivity falloff is measured from.
    pub anchor: Point,
    /// Distance (percent) over which sensitivity falls from 1 to `min_sensitivity`.
    pub falloff_distance: f32,
    pub min_sensitivity: f32,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            hide_delay: Duration::from_millis(CURSOR_HIDE_DELAY_MS),
            anchor: NUB_ANCHOR,
            falloff_distance: 100.0,
            min_sensitivity: 0.5,
        }
    }
}

impl CursorConfig {
    pub fn with_hide_delay(mut self, hide_delay: Duration) -> Self {
        self.hide_delay = hide_delay;
        self
    }

    pub fn with_min_sensitivity(mut self, min_sensitivity: f32) -> Self {
        self.min_sensitivity = min_sensitivity;
        self
    }

    /// Multiplier applied to deltas when the cursor sits at `position`.
    pub fn sensitivity_at(&self, position: Point) -> f32 {
        let distance = position.distance_to(self.anchor);
        (1.0 - distance / self.falloff_distance).max(self.min_sensitivity)
    }
}

#[derive(Clone, Debug)]
pub struct CursorOverlay {
    config: CursorConfig,
    position: Point,
    visible: bool,
    hide_at: Option<Instant>,
}

impl Default for CursorOverlay {
    fn default() -> Self {
        Self::new(CursorConfig::default())
    }
}

impl CursorOverlay {
    pub fn new(config: CursorConfig) -> Self {
        Self {
            config,
            position: CURSOR_HOME,
            visible: false,
            hide_at: None,
        }
    }

    pub fn config(&self) -> &CursorConfig {
        &self.config
    }

    /// Cursor position in percent.
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Moves the cursor by `delta` (percent) scaled by the sensitivity at the
    /// current position, shows it and re-arms the hide deadline. A delay past
    /// the clock's range keeps the cursor up until [`hide`](Self::hide).
    pub fn apply_delta(&mut self, delta: Point, now: Instant) -> Point {
        let scaled = delta * self.config.sensitivity_at(self.position);
        let moved = self.position + scaled;
        self.position = Point::new(moved.x.clamp(0.0, 100.0), moved.y.clamp(0.0, 100.0));
        self.visible = true;
        self.hide_at = now.checked_add(self.config.hide_delay);
        self.position
    }

    /// Cursor position mapped onto `screen`.
    pub fn screen_position(&self, screen: &Rect) -> Point {
        screen.point_at_percent(self.position)
    }

    /// Hides the cursor once the deadline passes.
    /// Returns `true` if it was hidden by this call.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.hide_at {
            Some(deadline) if now >= deadline => {
                self.hide();
                true
            }
            _ => false,
        }
    }

    /// Hides and recenters the cursor.
    pub fn hide(&mut self) {
        self.visible = false;
        self.hide_at = None;
        self.position = CURSOR_HOME;
    }

    /// Returns the pending hide time, for `WaitUntil` scheduling.
    pub fn next_hide_time(&self) -> Option<Instant> {
        self.hide_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sensitivity_falls_off_from_the_anchor() {
        let config = CursorConfig::default();
        assert_eq!(config.sensitivity_at(NUB_ANCHOR), 1.0);
        assert!((config.sensitivity_at(Point::new(50.0, 70.0)) - 0.8).abs() < 1e-4);
        assert_eq!(config.sensitivity_at(Point::new(50.0, 0.0)), 0.5);
    }

    #[test]
    fn delta_moves_and_clamps() {
        let now = Instant::now();
        let mut cursor = CursorOverlay::default();
        // Home sits 40 from the anchor, so sensitivity is 0.6.
        let position = cursor.apply_delta(Point::new(10.0, 0.0), now);
        assert!((position.x - 56.0).abs() < 1e-4);
        assert!(cursor.is_visible());

        cursor.apply_delta(Point::new(500.0, -500.0), now);
        assert_eq!(cursor.position(), Point::new(100.0, 0.0));
    }

    #[test]
    fn hides_and_recenters_after_inactivity() {
        let start = Instant::now();
        let mut cursor = CursorOverlay::default();
        cursor.apply_delta(Point::new(5.0, 5.0), start);
        assert!(!cursor.tick(start + Duration::from_millis(1_000)));

        cursor.apply_delta(Point::new(5.0, 5.0), start + Duration::from_millis(1_000));
        assert!(!cursor.tick(start + Duration::from_millis(2_000)));
        assert!(cursor.tick(start + Duration::from_millis(2_500)));
        assert!(!cursor.is_visible());
        assert_eq!(cursor.position(), CURSOR_HOME);
        assert_eq!(cursor.next_hide_time(), None);
    }

    #[test]
    fn unbounded_hide_delay_never_schedules_a_hide() {
        let start = Instant::now();
        let config = CursorConfig::default().with_hide_delay(Duration::MAX);
        let mut cursor = CursorOverlay::new(config);
        cursor.apply_delta(Point::new(5.0, 5.0), start);

        assert!(cursor.is_visible());
        assert_eq!(cursor.next_hide_time(), None);
        assert!(!cursor.tick(start + Duration::from_secs(3_600)));
    }

    #[test]
    fn maps_onto_screen_bounds() {
        let cursor = CursorOverlay::default();
        let screen = Rect::new(0.0, 0.0, 300.0, 600.0);
        assert_eq!(cursor.screen_position(&screen), Point::new(150.0, 300.0));
    }
}
