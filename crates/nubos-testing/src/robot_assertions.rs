//! Assertion utilities for robot testing
//!
//! Helpers for checking shell state and the event stream produced while a
//! robot drives the nub.

use nubos_app_shell::ShellEvent;
use nubos_ui_graphics::Point;

/// Assert that a value is within an expected range.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that a point is approximately equal to another.
pub fn assert_point_approx_eq(actual: Point, expected: Point, tolerance: f32, msg: &str) {
    assert_approx_eq(actual.x, expected.x, tolerance, &format!("{} - x", msg));
    assert_approx_eq(actual.y, expected.y, tolerance, &format!("{} - y", msg));
}

/// Assert that `expected` appears in `events` in order, possibly with other
/// events in between.
pub fn assert_events_in_order(events: &[ShellEvent], expected: &[ShellEvent], msg: &str) {
    let mut remaining = events.iter();
    for wanted in expected {
        assert!(
            remaining.any(|event| event == wanted),
            "{}: {:?} not found in order in {:?}",
            msg,
            wanted,
            events
        );
    }
}

/// Count events matching a predicate.
pub fn count_events(events: &[ShellEvent], predicate: impl Fn(&ShellEvent) -> bool) -> usize {
    events.iter().filter(|event| predicate(event)).count()
}
