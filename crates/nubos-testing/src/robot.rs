//! Robot testing framework for end-to-end shell testing
//!
//! The robot drives an [`AppShell`] through the nub the way a thumb would:
//! - presses, drags and releases on the nub surface
//! - a virtual clock that only moves when the test says so
//! - every deadline the shell reports is ticked in order while time advances
//!
//! # Example
//!
//! ```
//! use nubos_testing::{ShellRobot, TestScene};
//! use nubos_foundation::Direction;
//!
//! let mut robot = ShellRobot::new(TestScene::phone());
//! robot.swipe(Direction::Right);
//! robot.tap();
//! robot.wait_for_idle();
//! assert!(robot.shell().open_slot().is_some());
//! ```

use crate::feedback::RecordingFeedback;
use nubos_app_shell::{AppShell, ShellConfig, ShellEvent};
use nubos_foundation::gesture_constants::{HOLD_DELAY_MS, LONG_PRESS_DELAY_MS};
use nubos_foundation::{Direction, PointerSample};
use nubos_ui::{AppSlot, ElementId, FocusScene};
use nubos_ui_graphics::Point;
use std::rc::Rc;
use web_time::{Duration, Instant};

/// Rest position of the thumb on the nub surface.
pub const NUB_CENTER: Point = Point::new(40.0, 40.0);

/// Interval between synthesized pointer samples.
pub const SAMPLE_INTERVAL: Duration = Duration::from_millis(16);

/// How long a synthesized tap keeps the nub pressed.
pub const TAP_DURATION: Duration = Duration::from_millis(60);

/// Safety valve for `wait_for_idle` in case deadlines keep re-arming.
const MAX_IDLE_STEPS: usize = 64;

/// Headless driver for an [`AppShell`] with a virtual clock.
pub struct ShellRobot<S>
where
    S: FocusScene,
{
    shell: AppShell<S, Rc<RecordingFeedback>>,
    feedback: Rc<RecordingFeedback>,
    now: Instant,
    /// Position of the thumb while the nub is pressed.
    pointer: Option<Point>,
    events: Vec<ShellEvent>,
}

impl<S> ShellRobot<S>
where
    S: FocusScene,
{
    pub fn new(scene: S) -> Self {
        Self::with_config(scene, ShellConfig::default())
    }

    pub fn with_config(scene: S, config: ShellConfig) -> Self {
        let feedback = Rc::new(RecordingFeedback::new());
        let shell = AppShell::with_config(scene, feedback.clone(), config);
        Self {
            shell,
            feedback,
            now: Instant::now(),
            pointer: None,
            events: Vec::new(),
        }
    }

    /// Current virtual time.
    pub fn now(&self) -> Instant {
        self.now
    }

    pub fn shell(&self) -> &AppShell<S, Rc<RecordingFeedback>> {
        &self.shell
    }

    /// Access to the underlying shell for direct entry points.
    pub fn shell_mut(&mut self) -> &mut AppShell<S, Rc<RecordingFeedback>> {
        &mut self.shell
    }

    pub fn scene(&self) -> &S {
        self.shell.scene()
    }

    pub fn feedback(&self) -> &RecordingFeedback {
        &self.feedback
    }

    pub fn selected_slot(&self) -> AppSlot {
        self.shell.selected_slot()
    }

    pub fn focused(&self) -> Option<&ElementId> {
        self.shell.focused_element()
    }

    /// Events emitted since the last call, in order.
    pub fn take_events(&mut self) -> Vec<ShellEvent> {
        self.collect_events();
        std::mem::take(&mut self.events)
    }

    /// Advances the virtual clock, ticking every deadline passed on the way.
    pub fn advance_time(&mut self, duration: Duration) {
        let target = self.now + duration;
        while let Some(deadline) = self.shell.next_deadline() {
            if deadline > target {
                break;
            }
            self.now = self.now.max(deadline);
            self.shell.tick(self.now);
            self.collect_events();
        }
        self.now = target;
        self.shell.tick(self.now);
        self.collect_events();
    }

    /// Runs the clock forward until no deadline is pending.
    pub fn wait_for_idle(&mut self) {
        for _ in 0..MAX_IDLE_STEPS {
            let Some(deadline) = self.shell.next_deadline() else {
                return;
            };
            let step = deadline.saturating_duration_since(self.now);
            self.advance_time(step);
        }
        log::warn!("shell still has deadlines after {MAX_IDLE_STEPS} steps");
    }

    /// Presses the nub at its center.
    pub fn press(&mut self) {
        self.press_at(NUB_CENTER);
    }

    pub fn press_at(&mut self, position: Point) {
        self.pointer = Some(position);
        self.shell.pointer_down(self.sample(position));
        self.collect_events();
    }

    /// Moves the pressed thumb by `(dx, dy)` in one sample.
    pub fn move_by(&mut self, dx: f32, dy: f32) {
        let Some(position) = self.pointer else {
            log::debug!("move_by without press ignored");
            return;
        };
        let next = position + Point::new(dx, dy);
        self.pointer = Some(next);
        self.advance_time(SAMPLE_INTERVAL);
        self.shell.pointer_move(self.sample(next));
        self.collect_events();
    }

    pub fn release(&mut self) {
        let Some(position) = self.pointer.take() else {
            return;
        };
        self.shell.pointer_up(self.sample(position));
        self.collect_events();
    }

    /// A quick stationary press and release.
    pub fn tap(&mut self) {
        self.press();
        self.advance_time(TAP_DURATION);
        self.release();
    }

    /// Two taps close together.
    pub fn double_tap(&mut self) {
        self.tap();
        self.advance_time(Duration::from_millis(80));
        self.tap();
    }

    /// A short flick of 30 px in `direction`, released right away.
    pub fn swipe(&mut self, direction: Direction) {
        let step = direction.vector() * 10.0;
        self.press();
        for _ in 0..3 {
            self.move_by(step.x, step.y);
        }
        self.release();
    }

    /// Holds the nub still for `duration`, then releases.
    pub fn hold(&mut self, duration: Duration) {
        self.press();
        self.advance_time(duration);
        self.release();
    }

    pub fn long_press(&mut self) {
        self.hold(Duration::from_millis(LONG_PRESS_DELAY_MS + 100));
    }

    /// Enters cursor mode and drags the thumb by `(dx, dy)` in `steps` samples.
    pub fn drag_cursor(&mut self, dx: f32, dy: f32, steps: usize) {
        let steps = steps.max(1);
        self.press();
        self.advance_time(Duration::from_millis(HOLD_DELAY_MS));
        for _ in 0..steps {
            self.move_by(dx / steps as f32, dy / steps as f32);
        }
        self.release();
    }

    fn sample(&self, position: Point) -> PointerSample {
        PointerSample::new(position.x, position.y, self.now)
    }

    fn collect_events(&mut self) {
        self.events.extend(self.shell.take_events());
    }
}
