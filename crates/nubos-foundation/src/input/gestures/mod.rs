//! Nub gesture recognizer.
//!
//! Classifies one press (pointer down → up) into a single outcome: a tap,
//! one directional swipe, a cursor drag or a long hold. The recognizer knows
//! nothing about what the intents drive; it only reads positions and time.
//!
//! ```text
//!            swipe threshold crossed
//!   Idle ───────────────────────────────▶ Swipe
//!    │ hold delay, no swipe
//!    ▼
//!   Cursor ─── long-press delay, never left jitter ──▶ LongPress
//!    ▲                                                 ▲
//!    └── (Idle) long-press delay, never left jitter ───┘
//! ```
//!
//! Pointer-up returns every state to `Idle`; only an `Idle` release that
//! never swiped counts as a tap.

mod config;
mod tap;
mod timers;

pub use config::{ConfigError, GestureConfig, MAX_GESTURE_DELAY};
pub use tap::{TapOutcome, TapTracker};
pub use timers::{TimerKind, TimerToken};

use crate::feedback::{Feedback, HapticStyle, NoopFeedback};
use crate::input::{
    Direction, Intents, NavigationIntent, PointerEvent, PointerEventKind, PointerSample,
};
use nubos_ui_graphics::Point;
use smallvec::SmallVec;
use std::rc::Rc;
use timers::GestureTimers;
use web_time::{Duration, Instant};

/// Current classification of the active gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GestureState {
    #[default]
    Idle,
    Swipe,
    Cursor,
    LongPress,
}

pub struct GestureRecognizer {
    config: GestureConfig,
    feedback: Rc<dyn Feedback>,
    state: GestureState,
    /// Generation of the current (or last) gesture; bumps on every press.
    gesture: u64,
    press: Option<PointerSample>,
    last_position: Point,
    swipe_fired: bool,
    timers: GestureTimers,
    taps: TapTracker,
    nub_offset: Point,
}

impl Default for GestureRecognizer {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}

impl GestureRecognizer {
    /// Creates a recognizer, falling back to defaults for an invalid config.
    pub fn new(config: GestureConfig) -> Self {
        match Self::try_new(config) {
            Ok(recognizer) => recognizer,
            Err(err) => {
                log::warn!("invalid gesture config ({err}); using defaults");
                Self::build(GestureConfig::default())
            }
        }
    }

    pub fn try_new(config: GestureConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: GestureConfig) -> Self {
        Self {
            taps: TapTracker::new(config.double_tap_window),
            config,
            feedback: Rc::new(NoopFeedback),
            state: GestureState::Idle,
            gesture: 0,
            press: None,
            last_position: Point::ZERO,
            swipe_fired: false,
            timers: GestureTimers::default(),
            nub_offset: Point::ZERO,
        }
    }

    pub fn with_feedback(mut self, feedback: Rc<dyn Feedback>) -> Self {
        self.feedback = feedback;
        self
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn is_pressed(&self) -> bool {
        self.press.is_some()
    }

    /// Offset of the rendered nub from its rest position.
    pub fn nub_offset(&self) -> Point {
        self.nub_offset
    }

    /// Whether the long-press can still fire for the current gesture.
    pub fn long_press_armed(&self) -> bool {
        self.timers.is_armed(TimerKind::LongPress)
    }

    /// Earliest pending deadline, for `WaitUntil` scheduling.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// All armed timers with their deadlines, earliest first.
    pub fn pending_timers(&self) -> SmallVec<[(TimerToken, Instant); 3]> {
        self.timers.pending()
    }

    pub fn handle(&mut self, event: PointerEvent) -> Intents {
        match event.kind {
            PointerEventKind::Down => self.pointer_down(event.sample),
            PointerEventKind::Move => self.pointer_move(event.sample),
            PointerEventKind::Up => self.pointer_up(event.sample),
            PointerEventKind::Cancel => self.cancel(event.sample.time),
        }
    }

    pub fn pointer_down(&mut self, sample: PointerSample) -> Intents {
        let intents = self.advance(sample.time);
        if self.press.is_some() {
            log::debug!("pointer down without release; restarting gesture");
            self.end_gesture();
        }

        self.gesture = self.gesture.wrapping_add(1);
        self.state = GestureState::Idle;
        self.press = Some(sample);
        self.last_position = sample.position;
        self.swipe_fired = false;
        self.nub_offset = Point::ZERO;
        self.arm_after(TimerKind::Hold, sample.time, self.config.hold_delay);
        self.arm_after(TimerKind::LongPress, sample.time, self.config.long_press_delay);

        self.feedback.haptic(HapticStyle::Medium);
        self.feedback.play_click();
        log::trace!(
            "gesture {} {:?} down at ({}, {})",
            self.gesture,
            sample.origin,
            sample.position.x,
            sample.position.y
        );
        intents
    }

    pub fn pointer_move(&mut self, sample: PointerSample) -> Intents {
        let mut intents = self.advance(sample.time);
        let Some(press) = self.press else {
            return intents;
        };

        let displacement = sample.position - press.position;
        let distance = displacement.length();
        self.nub_offset = displacement.clamp_length(self.config.nub_max_offset);

        if distance > self.config.jitter_tolerance && self.long_press_armed() {
            log::trace!("gesture {} left jitter tolerance", self.gesture);
            self.timers.cancel(TimerKind::LongPress);
        }

        match self.state {
            GestureState::Idle => {
                if !self.swipe_fired && distance >= self.config.swipe_threshold {
                    let direction = Direction::from_displacement(displacement);
                    self.swipe_fired = true;
                    self.state = GestureState::Swipe;
                    self.timers.cancel(TimerKind::Hold);
                    self.flush_deferred_tap(&mut intents);
                    self.feedback.haptic(HapticStyle::Light);
                    log::debug!("gesture {} swiped {}", self.gesture, direction.as_str());
                    intents.push(NavigationIntent::Direction(direction));
                }
            }
            GestureState::Cursor => {
                let delta =
                    (sample.position - self.last_position) * self.config.cursor_sensitivity;
                intents.push(NavigationIntent::cursor_delta(delta));
            }
            GestureState::Swipe | GestureState::LongPress => {}
        }

        self.last_position = sample.position;
        intents
    }

    pub fn pointer_up(&mut self, sample: PointerSample) -> Intents {
        let mut intents = self.advance(sample.time);
        if self.press.is_none() {
            return intents;
        }

        let is_tap = self.state == GestureState::Idle && !self.swipe_fired;
        self.end_gesture();

        if is_tap {
            self.feedback.haptic(HapticStyle::Heavy);
            match self.taps.register(self.gesture, sample.time) {
                TapOutcome::Activate => intents.push(NavigationIntent::Activate),
                TapOutcome::DoubleActivate => {
                    self.timers.cancel(TimerKind::DoubleTap);
                    log::debug!("gesture {} completed a double tap", self.gesture);
                    intents.push(NavigationIntent::DoubleActivate);
                }
                TapOutcome::Deferred { deadline } => {
                    self.timers.arm(self.token(TimerKind::DoubleTap), deadline);
                }
            }
        }
        intents
    }

    /// Abandons the current gesture without producing a tap.
    pub fn cancel(&mut self, now: Instant) -> Intents {
        let intents = self.advance(now);
        if self.press.is_some() {
            log::debug!("gesture {} cancelled", self.gesture);
            self.end_gesture();
        }
        intents
    }

    /// Fires every timer whose deadline is at or before `now`.
    pub fn tick(&mut self, now: Instant) -> Intents {
        self.advance(now)
    }

    /// Fires one timer. Stale tokens and early calls are no-ops.
    pub fn fire(&mut self, token: TimerToken, now: Instant) -> Intents {
        let mut intents = Intents::new();
        if !self.timers.take_due(token, now) {
            log::trace!("ignoring stale or early timer {token:?}");
            return intents;
        }

        match token.kind {
            TimerKind::Hold => {
                if self.press.is_some() && self.state == GestureState::Idle && !self.swipe_fired {
                    self.state = GestureState::Cursor;
                    self.flush_deferred_tap(&mut intents);
                    self.feedback.haptic(HapticStyle::Medium);
                    log::debug!("gesture {} entered cursor mode", self.gesture);
                }
            }
            TimerKind::LongPress => {
                if self.press.is_some()
                    && matches!(self.state, GestureState::Idle | GestureState::Cursor)
                {
                    self.state = GestureState::LongPress;
                    self.timers.cancel(TimerKind::Hold);
                    self.flush_deferred_tap(&mut intents);
                    self.feedback.haptic(HapticStyle::Heavy);
                    log::debug!("gesture {} long-pressed", self.gesture);
                    intents.push(NavigationIntent::LongPressed);
                }
            }
            TimerKind::DoubleTap => {
                if self.taps.expire(token.gesture, now) {
                    intents.push(NavigationIntent::Activate);
                }
            }
        }
        intents
    }

    fn advance(&mut self, now: Instant) -> Intents {
        let mut intents = Intents::new();
        for (token, _) in self.timers.due(now) {
            intents.extend(self.fire(token, now));
        }
        intents
    }

    /// Arms `kind` for `delay` after `start`. A deadline past the clock's
    /// range leaves the timer unarmed.
    fn arm_after(&mut self, kind: TimerKind, start: Instant, delay: Duration) {
        match start.checked_add(delay) {
            Some(deadline) => self.timers.arm(self.token(kind), deadline),
            None => log::warn!("{kind:?} delay {delay:?} overflows the clock; not arming"),
        }
    }

    /// A press that turned into anything but a tap ends the wait for a
    /// second tap; the earlier tap is delivered on its own.
    fn flush_deferred_tap(&mut self, intents: &mut Intents) {
        if self.taps.pending().is_some() {
            self.taps.reset();
            self.timers.cancel(TimerKind::DoubleTap);
            log::debug!("gesture {} ended the double-tap wait", self.gesture);
            intents.push(NavigationIntent::Activate);
        }
    }

    fn token(&self, kind: TimerKind) -> TimerToken {
        TimerToken {
            gesture: self.gesture,
            kind,
        }
    }

    fn end_gesture(&mut self) {
        self.timers.cancel(TimerKind::Hold);
        self.timers.cancel(TimerKind::LongPress);
        self.state = GestureState::Idle;
        self.press = None;
        self.swipe_fired = false;
        self.nub_offset = Point::ZERO;
    }
}

impl std::fmt::Debug for GestureRecognizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GestureRecognizer")
            .field("state", &self.state)
            .field("gesture", &self.gesture)
            .field("pressed", &self.press.is_some())
            .field("swipe_fired", &self.swipe_fired)
            .finish()
    }
}
