use crate::feedback::{Feedback, HapticStyle};
use crate::gesture_constants::{HOLD_DELAY_MS, LONG_PRESS_DELAY_MS};
use crate::input::{
    Direction, GestureConfig, GestureRecognizer, GestureState, NavigationIntent, PointerSample,
    TimerKind, MAX_GESTURE_DELAY,
};
use std::cell::RefCell;
use std::rc::Rc;
use web_time::{Duration, Instant};

#[derive(Default)]
struct RecordingFeedback {
    haptics: RefCell<Vec<HapticStyle>>,
    clicks: RefCell<usize>,
}

impl Feedback for RecordingFeedback {
    fn haptic(&self, style: HapticStyle) {
        self.haptics.borrow_mut().push(style);
    }

    fn play_click(&self) {
        *self.clicks.borrow_mut() += 1;
    }
}

struct Harness {
    recognizer: GestureRecognizer,
    feedback: Rc<RecordingFeedback>,
    t0: Instant,
    intents: Vec<NavigationIntent>,
}

impl Harness {
    fn new() -> Self {
        Self::with_config(GestureConfig::default())
    }

    fn with_config(config: GestureConfig) -> Self {
        let feedback = Rc::new(RecordingFeedback::default());
        let recognizer = GestureRecognizer::new(config).with_feedback(feedback.clone());
        Self {
            recognizer,
            feedback,
            t0: Instant::now(),
            intents: Vec::new(),
        }
    }

    fn at(&self, ms: u64) -> Instant {
        self.t0 + Duration::from_millis(ms)
    }

    fn down(&mut self, ms: u64, x: f32, y: f32) {
        let sample = PointerSample::new(x, y, self.at(ms));
        let out = self.recognizer.pointer_down(sample);
        self.intents.extend(out);
    }

    fn moved(&mut self, ms: u64, x: f32, y: f32) {
        let sample = PointerSample::new(x, y, self.at(ms));
        let out = self.recognizer.pointer_move(sample);
        self.intents.extend(out);
    }

    fn up(&mut self, ms: u64, x: f32, y: f32) {
        let sample = PointerSample::new(x, y, self.at(ms));
        let out = self.recognizer.pointer_up(sample);
        self.intents.extend(out);
    }

    fn tick(&mut self, ms: u64) {
        let now = self.at(ms);
        let out = self.recognizer.tick(now);
        self.intents.extend(out);
    }

    fn count(&self, predicate: impl Fn(&NavigationIntent) -> bool) -> usize {
        self.intents.iter().filter(|intent| predicate(intent)).count()
    }

    fn activates(&self) -> usize {
        self.count(|intent| matches!(intent, NavigationIntent::Activate))
    }

    fn directions(&self) -> Vec<Direction> {
        self.intents.iter().filter_map(|intent| intent.direction()).collect()
    }

    fn cursor_deltas(&self) -> usize {
        self.count(|intent| matches!(intent, NavigationIntent::CursorDelta { .. }))
    }
}

#[test]
fn quick_stationary_press_is_one_activate() {
    let mut h = Harness::new();
    h.down(0, 100.0, 100.0);
    h.moved(40, 103.0, 101.0);
    h.up(90, 104.0, 102.0);

    assert_eq!(h.activates(), 1);
    assert!(h.directions().is_empty());
    assert_eq!(h.cursor_deltas(), 0);
    assert_eq!(h.recognizer.state(), GestureState::Idle);
    assert!(!h.recognizer.is_pressed());
}

#[test]
fn slow_drift_under_threshold_still_taps() {
    let mut h = Harness::new();
    h.down(0, 0.0, 0.0);
    h.moved(30, 6.0, 0.0);
    h.moved(60, 12.0, 0.0);
    h.moved(90, 14.0, 0.0);
    h.up(120, 14.0, 0.0);

    assert_eq!(h.activates(), 1);
    assert!(h.directions().is_empty());
}

#[test]
fn swipe_fires_once_in_angle_bucket() {
    let cases = [
        ((20.0, 3.0), Direction::Right),
        ((-20.0, -3.0), Direction::Left),
        ((2.0, 18.0), Direction::Down),
        ((-4.0, -16.0), Direction::Up),
    ];
    for ((dx, dy), expected) in cases {
        let mut h = Harness::new();
        h.down(0, 50.0, 50.0);
        h.moved(40, 50.0 + dx, 50.0 + dy);
        h.moved(80, 50.0 + dx * 3.0, 50.0 + dy * 3.0);
        h.moved(120, 50.0 - dx * 3.0, 50.0 - dy * 3.0);
        h.up(400, 50.0, 50.0);

        assert_eq!(h.directions(), vec![expected]);
        assert_eq!(h.activates(), 0);
        assert_eq!(h.cursor_deltas(), 0);
    }
}

#[test]
fn direction_uses_displacement_at_threshold_crossing() {
    let mut h = Harness::new();
    h.down(0, 0.0, 0.0);
    h.moved(20, 0.0, 10.0);
    h.moved(40, 0.0, 16.0);
    h.moved(60, 40.0, 16.0);
    h.up(80, 40.0, 16.0);

    assert_eq!(h.directions(), vec![Direction::Down]);
}

#[test]
fn swipe_suppresses_cursor_mode_for_rest_of_gesture() {
    let mut h = Harness::new();
    h.down(0, 0.0, 0.0);
    h.moved(50, 20.0, 0.0);
    h.tick(HOLD_DELAY_MS + 50);
    h.moved(400, 60.0, 0.0);
    h.moved(450, 90.0, 0.0);

    assert_eq!(h.recognizer.state(), GestureState::Swipe);
    assert_eq!(h.cursor_deltas(), 0);
    h.up(500, 90.0, 0.0);
    assert_eq!(h.directions().len(), 1);
}

#[test]
fn hold_enters_cursor_and_streams_scaled_deltas() {
    let mut h = Harness::new();
    h.down(0, 10.0, 10.0);
    h.tick(HOLD_DELAY_MS);
    assert_eq!(h.recognizer.state(), GestureState::Cursor);

    h.moved(200, 30.0, 10.0);
    h.moved(220, 30.0, 50.0);
    h.up(260, 30.0, 50.0);

    let deltas: Vec<_> = h
        .intents
        .iter()
        .filter_map(|intent| match intent {
            NavigationIntent::CursorDelta { x, y } => Some((*x, *y)),
            _ => None,
        })
        .collect();
    assert_eq!(deltas, vec![(10.0, 0.0), (0.0, 20.0)]);
    assert!(h.directions().is_empty(), "cursor mode never swipes");
    assert_eq!(h.activates(), 0, "releasing cursor mode is not a tap");
}

#[test]
fn hold_timer_fires_lazily_on_next_sample() {
    let mut h = Harness::new();
    h.down(0, 0.0, 0.0);
    h.moved(200, 30.0, 0.0);

    assert_eq!(h.recognizer.state(), GestureState::Cursor);
    assert!(h.directions().is_empty());
    assert_eq!(h.cursor_deltas(), 1);
}

#[test]
fn stationary_hold_long_presses_once() {
    let mut h = Harness::new();
    h.down(0, 0.0, 0.0);
    h.moved(1000, 2.0, 1.0);
    h.tick(LONG_PRESS_DELAY_MS);
    h.tick(LONG_PRESS_DELAY_MS + 500);
    h.moved(LONG_PRESS_DELAY_MS + 600, 40.0, 0.0);
    h.up(LONG_PRESS_DELAY_MS + 700, 40.0, 0.0);

    assert_eq!(
        h.count(|intent| matches!(intent, NavigationIntent::LongPressed)),
        1
    );
    assert_eq!(h.activates(), 0);
    assert!(h.directions().is_empty());
    assert!(h.feedback.haptics.borrow().contains(&HapticStyle::Heavy));
}

#[test]
fn movement_beyond_jitter_cancels_long_press_permanently() {
    let mut h = Harness::new();
    h.down(0, 0.0, 0.0);
    h.tick(HOLD_DELAY_MS);
    h.moved(500, 8.0, 0.0);
    h.moved(600, 0.0, 0.0);
    assert!(!h.recognizer.long_press_armed());
    h.tick(LONG_PRESS_DELAY_MS + 100);
    h.up(LONG_PRESS_DELAY_MS + 200, 0.0, 0.0);

    assert_eq!(
        h.count(|intent| matches!(intent, NavigationIntent::LongPressed)),
        0
    );
}

#[test]
fn timers_are_disarmed_on_release() {
    let mut h = Harness::new();
    h.down(0, 0.0, 0.0);
    assert_eq!(h.recognizer.pending_timers().len(), 2);
    h.up(50, 0.0, 0.0);
    assert!(h.recognizer.pending_timers().is_empty());
    assert_eq!(h.recognizer.next_deadline(), None);
}

#[test]
fn stale_timer_token_is_a_no_op() {
    let mut h = Harness::new();
    h.down(0, 0.0, 0.0);
    let (hold, _) = h.recognizer.pending_timers()[0];
    assert_eq!(hold.kind, TimerKind::Hold);
    h.up(40, 0.0, 0.0);

    let late = h.recognizer.fire(hold, h.at(1_000));
    assert!(late.is_empty());
    assert_eq!(h.recognizer.state(), GestureState::Idle);

    h.down(2_000, 0.0, 0.0);
    let stale = h.recognizer.fire(hold, h.at(2_500));
    assert!(stale.is_empty());
    assert_eq!(h.recognizer.state(), GestureState::Idle);
}

#[test]
fn feedback_signals_follow_transitions() {
    let mut h = Harness::new();
    h.down(0, 0.0, 0.0);
    h.up(30, 0.0, 0.0);
    h.down(100, 0.0, 0.0);
    h.moved(120, 0.0, 30.0);
    h.up(140, 0.0, 30.0);

    assert_eq!(*h.feedback.clicks.borrow(), 2);
    assert_eq!(
        *h.feedback.haptics.borrow(),
        vec![
            HapticStyle::Medium,
            HapticStyle::Heavy,
            HapticStyle::Medium,
            HapticStyle::Light,
        ]
    );
}

#[test]
fn nub_offset_is_clamped_and_reset() {
    let mut h = Harness::new();
    h.down(0, 0.0, 0.0);
    h.moved(20, 300.0, 400.0);
    let offset = h.recognizer.nub_offset();
    assert!((offset.length() - 25.0).abs() < 1e-3);
    h.up(40, 300.0, 400.0);
    assert_eq!(h.recognizer.nub_offset(), nubos_ui_graphics::Point::ZERO);
}

#[test]
fn double_tap_window_merges_two_taps() {
    let config = GestureConfig::default().with_double_tap_window(Some(Duration::from_millis(300)));
    let mut h = Harness::with_config(config);
    h.down(0, 0.0, 0.0);
    h.up(60, 0.0, 0.0);
    assert!(h.intents.is_empty(), "first tap is deferred");
    h.down(150, 0.0, 0.0);
    h.up(210, 0.0, 0.0);
    h.tick(1_000);

    assert_eq!(h.intents, vec![NavigationIntent::DoubleActivate]);
}

#[test]
fn lone_tap_is_delivered_after_window() {
    let config = GestureConfig::default().with_double_tap_window(Some(Duration::from_millis(300)));
    let mut h = Harness::with_config(config);
    h.down(0, 0.0, 0.0);
    h.up(60, 0.0, 0.0);
    h.tick(200);
    assert!(h.intents.is_empty());
    h.tick(360);
    assert_eq!(h.intents, vec![NavigationIntent::Activate]);
}

#[test]
fn swipe_between_taps_is_not_a_double_tap() {
    let config = GestureConfig::default().with_double_tap_window(Some(Duration::from_millis(300)));
    let mut h = Harness::with_config(config);
    h.down(0, 0.0, 0.0);
    h.up(50, 0.0, 0.0);
    h.down(80, 0.0, 0.0);
    h.moved(120, 30.0, 0.0);
    assert_eq!(
        h.intents,
        vec![
            NavigationIntent::Activate,
            NavigationIntent::Direction(Direction::Right)
        ],
        "first tap delivered when the swipe starts"
    );
    h.up(130, 30.0, 0.0);
    h.down(160, 0.0, 0.0);
    h.up(200, 0.0, 0.0);
    h.tick(1_000);

    assert_eq!(h.activates(), 2);
    assert!(!h.intents.contains(&NavigationIntent::DoubleActivate));
}

#[test]
fn hold_after_tap_delivers_the_tap_on_entering_cursor() {
    let config = GestureConfig::default().with_double_tap_window(Some(Duration::from_millis(300)));
    let mut h = Harness::with_config(config);
    h.down(0, 0.0, 0.0);
    h.up(50, 0.0, 0.0);
    h.down(100, 0.0, 0.0);
    h.tick(100 + HOLD_DELAY_MS);

    assert_eq!(h.recognizer.state(), GestureState::Cursor);
    assert_eq!(h.intents, vec![NavigationIntent::Activate]);
    assert!(!h
        .recognizer
        .pending_timers()
        .iter()
        .any(|(token, _)| token.kind == TimerKind::DoubleTap));

    h.up(100 + HOLD_DELAY_MS + 50, 0.0, 0.0);
    h.tick(2_000);
    assert_eq!(h.activates(), 1);
}

#[test]
fn default_config_activates_taps_without_waiting() {
    let mut h = Harness::new();
    h.down(0, 0.0, 0.0);
    h.up(60, 0.0, 0.0);

    assert_eq!(h.intents, vec![NavigationIntent::Activate]);
    assert_eq!(h.recognizer.next_deadline(), None);
}

#[test]
fn oversized_delay_falls_back_instead_of_overflowing() {
    let config = GestureConfig::default().with_long_press_delay(Duration::MAX);
    assert!(GestureRecognizer::try_new(config.clone()).is_err());

    let mut h = Harness::with_config(config);
    h.down(0, 0.0, 0.0);
    h.tick(LONG_PRESS_DELAY_MS);
    assert_eq!(h.recognizer.state(), GestureState::LongPress);
    assert!(h.recognizer.config().long_press_delay <= MAX_GESTURE_DELAY);
}

#[test]
fn invalid_config_falls_back_to_defaults() {
    let bogus = GestureConfig::default().with_swipe_threshold(-1.0);
    assert!(GestureRecognizer::try_new(bogus.clone()).is_err());
    let recognizer = GestureRecognizer::new(bogus);
    assert_eq!(recognizer.config(), &GestureConfig::default());
}

#[test]
fn cancel_never_taps() {
    let mut h = Harness::new();
    h.down(0, 0.0, 0.0);
    let out = h.recognizer.cancel(h.at(30));
    assert!(out.is_empty());
    assert!(!h.recognizer.is_pressed());
}
