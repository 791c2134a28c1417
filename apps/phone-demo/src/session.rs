//! Scripted nub sessions.
//!
//! A script is a whitespace separated list of steps:
//!
//! | step            | meaning                                          |
//! |-----------------|--------------------------------------------------|
//! | `left` `right` `up` `down` | a 30 px flick, then the cooldown wait |
//! | `tap`           | quick press and release                          |
//! | `double`        | two taps 80 ms apart                             |
//! | `long`          | hold past the long-press delay                   |
//! | `hold:MS`       | hold still for `MS` milliseconds                 |
//! | `wait:MS`       | let `MS` milliseconds pass                       |
//! | `drag:DX,DY`    | enter cursor mode and drag by `(DX, DY)`         |
//! | `open:N` `close` `flip` | direct shell entry points                |
//!
//! Lines starting with `#` are comments.

use nubos_app_shell::{AppShell, ShellConfig, ShellEvent};
use nubos_foundation::gesture_constants::{
    HOLD_DELAY_MS, LONG_PRESS_DELAY_MS, NAVIGATION_COOLDOWN_MS,
};
use nubos_foundation::{Direction, Feedback, PointerOrigin, PointerSample};
use nubos_ui::{AppSlot, FocusScene};
use nubos_ui_graphics::Point;
use std::fmt;
use web_time::{Duration, Instant};

const NUB_CENTER: Point = Point::new(40.0, 40.0);
const SAMPLE_INTERVAL: Duration = Duration::from_millis(16);
const TAP_DURATION: Duration = Duration::from_millis(60);
const DRAG_STEPS: usize = 8;

#[derive(Clone, Debug, PartialEq)]
pub enum Step {
    Swipe(Direction),
    Tap,
    DoubleTap,
    LongPress,
    Hold(Duration),
    Wait(Duration),
    Drag(Point),
    Open(AppSlot),
    Close,
    Flip,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScriptError {
    pub token: String,
    /// 1-based position of the token within the script.
    pub position: usize,
    pub reason: &'static str,
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step {} `{}`: {}", self.position, self.token, self.reason)
    }
}

impl std::error::Error for ScriptError {}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Script {
    steps: Vec<Step>,
}

impl Script {
    pub fn parse(source: &str) -> Result<Self, ScriptError> {
        let tokens = source
            .lines()
            .filter(|line| !line.trim_start().starts_with('#'))
            .flat_map(str::split_whitespace);
        let steps = tokens
            .enumerate()
            .map(|(index, token)| parse_step(token, index + 1))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { steps })
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

fn parse_step(token: &str, position: usize) -> Result<Step, ScriptError> {
    let error = |reason| ScriptError {
        token: token.to_string(),
        position,
        reason,
    };
    let millis = |value: &str| {
        value
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|_| error("expected a duration in milliseconds"))
    };

    let (name, argument) = match token.split_once(':') {
        Some((name, argument)) => (name, Some(argument)),
        None => (token, None),
    };
    let step = match (name.to_ascii_lowercase().as_str(), argument) {
        ("left", None) => Step::Swipe(Direction::Left),
        ("right", None) => Step::Swipe(Direction::Right),
        ("up", None) => Step::Swipe(Direction::Up),
        ("down", None) => Step::Swipe(Direction::Down),
        ("tap", None) => Step::Tap,
        ("double", None) => Step::DoubleTap,
        ("long", None) => Step::LongPress,
        ("close", None) => Step::Close,
        ("flip", None) => Step::Flip,
        ("hold", Some(value)) => Step::Hold(millis(value)?),
        ("wait", Some(value)) => Step::Wait(millis(value)?),
        ("open", Some(value)) => Step::Open(AppSlot(
            value.parse().map_err(|_| error("expected a slot index"))?,
        )),
        ("drag", Some(value)) => {
            let (dx, dy) = value
                .split_once(',')
                .ok_or_else(|| error("expected DX,DY"))?;
            let parse = |part: &str| {
                part.trim()
                    .parse::<f32>()
                    .ok()
                    .filter(|value| value.is_finite())
                    .ok_or_else(|| error("expected DX,DY"))
            };
            Step::Drag(Point::new(parse(dx)?, parse(dy)?))
        }
        (_, Some(_)) => return Err(error("step takes no argument or is unknown")),
        (_, None) => return Err(error("unknown step")),
    };
    Ok(step)
}

/// Replays scripts against an [`AppShell`] on a virtual clock.
pub struct SessionPlayer<S, F>
where
    S: FocusScene,
    F: Feedback + 'static,
{
    shell: AppShell<S, F>,
    now: Instant,
    events: Vec<ShellEvent>,
}

impl<S, F> SessionPlayer<S, F>
where
    S: FocusScene,
    F: Feedback + 'static,
{
    pub fn new(scene: S, feedback: F, config: ShellConfig) -> Self {
        Self {
            shell: AppShell::with_config(scene, feedback, config),
            now: Instant::now(),
            events: Vec::new(),
        }
    }

    pub fn shell(&self) -> &AppShell<S, F> {
        &self.shell
    }

    pub fn now(&self) -> Instant {
        self.now
    }

    /// Plays every step, then lets pending transitions settle. Returns the
    /// events emitted along the way.
    pub fn run(&mut self, script: &Script) -> Vec<ShellEvent> {
        for step in script.steps() {
            log::debug!("step {step:?}");
            self.play(step);
        }
        self.settle();
        std::mem::take(&mut self.events)
    }

    pub fn play(&mut self, step: &Step) {
        match *step {
            Step::Swipe(direction) => {
                let delta = direction.vector() * 10.0;
                self.press();
                let mut position = NUB_CENTER;
                for _ in 0..3 {
                    position = position + delta;
                    self.move_to(position);
                }
                self.release(position);
                self.advance(Duration::from_millis(NAVIGATION_COOLDOWN_MS + 50));
            }
            Step::Tap => self.tap(),
            Step::DoubleTap => {
                self.tap();
                self.advance(Duration::from_millis(80));
                self.tap();
            }
            Step::LongPress => self.hold(Duration::from_millis(LONG_PRESS_DELAY_MS + 100)),
            Step::Hold(duration) => self.hold(duration),
            Step::Wait(duration) => self.advance(duration),
            Step::Drag(delta) => {
                self.press();
                self.advance(Duration::from_millis(HOLD_DELAY_MS));
                let step = delta * (1.0 / DRAG_STEPS as f32);
                let mut position = NUB_CENTER;
                for _ in 0..DRAG_STEPS {
                    position = position + step;
                    self.move_to(position);
                }
                self.release(position);
            }
            Step::Open(slot) => {
                if !self.shell.tap_icon(slot, self.now) {
                    log::warn!("could not open {slot}");
                }
            }
            Step::Close => {
                if !self.shell.close_app(self.now) {
                    log::warn!("no app to close");
                }
            }
            Step::Flip => self.shell.toggle_flip(),
        }
        self.collect();
    }

    /// Ticks deadlines until the shell is idle or only the cursor hide
    /// timer remains.
    pub fn settle(&mut self) {
        while self.shell.is_transitioning() || self.shell.recognizer().next_deadline().is_some() {
            let Some(deadline) = self.shell.next_deadline() else {
                break;
            };
            let step = deadline.saturating_duration_since(self.now);
            self.advance(step);
        }
    }

    fn tap(&mut self) {
        self.press();
        self.advance(TAP_DURATION);
        self.release(NUB_CENTER);
    }

    fn hold(&mut self, duration: Duration) {
        self.press();
        self.advance(duration);
        self.release(NUB_CENTER);
    }

    fn press(&mut self) {
        self.shell.pointer_down(self.sample(NUB_CENTER));
    }

    fn move_to(&mut self, position: Point) {
        self.advance(SAMPLE_INTERVAL);
        self.shell.pointer_move(self.sample(position));
    }

    fn release(&mut self, position: Point) {
        self.shell.pointer_up(self.sample(position));
    }

    fn advance(&mut self, duration: Duration) {
        let target = self.now + duration;
        while let Some(deadline) = self.shell.next_deadline() {
            if deadline > target {
                break;
            }
            self.now = self.now.max(deadline);
            self.shell.tick(self.now);
            self.collect();
        }
        self.now = target;
        self.shell.tick(self.now);
        self.collect();
    }

    /// Scripts stand in for a desktop mouse driving the nub.
    fn sample(&self, position: Point) -> PointerSample {
        PointerSample::new(position.x, position.y, self.now).with_origin(PointerOrigin::Mouse)
    }

    fn collect(&mut self) {
        self.events.extend(self.shell.take_events());
    }
}
