//! Application orchestration shell for the nubos phone.
//!
//! `AppShell` sits between the host event loop and the view layer:
//! - pointer samples go through the [`GestureRecognizer`]
//! - the resulting intents are rate limited, mirrored while the device is
//!   flipped, and applied to the springboard grid or to the open app's focus
//! - the view layer is queried through [`FocusScene`] and notified through
//!   drained [`ShellEvent`]s
//!
//! The shell never reads the clock; every entry point takes `now`, and
//! [`AppShell::next_deadline`] tells the host when to call [`AppShell::tick`].

mod config;
mod cooldown;
mod events;
mod transition;

pub use config::{ShellConfig, APP_TRANSITION_MS};
pub use events::ShellEvent;
pub use transition::{Transition, TransitionKind};

use cooldown::NavigationCooldown;
use nubos_foundation::{
    Direction, Feedback, GestureRecognizer, HapticStyle, Intents, NavigationIntent, PointerEvent,
    PointerSample,
};
use nubos_ui::{
    element_at, needs_scroll_into_view, resolve_direction, AppCatalog, AppSlot, CursorOverlay,
    ElementId, FocusManager, FocusScene, FocusableElement,
};
use nubos_ui_graphics::Point;
use std::rc::Rc;
use web_time::Instant;

pub struct AppShell<S, F>
where
    S: FocusScene,
    F: Feedback + 'static,
{
    config: ShellConfig,
    scene: S,
    feedback: Rc<F>,
    catalog: AppCatalog,
    recognizer: GestureRecognizer,
    /// Focus inside the open app.
    focus: FocusManager,
    /// Springboard selection; survives app sessions.
    selected_slot: AppSlot,
    hovered_slot: Option<AppSlot>,
    open_app: Option<AppSlot>,
    transition: Option<Transition>,
    flipped: bool,
    cooldown: NavigationCooldown,
    cursor: CursorOverlay,
    events: Vec<ShellEvent>,
}

impl<S, F> AppShell<S, F>
where
    S: FocusScene,
    F: Feedback + 'static,
{
    pub fn new(scene: S, feedback: F) -> Self {
        Self::with_config(scene, feedback, ShellConfig::default())
    }

    pub fn with_config(scene: S, feedback: F, config: ShellConfig) -> Self {
        let feedback = Rc::new(feedback);
        let recognizer =
            GestureRecognizer::new(config.gesture.clone()).with_feedback(feedback.clone());
        Self {
            scene,
            feedback,
            catalog: AppCatalog::phone(),
            recognizer,
            focus: FocusManager::new(),
            selected_slot: AppSlot(0),
            hovered_slot: None,
            open_app: None,
            transition: None,
            flipped: false,
            cooldown: NavigationCooldown::new(config.nav_cooldown),
            cursor: CursorOverlay::new(config.cursor.clone()),
            events: Vec::new(),
            config,
        }
    }

    /// Replaces the stock catalog. Selection restarts at the first slot.
    pub fn with_catalog(mut self, catalog: AppCatalog) -> Self {
        self.catalog = catalog;
        self.selected_slot = AppSlot(0);
        self
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    pub fn feedback(&self) -> &F {
        &self.feedback
    }

    pub fn catalog(&self) -> &AppCatalog {
        &self.catalog
    }

    pub fn recognizer(&self) -> &GestureRecognizer {
        &self.recognizer
    }

    pub fn selected_slot(&self) -> AppSlot {
        self.selected_slot
    }

    pub fn hovered_slot(&self) -> Option<AppSlot> {
        self.hovered_slot
    }

    /// The app currently on screen, if any. Not set while it is still opening.
    pub fn open_slot(&self) -> Option<AppSlot> {
        self.open_app
    }

    pub fn focused_element(&self) -> Option<&ElementId> {
        self.focus.active_focus_id()
    }

    pub fn transition(&self) -> Option<&Transition> {
        self.transition.as_ref()
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn cursor(&self) -> &CursorOverlay {
        &self.cursor
    }

    /// Offset of the rendered nub from its rest position.
    pub fn nub_offset(&self) -> Point {
        self.recognizer.nub_offset()
    }

    /// Drains pending notifications for the view layer.
    pub fn take_events(&mut self) -> Vec<ShellEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn handle(&mut self, event: PointerEvent) {
        let now = event.sample.time;
        self.advance(now);
        let intents = self.recognizer.handle(event);
        self.dispatch_all(intents, now);
    }

    pub fn pointer_down(&mut self, sample: PointerSample) {
        self.handle(PointerEvent::down(sample));
    }

    pub fn pointer_move(&mut self, sample: PointerSample) {
        self.handle(PointerEvent::moved(sample));
    }

    pub fn pointer_up(&mut self, sample: PointerSample) {
        self.handle(PointerEvent::up(sample));
    }

    /// The pointer left the nub or the platform aborted the gesture.
    pub fn cancel(&mut self, now: Instant) {
        self.advance(now);
        let intents = self.recognizer.cancel(now);
        self.dispatch_all(intents, now);
    }

    /// Completes transitions, hides the idle cursor and fires due gesture
    /// timers.
    pub fn tick(&mut self, now: Instant) {
        self.advance(now);
        let intents = self.recognizer.tick(now);
        self.dispatch_all(intents, now);
    }

    /// Earliest pending deadline, for `WaitUntil` scheduling.
    pub fn next_deadline(&self) -> Option<Instant> {
        [
            self.recognizer.next_deadline(),
            self.transition.map(|transition| transition.deadline),
            self.cursor.next_hide_time(),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    /// Applies one intent. Used by the recognizer path and by hosts that
    /// synthesize intents (keyboard, accessibility).
    pub fn dispatch_intent(&mut self, intent: NavigationIntent, now: Instant) {
        self.advance(now);
        self.apply_intent(intent, now);
    }

    fn apply_intent(&mut self, intent: NavigationIntent, now: Instant) {
        if let Some(transition) = &self.transition {
            log::debug!("dropping {intent:?} during {:?}", transition.kind);
            return;
        }
        match intent {
            NavigationIntent::Direction(direction) => self.navigate(direction, now),
            NavigationIntent::CursorDelta { x, y } => self.move_cursor(Point::new(x, y), now),
            NavigationIntent::Activate => self.activate(now),
            NavigationIntent::DoubleActivate => self.toggle_flip(),
            NavigationIntent::LongPressed => self.events.push(ShellEvent::LongPressed),
        }
    }

    /// Starts opening `slot`. Returns `false` if another app is open, a
    /// transition is in flight, or the slot is not an app.
    pub fn open_app(&mut self, slot: AppSlot, now: Instant) -> bool {
        self.advance(now);
        if self.transition.is_some() || self.open_app.is_some() {
            log::debug!("ignoring open of {slot}: shell busy");
            return false;
        }
        match self.catalog.get(slot) {
            Some(entry) if !entry.is_action => {}
            Some(_) => {
                log::debug!("{slot} is an action, not an app");
                return false;
            }
            None => {
                log::debug!("no app in {slot}");
                return false;
            }
        }
        self.set_hover(None);
        self.start_transition(TransitionKind::Opening, slot, now);
        true
    }

    /// Starts closing the open app. Returns `false` if nothing is open or a
    /// transition is in flight.
    pub fn close_app(&mut self, now: Instant) -> bool {
        self.advance(now);
        if self.transition.is_some() {
            log::debug!("ignoring close: transition in flight");
            return false;
        }
        let Some(slot) = self.open_app else {
            return false;
        };
        self.feedback.haptic(HapticStyle::Light);
        self.start_transition(TransitionKind::Closing, slot, now);
        true
    }

    /// Direct tap on a springboard icon: selects it, then opens it or runs
    /// its action.
    pub fn tap_icon(&mut self, slot: AppSlot, now: Instant) -> bool {
        self.advance(now);
        if self.open_app.is_some() || self.transition.is_some() || self.catalog.get(slot).is_none()
        {
            return false;
        }
        self.feedback.haptic(HapticStyle::Medium);
        self.select_slot(slot);
        self.launch(slot, now)
    }

    pub fn toggle_flip(&mut self) {
        self.flipped = !self.flipped;
        log::debug!("flipped: {}", self.flipped);
        self.events.push(ShellEvent::FlipToggled(self.flipped));
    }

    fn dispatch_all(&mut self, intents: Intents, now: Instant) {
        for intent in intents {
            self.apply_intent(intent, now);
        }
    }

    fn advance(&mut self, now: Instant) {
        if let Some(transition) = self.transition {
            if transition.is_finished(now) {
                self.finish_transition(transition);
            }
        }
        if self.cursor.tick(now) {
            log::trace!("cursor hidden after inactivity");
            self.events.push(ShellEvent::CursorHidden);
            self.set_hover(None);
        }
    }

    fn start_transition(&mut self, kind: TransitionKind, slot: AppSlot, now: Instant) {
        self.events.push(match kind {
            TransitionKind::Opening => ShellEvent::AppOpening(slot),
            TransitionKind::Closing => ShellEvent::AppClosing(slot),
        });
        let deadline = now.checked_add(self.config.transition);
        if deadline.is_none() {
            log::warn!(
                "transition {:?} overflows the clock; finishing now",
                self.config.transition
            );
        }
        let transition = Transition {
            kind,
            slot,
            deadline: deadline.unwrap_or(now),
        };
        if transition.deadline <= now {
            self.finish_transition(transition);
        } else {
            self.transition = Some(transition);
        }
    }

    fn finish_transition(&mut self, transition: Transition) {
        self.transition = None;
        let slot = transition.slot;
        match transition.kind {
            TransitionKind::Opening => {
                self.open_app = Some(slot);
                let elements = self.scene.focusables(slot);
                self.focus.focus_default(&elements);
                log::debug!("opened {slot}");
                self.events.push(ShellEvent::AppOpened(slot));
                if let Some(id) = self.focus.active_focus_id() {
                    self.events.push(ShellEvent::FocusChanged(id.clone()));
                }
            }
            TransitionKind::Closing => {
                self.open_app = None;
                self.focus.clear_focus();
                log::debug!("closed {slot}");
                self.events.push(ShellEvent::AppClosed(slot));
            }
        }
    }

    fn launch(&mut self, slot: AppSlot, now: Instant) -> bool {
        if self.catalog.get(slot).is_some_and(|entry| entry.is_action) {
            self.toggle_flip();
            return true;
        }
        self.open_app(slot, now)
    }

    fn navigate(&mut self, direction: Direction, now: Instant) {
        if self.cooldown.is_cooling(now) {
            log::trace!("{} dropped by navigation cooldown", direction.as_str());
            return;
        }
        let direction = if self.flipped {
            direction.opposite()
        } else {
            direction
        };

        match self.open_app {
            Some(slot) => {
                self.cooldown.stamp(now);
                self.move_focus(slot, direction);
            }
            None => {
                let next = self.catalog.step(self.selected_slot, direction);
                if next != self.selected_slot {
                    self.cooldown.stamp(now);
                    self.feedback.haptic(HapticStyle::Light);
                    self.select_slot(next);
                }
            }
        }
    }

    fn move_focus(&mut self, slot: AppSlot, direction: Direction) {
        let elements = self.scene.focusables(slot);
        let resolution = resolve_direction(
            direction,
            self.focus.active_focus_id(),
            &elements,
            &self.config.navigation,
        );
        let Some(target) = resolution.target().cloned() else {
            log::trace!("no focus target {} ({resolution:?})", direction.as_str());
            return;
        };

        self.focus.request_focus(target.clone());
        self.feedback.haptic(HapticStyle::Light);
        self.events.push(ShellEvent::FocusChanged(target.clone()));
        self.scroll_if_needed(slot, &target, &elements);
    }

    fn scroll_if_needed(&mut self, slot: AppSlot, id: &ElementId, elements: &[FocusableElement]) {
        let Some(viewport) = self.scene.scroll_viewport(slot) else {
            return;
        };
        // The close control sits in the fixed header, outside the scroller.
        let Some(element) = elements
            .iter()
            .find(|element| element.id == *id && !element.is_close)
        else {
            return;
        };
        if needs_scroll_into_view(&element.bounds, &viewport, &self.config.navigation) {
            self.scene.scroll_into_view(id);
            self.events.push(ShellEvent::ScrollIntoView(id.clone()));
        }
    }

    fn activate(&mut self, now: Instant) {
        let Some(slot) = self.open_app else {
            let slot = self.hovered_slot.unwrap_or(self.selected_slot);
            self.launch(slot, now);
            return;
        };

        let elements = self.scene.focusables(slot);
        let target = match self.focus.active_focus_id() {
            Some(id) if !self.focus.is_close_focused(&elements) => id.clone(),
            _ => {
                self.close_app(now);
                return;
            }
        };
        if !elements.iter().any(|element| element.id == target) {
            log::debug!("{target} is no longer in the layout; ignoring activate");
            return;
        }
        log::debug!("activating {target}");
        self.scene.activate(&target);
        self.events.push(ShellEvent::ElementActivated(target));
    }

    fn move_cursor(&mut self, delta: Point, now: Instant) {
        let position = self.cursor.apply_delta(delta, now);
        self.events.push(ShellEvent::CursorMoved(position));

        let Some(screen) = self.scene.screen_bounds() else {
            return;
        };
        let point = self.cursor.screen_position(&screen);
        match self.open_app {
            Some(slot) => {
                let elements = self.scene.focusables(slot);
                if let Some(element) = element_at(point, &elements) {
                    let id = element.id.clone();
                    if self.focus.request_focus(id.clone()) {
                        self.events.push(ShellEvent::FocusChanged(id));
                    }
                }
            }
            None => {
                let hovered = self
                    .scene
                    .springboard_icons()
                    .into_iter()
                    .rev()
                    .find(|(slot, bounds)| {
                        bounds.contains_point(point) && self.catalog.get(*slot).is_some()
                    })
                    .map(|(slot, _)| slot);
                self.set_hover(hovered);
                if let Some(slot) = hovered {
                    self.select_slot(slot);
                }
            }
        }
    }

    fn set_hover(&mut self, hovered: Option<AppSlot>) {
        if self.hovered_slot != hovered {
            self.hovered_slot = hovered;
            self.events.push(ShellEvent::HoverChanged(hovered));
        }
    }

    fn select_slot(&mut self, slot: AppSlot) {
        if self.selected_slot != slot {
            log::trace!("springboard selection {} -> {slot}", self.selected_slot);
            self.selected_slot = slot;
            self.events.push(ShellEvent::SelectionChanged(slot));
        }
    }
}

#[cfg(test)]
#[path = "tests/app_shell_tests.rs"]
mod tests;
