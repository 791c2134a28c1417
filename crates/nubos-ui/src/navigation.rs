//! Spatial focus resolution.
//!
//! Given a direction, the current focus and a fresh snapshot of focusable
//! elements, pick the nearest element whose center lies strictly on the
//! requested side. Geometry is never cached between calls; layouts may
//! change at any time (scrolling, animations, re-layout).

use crate::focusable::{ElementId, FocusableElement};
use nubos_foundation::Direction;
use nubos_ui_graphics::{EdgeInsets, Point, Rect};

/// Minimum offset (px) for a candidate to count as "on that side".
pub const DEFAULT_DEADBAND: f32 = 5.0;

/// Height (px) reserved at the bottom of the scroll container for the nav bar.
pub const NAV_BAR_RESERVE: f32 = 90.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavigationConfig {
    pub deadband: f32,
    pub nav_bar_reserve: f32,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            deadband: DEFAULT_DEADBAND,
            nav_bar_reserve: NAV_BAR_RESERVE,
        }
    }
}

impl NavigationConfig {
    pub fn with_deadband(mut self, deadband: f32) -> Self {
        self.deadband = deadband;
        self
    }

    pub fn with_nav_bar_reserve(mut self, reserve: f32) -> Self {
        self.nav_bar_reserve = reserve;
        self
    }
}

/// Outcome of one directional step.
#[derive(Clone, Debug, PartialEq)]
pub enum Resolution {
    /// No element was focused (or it vanished); the first element wins.
    Initial(ElementId),
    Moved { from: ElementId, to: ElementId },
    /// Nothing lies on the requested side.
    Unchanged,
    /// The layout reported no focusable elements.
    Empty,
}

impl Resolution {
    /// The element that should receive focus, if focus changes.
    pub fn target(&self) -> Option<&ElementId> {
        match self {
            Resolution::Initial(id) | Resolution::Moved { to: id, .. } => Some(id),
            Resolution::Unchanged | Resolution::Empty => None,
        }
    }
}

/// Resolves a directional step against the current layout.
pub fn resolve_direction(
    direction: Direction,
    current: Option<&ElementId>,
    elements: &[FocusableElement],
    config: &NavigationConfig,
) -> Resolution {
    let Some(first) = elements.first() else {
        return Resolution::Empty;
    };

    let Some(from) = current.and_then(|id| elements.iter().find(|element| element.id == *id))
    else {
        return Resolution::Initial(first.id.clone());
    };

    let origin = from.center();
    let mut best: Option<(&FocusableElement, f32)> = None;
    for candidate in elements {
        if candidate.id == from.id {
            continue;
        }
        let center = candidate.center();
        if !lies_beyond(direction, origin, center, config.deadband) {
            continue;
        }
        let distance = origin.distance_to(center);
        // Strict comparison: ties keep the earlier element in document order.
        if best.map_or(true, |(_, best_distance)| distance < best_distance) {
            best = Some((candidate, distance));
        }
    }

    match best {
        Some((target, _)) => Resolution::Moved {
            from: from.id.clone(),
            to: target.id.clone(),
        },
        None => Resolution::Unchanged,
    }
}

/// Convenience form of [`resolve_direction`] returning the focus after the step.
pub fn next_focus_id(
    direction: Direction,
    current: Option<&ElementId>,
    elements: &[FocusableElement],
) -> Option<ElementId> {
    match resolve_direction(direction, current, elements, &NavigationConfig::default()) {
        Resolution::Initial(id) | Resolution::Moved { to: id, .. } => Some(id),
        Resolution::Unchanged | Resolution::Empty => current.cloned(),
    }
}

fn lies_beyond(direction: Direction, origin: Point, candidate: Point, deadband: f32) -> bool {
    match direction {
        Direction::Up => candidate.y < origin.y - deadband,
        Direction::Down => candidate.y > origin.y + deadband,
        Direction::Left => candidate.x < origin.x - deadband,
        Direction::Right => candidate.x > origin.x + deadband,
    }
}

/// Whether `element` sticks out of the visible part of `viewport`, whose
/// bottom edge is reduced by the nav-bar reserve.
pub fn needs_scroll_into_view(element: &Rect, viewport: &Rect, config: &NavigationConfig) -> bool {
    let visible = viewport.inset(EdgeInsets::bottom(config.nav_bar_reserve));
    !visible.contains_rect(element)
}

/// Topmost element under `point`. Later elements paint over earlier ones, so
/// the last match wins.
pub fn element_at(point: Point, elements: &[FocusableElement]) -> Option<&FocusableElement> {
    elements
        .iter()
        .rev()
        .find(|element| element.bounds.contains_point(point))
}
