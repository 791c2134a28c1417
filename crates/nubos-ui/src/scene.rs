//! View-layer collaborator.

use crate::focusable::{ElementId, FocusableElement};
use crate::springboard::AppSlot;
use nubos_ui_graphics::Rect;
use std::rc::Rc;

/// Narrow interface the shell uses to query and drive the rendered UI.
///
/// Queries are made on every intent and must be cheap. Every method except
/// [`FocusScene::focusables`] defaults to "unavailable", which the shell
/// treats as a no-op.
pub trait FocusScene {
    /// Focusable elements of an open app, in document order, with live bounds.
    fn focusables(&self, app: AppSlot) -> Vec<FocusableElement>;

    /// Bounds of the app's scroll container.
    fn scroll_viewport(&self, _app: AppSlot) -> Option<Rect> {
        None
    }

    /// Smoothly scrolls so that `id` is centered in its container.
    fn scroll_into_view(&self, _id: &ElementId) {}

    /// Runs the element's own activation behavior.
    fn activate(&self, _id: &ElementId) {}

    /// Bounds of the phone screen, used to place the cursor.
    fn screen_bounds(&self) -> Option<Rect> {
        None
    }

    /// Springboard icon bounds, grid and dock.
    fn springboard_icons(&self) -> Vec<(AppSlot, Rect)> {
        Vec::new()
    }
}

impl<S: FocusScene + ?Sized> FocusScene for Rc<S> {
    fn focusables(&self, app: AppSlot) -> Vec<FocusableElement> {
        (**self).focusables(app)
    }

    fn scroll_viewport(&self, app: AppSlot) -> Option<Rect> {
        (**self).scroll_viewport(app)
    }

    fn scroll_into_view(&self, id: &ElementId) {
        (**self).scroll_into_view(id)
    }

    fn activate(&self, id: &ElementId) {
        (**self).activate(id)
    }

    fn screen_bounds(&self) -> Option<Rect> {
        (**self).screen_bounds()
    }

    fn springboard_icons(&self) -> Vec<(AppSlot, Rect)> {
        (**self).springboard_icons()
    }
}
