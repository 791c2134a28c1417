//! Selection state of the open app.
//!
//! Exactly one element is focused at a time, or none. The manager is owned
//! by the app shell and only changes in response to resolver output or an
//! app opening/closing.

use crate::focusable::{ElementId, FocusableElement};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FocusManager {
    active_focus_id: Option<ElementId>,
}

impl FocusManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the currently focused element id.
    pub fn active_focus_id(&self) -> Option<&ElementId> {
        self.active_focus_id.as_ref()
    }

    /// Focuses `id`. Returns `true` if the focus actually changed.
    pub fn request_focus(&mut self, id: ElementId) -> bool {
        if self.active_focus_id.as_ref() == Some(&id) {
            return false;
        }
        log::trace!("focus {:?} -> {:?}", self.active_focus_id, id);
        self.active_focus_id = Some(id);
        true
    }

    /// Focuses the screen's default element: its close control if the
    /// layout reports one, otherwise the well-known close id.
    pub fn focus_default(&mut self, elements: &[FocusableElement]) {
        let id = elements
            .iter()
            .find(|element| element.is_close)
            .map(|element| element.id.clone())
            .unwrap_or_else(ElementId::close_control);
        self.active_focus_id = Some(id);
    }

    pub fn clear_focus(&mut self) {
        self.active_focus_id = None;
    }

    pub fn is_focused(&self, id: &ElementId) -> bool {
        self.active_focus_id.as_ref() == Some(id)
    }

    /// Whether the focused element is the close control, judged against the
    /// current layout and the well-known id.
    pub fn is_close_focused(&self, elements: &[FocusableElement]) -> bool {
        let Some(active) = &self.active_focus_id else {
            return false;
        };
        *active == ElementId::close_control()
            || elements
                .iter()
                .any(|element| element.is_close && element.id == *active)
    }
}
