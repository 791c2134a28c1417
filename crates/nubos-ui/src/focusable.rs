//! Focusable elements reported by the view layer.

use nubos_ui_graphics::{Point, Rect};
use std::fmt;
use std::rc::Rc;

/// Id the view layer gives its close/exit control.
pub const CLOSE_CONTROL_ID: &str = "app-close-button";

/// Stable identifier of a focusable element.
///
/// Identity survives re-layout; geometry does not, which is why the
/// resolver always receives fresh [`FocusableElement`]s.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(Rc<str>);

impl ElementId {
    pub fn new(id: impl Into<Rc<str>>) -> Self {
        Self(id.into())
    }

    /// The well-known id of an app screen's close control.
    pub fn close_control() -> Self {
        Self::new(CLOSE_CONTROL_ID)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ElementId({:?})", &*self.0)
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ElementId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

/// Snapshot of one focusable element: identity, live bounds, and whether
/// it is the screen's close control.
#[derive(Clone, Debug, PartialEq)]
pub struct FocusableElement {
    pub id: ElementId,
    pub bounds: Rect,
    pub is_close: bool,
}

impl FocusableElement {
    pub fn new(id: impl Into<ElementId>, bounds: Rect) -> Self {
        Self {
            id: id.into(),
            bounds,
            is_close: false,
        }
    }

    /// A close control using the well-known id.
    pub fn close_control(bounds: Rect) -> Self {
        Self {
            id: ElementId::close_control(),
            bounds,
            is_close: true,
        }
    }

    pub fn center(&self) -> Point {
        self.bounds.center()
    }
}
