use nubos_ui::{AppSlot, ElementId};
use nubos_ui_graphics::Point;

/// Notifications for the view layer, drained with `AppShell::take_events`.
#[derive(Clone, Debug, PartialEq)]
pub enum ShellEvent {
    /// Springboard selection moved.
    SelectionChanged(AppSlot),
    /// Cursor hover over the springboard changed.
    HoverChanged(Option<AppSlot>),
    /// Focus inside the open app moved.
    FocusChanged(ElementId),
    ScrollIntoView(ElementId),
    ElementActivated(ElementId),
    AppOpening(AppSlot),
    AppOpened(AppSlot),
    AppClosing(AppSlot),
    AppClosed(AppSlot),
    FlipToggled(bool),
    LongPressed,
    /// Cursor position in percent of the screen.
    CursorMoved(Point),
    CursorHidden,
}
