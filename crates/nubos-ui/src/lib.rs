//! Focus, spatial navigation and the springboard model for the nubos
//! phone shell.

mod cursor_overlay;
mod focus;
mod focusable;
pub mod navigation;
mod scene;
mod springboard;

pub use cursor_overlay::{
    CursorConfig, CursorOverlay, CURSOR_HIDE_DELAY_MS, CURSOR_HOME, NUB_ANCHOR,
};
pub use focus::FocusManager;
pub use focusable::{ElementId, FocusableElement, CLOSE_CONTROL_ID};
pub use navigation::{
    element_at, needs_scroll_into_view, next_focus_id, resolve_direction, NavigationConfig,
    Resolution,
};
pub use scene::FocusScene;
pub use springboard::{AppCatalog, AppEntry, AppSlot, GRID_COLUMNS};

pub mod prelude {
    pub use crate::focusable::{ElementId, FocusableElement};
    pub use crate::navigation::{resolve_direction, NavigationConfig, Resolution};
    pub use crate::scene::FocusScene;
    pub use crate::springboard::{AppCatalog, AppEntry, AppSlot};
    pub use crate::{CursorOverlay, FocusManager};
}
