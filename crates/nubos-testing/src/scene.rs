//! In-memory view layer for headless tests.

use nubos_ui::{AppCatalog, AppSlot, ElementId, FocusScene, FocusableElement, GRID_COLUMNS};
use nubos_ui_graphics::Rect;
use std::cell::RefCell;

/// Screen size of the stock test phone, in px.
pub const TEST_SCREEN: Rect = Rect::new(0.0, 0.0, 320.0, 640.0);

/// A [`FocusScene`] backed by plain rectangles.
///
/// Layouts live behind a `RefCell` so a test can re-layout an app while the
/// shell holds the scene (share it through `Rc<TestScene>`).
#[derive(Debug, Default)]
pub struct TestScene {
    layouts: RefCell<Vec<(AppSlot, Vec<FocusableElement>)>>,
    viewport: Option<Rect>,
    screen: Option<Rect>,
    icons: Vec<(AppSlot, Rect)>,
    scrolled: RefCell<Vec<ElementId>>,
    activated: RefCell<Vec<ElementId>>,
}

impl TestScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// A full-size phone: screen bounds, a scroll viewport below a 60 px
    /// header, and icon rectangles for every slot of the stock catalog.
    pub fn phone() -> Self {
        Self::new()
            .with_screen(TEST_SCREEN)
            .with_viewport(Rect::new(0.0, 60.0, TEST_SCREEN.width, TEST_SCREEN.height - 60.0))
            .with_icons(springboard_icon_rects(&AppCatalog::phone(), TEST_SCREEN))
    }

    pub fn with_app(self, slot: AppSlot, elements: Vec<FocusableElement>) -> Self {
        self.set_layout(slot, elements);
        self
    }

    pub fn with_viewport(mut self, viewport: Rect) -> Self {
        self.viewport = Some(viewport);
        self
    }

    pub fn with_screen(mut self, screen: Rect) -> Self {
        self.screen = Some(screen);
        self
    }

    pub fn with_icons(mut self, icons: Vec<(AppSlot, Rect)>) -> Self {
        self.icons = icons;
        self
    }

    /// Replaces the layout of `slot`, as a re-layout or scroll would.
    pub fn set_layout(&self, slot: AppSlot, elements: Vec<FocusableElement>) {
        let mut layouts = self.layouts.borrow_mut();
        match layouts.iter_mut().find(|(existing, _)| *existing == slot) {
            Some((_, layout)) => *layout = elements,
            None => layouts.push((slot, elements)),
        }
    }

    pub fn scrolled(&self) -> Vec<ElementId> {
        self.scrolled.borrow().clone()
    }

    pub fn activated(&self) -> Vec<ElementId> {
        self.activated.borrow().clone()
    }
}

impl FocusScene for TestScene {
    fn focusables(&self, app: AppSlot) -> Vec<FocusableElement> {
        self.layouts
            .borrow()
            .iter()
            .find(|(slot, _)| *slot == app)
            .map(|(_, elements)| elements.clone())
            .unwrap_or_default()
    }

    fn scroll_viewport(&self, _app: AppSlot) -> Option<Rect> {
        self.viewport
    }

    fn scroll_into_view(&self, id: &ElementId) {
        self.scrolled.borrow_mut().push(id.clone());
    }

    fn activate(&self, id: &ElementId) {
        self.activated.borrow_mut().push(id.clone());
    }

    fn screen_bounds(&self) -> Option<Rect> {
        self.screen
    }

    fn springboard_icons(&self) -> Vec<(AppSlot, Rect)> {
        self.icons.clone()
    }
}

/// Lays the catalog out the way the home screen draws it: a grid of square
/// cells from the top and the dock in a strip along the bottom.
pub fn springboard_icon_rects(catalog: &AppCatalog, screen: Rect) -> Vec<(AppSlot, Rect)> {
    let cell = screen.width / GRID_COLUMNS as f32;
    let dock_top = screen.bottom() - cell;
    let dock_cell = screen.width / catalog.dock_len().max(1) as f32;
    catalog
        .slots()
        .map(|(slot, entry)| {
            let rect = if entry.is_dock {
                let position = (slot.index() - catalog.grid_len()) as f32;
                Rect::new(screen.x + position * dock_cell, dock_top, dock_cell, cell)
            } else {
                let column = (slot.index() % GRID_COLUMNS) as f32;
                let row = (slot.index() / GRID_COLUMNS) as f32;
                Rect::new(screen.x + column * cell, screen.y + row * cell, cell, cell)
            };
            (slot, rect)
        })
        .collect()
}
