//! Synthetic layouts for the demo phone.
//!
//! Every app screen is a 60 px header holding the close button, followed by
//! stacked content sections inside a scroll container. Layout is computed
//! once; scrolling shifts the reported bounds.

use nubos_ui::navigation::NAV_BAR_RESERVE;
use nubos_ui::{AppCatalog, AppSlot, ElementId, FocusScene, FocusableElement, GRID_COLUMNS};
use nubos_ui_graphics::{Point, Rect};
use std::cell::{Cell, RefCell};

/// Phone screen in px.
pub const SCREEN: Rect = Rect::new(0.0, 0.0, 390.0, 844.0);

pub const HEADER_HEIGHT: f32 = 60.0;
const PADDING: f32 = 16.0;
const GAP: f32 = 12.0;
const ROW_HEIGHT: f32 = 56.0;

/// One block of focusable content on an app screen.
#[derive(Clone, Debug, PartialEq)]
pub enum Section {
    /// Full-width rows stacked vertically.
    List(Vec<&'static str>),
    /// Equal-width buttons side by side.
    Row(Vec<&'static str>),
    /// `count` square tiles named `{prefix}-{index}`.
    Grid {
        prefix: &'static str,
        columns: usize,
        count: usize,
    },
}

/// Content sections for an app, by catalog name.
pub fn sections_for(app: &str) -> Vec<Section> {
    use Section::*;
    match app {
        "Clock" => vec![Row(vec!["alarm", "timer", "stopwatch"])],
        "Maps" => vec![
            List(vec!["search"]),
            Grid {
                prefix: "place",
                columns: 2,
                count: 4,
            },
        ],
        "Photos" => vec![Grid {
            prefix: "photo",
            columns: 3,
            count: 18,
        }],
        "Camera" => vec![
            Row(vec!["photo", "video", "portrait", "pano"]),
            List(vec!["shutter"]),
        ],
        "Weather" => vec![
            Row(vec!["feels-like", "humidity", "wind"]),
            Row(vec!["mon", "tue", "wed", "thu", "fri"]),
        ],
        "Notes" => vec![
            List(vec!["shopping-list", "meeting-notes", "ideas", "todo"]),
            Row(vec!["bold", "italic", "underline"]),
            List(vec!["editor"]),
        ],
        "Music" => vec![
            List(vec!["progress"]),
            Row(vec!["previous", "play-pause", "next"]),
        ],
        "Mail" => vec![List(vec!["inbox-1", "inbox-2", "inbox-3", "inbox-4"])],
        "Settings" => vec![List(vec![
            "notifications",
            "sound-haptics",
            "display-brightness",
            "privacy",
            "general",
            "accessibility",
        ])],
        "Messages" => vec![List(vec!["mom", "work-group", "jane", "delivery"])],
        "Safari" => vec![
            List(vec!["address-bar"]),
            Grid {
                prefix: "favorite",
                columns: 4,
                count: 8,
            },
        ],
        "Phone" => vec![
            Grid {
                prefix: "key",
                columns: 3,
                count: 12,
            },
            Row(vec!["call"]),
        ],
        _ => Vec::new(),
    }
}

/// Lays out an app screen in document order: close button, then sections.
pub fn layout_app(app: &str, screen: Rect) -> Vec<FocusableElement> {
    let mut elements = vec![FocusableElement::close_control(Rect::new(
        screen.right() - PADDING - 40.0,
        screen.top() + 10.0,
        40.0,
        40.0,
    ))];

    let left = screen.left() + PADDING;
    let width = screen.width - PADDING * 2.0;
    let mut y = screen.top() + HEADER_HEIGHT + PADDING;
    for section in sections_for(app) {
        match section {
            Section::List(ids) => {
                for id in ids {
                    elements.push(FocusableElement::new(id, Rect::new(left, y, width, ROW_HEIGHT)));
                    y += ROW_HEIGHT + GAP;
                }
            }
            Section::Row(ids) => {
                let cell = (width - GAP * (ids.len() as f32 - 1.0)) / ids.len() as f32;
                for (index, id) in ids.into_iter().enumerate() {
                    let x = left + index as f32 * (cell + GAP);
                    elements.push(FocusableElement::new(id, Rect::new(x, y, cell, ROW_HEIGHT)));
                }
                y += ROW_HEIGHT + GAP;
            }
            Section::Grid {
                prefix,
                columns,
                count,
            } => {
                let columns = columns.max(1);
                let cell = (width - GAP * (columns as f32 - 1.0)) / columns as f32;
                for index in 0..count {
                    let column = (index % columns) as f32;
                    let row = (index / columns) as f32;
                    let bounds = Rect::new(
                        left + column * (cell + GAP),
                        y + row * (cell + GAP),
                        cell,
                        cell,
                    );
                    elements.push(FocusableElement::new(format!("{prefix}-{index}"), bounds));
                }
                let rows = count.div_ceil(columns) as f32;
                y += rows * (cell + GAP);
            }
        }
    }
    elements
}

/// Home screen icon placement: a grid under the status bar and the dock in
/// a strip along the bottom.
pub fn springboard_layout(catalog: &AppCatalog, screen: Rect) -> Vec<(AppSlot, Rect)> {
    let cell = screen.width / GRID_COLUMNS as f32;
    let dock_cell = screen.width / catalog.dock_len().max(1) as f32;
    let dock_top = screen.bottom() - cell - PADDING;
    catalog
        .slots()
        .map(|(slot, entry)| {
            let bounds = if entry.is_dock {
                let position = (slot.index() - catalog.grid_len()) as f32;
                Rect::new(screen.left() + position * dock_cell, dock_top, dock_cell, cell)
            } else {
                let column = (slot.index() % GRID_COLUMNS) as f32;
                let row = (slot.index() / GRID_COLUMNS) as f32;
                Rect::new(
                    screen.left() + column * cell,
                    screen.top() + HEADER_HEIGHT + row * cell,
                    cell,
                    cell,
                )
            };
            (slot, bounds)
        })
        .collect()
}

/// The demo's view layer.
///
/// Holds one layout per catalog slot plus a vertical scroll offset per slot.
/// `scroll_into_view` applies to the app the shell queried most recently.
pub struct PhoneScene {
    screen: Rect,
    layouts: Vec<Vec<FocusableElement>>,
    icons: Vec<(AppSlot, Rect)>,
    scroll: RefCell<Vec<f32>>,
    active: Cell<Option<AppSlot>>,
    activated: RefCell<Vec<ElementId>>,
}

impl PhoneScene {
    pub fn new(catalog: &AppCatalog) -> Self {
        Self::with_screen(catalog, SCREEN)
    }

    pub fn with_screen(catalog: &AppCatalog, screen: Rect) -> Self {
        let layouts: Vec<_> = catalog
            .slots()
            .map(|(_, entry)| layout_app(&entry.name, screen))
            .collect();
        Self {
            screen,
            scroll: RefCell::new(vec![0.0; layouts.len()]),
            layouts,
            icons: springboard_layout(catalog, screen),
            active: Cell::new(None),
            activated: RefCell::new(Vec::new()),
        }
    }

    /// Scroll container of every app: everything below the header.
    pub fn viewport(&self) -> Rect {
        Rect::from_ltrb(
            self.screen.left(),
            self.screen.top() + HEADER_HEIGHT,
            self.screen.right(),
            self.screen.bottom(),
        )
    }

    pub fn scroll_offset(&self, slot: AppSlot) -> f32 {
        self.scroll.borrow().get(slot.index()).copied().unwrap_or(0.0)
    }

    pub fn activated(&self) -> Vec<ElementId> {
        self.activated.borrow().clone()
    }

    /// Maximum scroll so the last element can clear the navigation bar.
    fn max_scroll(&self, slot: AppSlot) -> f32 {
        let content_bottom = self
            .layouts
            .get(slot.index())
            .and_then(|layout| {
                layout
                    .iter()
                    .map(|element| element.bounds.bottom())
                    .reduce(f32::max)
            })
            .unwrap_or(0.0);
        (content_bottom + NAV_BAR_RESERVE - self.screen.bottom()).max(0.0)
    }
}

impl FocusScene for PhoneScene {
    fn focusables(&self, app: AppSlot) -> Vec<FocusableElement> {
        self.active.set(Some(app));
        let Some(layout) = self.layouts.get(app.index()) else {
            return Vec::new();
        };
        let offset = self.scroll_offset(app);
        layout
            .iter()
            .map(|element| {
                if element.is_close {
                    return element.clone();
                }
                FocusableElement {
                    bounds: element.bounds.translate(0.0, -offset),
                    ..element.clone()
                }
            })
            .collect()
    }

    fn scroll_viewport(&self, _app: AppSlot) -> Option<Rect> {
        Some(self.viewport())
    }

    fn scroll_into_view(&self, id: &ElementId) {
        let Some(slot) = self.active.get() else {
            return;
        };
        let Some(element) = self
            .layouts
            .get(slot.index())
            .and_then(|layout| layout.iter().find(|element| element.id == *id))
        else {
            return;
        };
        let viewport = self.viewport();
        let centered = element.bounds.center().y - viewport.center().y;
        let offset = centered.clamp(0.0, self.max_scroll(slot));
        log::debug!("scrolling {slot} to {offset:.0}px for {id}");
        if let Some(current) = self.scroll.borrow_mut().get_mut(slot.index()) {
            *current = offset;
        }
    }

    fn activate(&self, id: &ElementId) {
        log::info!("activated {id}");
        self.activated.borrow_mut().push(id.clone());
    }

    fn screen_bounds(&self) -> Option<Rect> {
        Some(self.screen)
    }

    fn springboard_icons(&self) -> Vec<(AppSlot, Rect)> {
        self.icons.clone()
    }
}

/// Center of an icon, handy for placing the cursor in scripts and tests.
pub fn icon_center(icons: &[(AppSlot, Rect)], slot: AppSlot) -> Option<Point> {
    icons
        .iter()
        .find(|(candidate, _)| *candidate == slot)
        .map(|(_, bounds)| bounds.center())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_app_screen_starts_with_its_close_control() {
        let catalog = AppCatalog::phone();
        let scene = PhoneScene::new(&catalog);
        for (slot, entry) in catalog.slots() {
            let elements = scene.focusables(slot);
            assert!(elements[0].is_close, "{} lacks a close control", entry.name);
            if !entry.is_action {
                assert!(elements.len() > 1, "{} has no content", entry.name);
            }
        }
    }

    #[test]
    fn photos_grid_runs_past_the_nav_bar_reserve() {
        let elements = layout_app("Photos", SCREEN);
        let lowest = elements
            .iter()
            .map(|element| element.bounds.bottom())
            .fold(0.0, f32::max);
        assert!(lowest > SCREEN.bottom() - NAV_BAR_RESERVE);
    }

    #[test]
    fn scrolling_shifts_content_but_not_the_header() {
        let catalog = AppCatalog::phone();
        let scene = PhoneScene::new(&catalog);
        let photos = AppSlot(2);
        let before = scene.focusables(photos);
        scene.scroll_into_view(&ElementId::from("photo-11"));
        let after = scene.focusables(photos);

        assert!(scene.scroll_offset(photos) > 0.0);
        assert_eq!(before[0].bounds, after[0].bounds);
        assert!(after[12].bounds.top() < before[12].bounds.top());
    }

    #[test]
    fn icons_cover_the_whole_catalog() {
        let catalog = AppCatalog::phone();
        let icons = springboard_layout(&catalog, SCREEN);
        assert_eq!(icons.len(), catalog.len());
        let dock = icon_center(&icons, AppSlot(13)).map(|center| center.x);
        assert_eq!(dock, Some(195.0));
    }
}
