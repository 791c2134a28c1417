//! App catalog and springboard grid navigation.

use nubos_foundation::Direction;
use nubos_ui_graphics::Color;
use std::borrow::Cow;
use std::fmt;

/// Icons per springboard row.
pub const GRID_COLUMNS: usize = 4;

/// Index into the [`AppCatalog`]: grid slots first, then dock slots.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AppSlot(pub usize);

impl AppSlot {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for AppSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "app-{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppEntry {
    pub name: Cow<'static, str>,
    pub icon: Cow<'static, str>,
    pub color: Color,
    pub is_dock: bool,
    /// Not an app: activating the slot runs a shell action instead of opening.
    pub is_action: bool,
}

impl AppEntry {
    pub fn app(
        name: impl Into<Cow<'static, str>>,
        icon: impl Into<Cow<'static, str>>,
        color: Color,
    ) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
            color,
            is_dock: false,
            is_action: false,
        }
    }

    pub fn action(
        name: impl Into<Cow<'static, str>>,
        icon: impl Into<Cow<'static, str>>,
        color: Color,
    ) -> Self {
        Self {
            is_action: true,
            ..Self::app(name, icon, color)
        }
    }

    pub fn in_dock(mut self) -> Self {
        self.is_dock = true;
        self
    }
}

/// Ordered set of springboard slots.
///
/// Grid entries always precede dock entries; [`AppCatalog::new`] enforces
/// the ordering with a stable partition.
#[derive(Clone, Debug, PartialEq)]
pub struct AppCatalog {
    entries: Vec<AppEntry>,
    columns: usize,
    grid_len: usize,
}

impl Default for AppCatalog {
    fn default() -> Self {
        Self::phone()
    }
}

impl AppCatalog {
    pub fn new(entries: Vec<AppEntry>) -> Self {
        let (mut grid, dock): (Vec<_>, Vec<_>) =
            entries.into_iter().partition(|entry| !entry.is_dock);
        let grid_len = grid.len();
        grid.extend(dock);
        Self {
            entries: grid,
            columns: GRID_COLUMNS,
            grid_len,
        }
    }

    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns.max(1);
        self
    }

    /// The stock home screen: twelve grid slots (slot 10 rotates the
    /// device) and a three-slot dock.
    pub fn phone() -> Self {
        Self::new(vec![
            AppEntry::app("Clock", "⏰", Color::from_hex(0xe67e22)),
            AppEntry::app("Maps", "🗺️", Color::from_hex(0x1abc9c)),
            AppEntry::app("Photos", "🖼️", Color::from_hex(0xe74c3c)),
            AppEntry::app("Camera", "📷", Color::from_hex(0x3498db)),
            AppEntry::app("Weather", "☀️", Color::from_hex(0x3498db)),
            AppEntry::app("Notes", "📝", Color::from_hex(0xf1c40f)),
            AppEntry::app("Music", "🎵", Color::from_hex(0xf39c12)),
            AppEntry::app("Mail", "✉️", Color::from_hex(0x34495e)),
            AppEntry::app("Settings", "⚙️", Color::from_hex(0x95a5a6)),
            AppEntry::app("Messages", "💬", Color::from_hex(0x2ecc71)),
            AppEntry::action("Rotate", "🔄", Color::from_hex(0x7f8c8d)),
            AppEntry::app("Safari", "🌐", Color::from_hex(0x3498db)),
            AppEntry::app("Phone", "📞", Color::from_hex(0x2ecc71)).in_dock(),
            AppEntry::app("Mail", "✉️", Color::from_hex(0x34495e)).in_dock(),
            AppEntry::app("Safari", "🌐", Color::from_hex(0x3498db)).in_dock(),
        ])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn grid_len(&self) -> usize {
        self.grid_len
    }

    pub fn dock_len(&self) -> usize {
        self.entries.len() - self.grid_len
    }

    pub fn get(&self, slot: AppSlot) -> Option<&AppEntry> {
        self.entries.get(slot.0)
    }

    pub fn slots(&self) -> impl Iterator<Item = (AppSlot, &AppEntry)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, entry)| (AppSlot(index), entry))
    }

    pub fn is_dock(&self, slot: AppSlot) -> bool {
        slot.0 >= self.grid_len && slot.0 < self.entries.len()
    }

    /// Moves the springboard selection one step.
    ///
    /// Grid: no column wrap, the top and bottom rows clamp except that down
    /// from the bottom row enters the dock at the same column (clamped to the
    /// dock length). Dock: up returns to the bottom grid row at the same
    /// column, down and both ends clamp. Unknown slots are returned as-is.
    pub fn step(&self, from: AppSlot, direction: Direction) -> AppSlot {
        let index = from.0;
        if index >= self.entries.len() {
            return from;
        }
        let next = if index < self.grid_len {
            self.step_in_grid(index, direction)
        } else {
            self.step_in_dock(index - self.grid_len, direction)
        };
        AppSlot(next)
    }

    fn step_in_grid(&self, index: usize, direction: Direction) -> usize {
        let columns = self.columns;
        let row = index / columns;
        let column = index % columns;
        let last_row = (self.grid_len - 1) / columns;
        match direction {
            Direction::Left if column > 0 => index - 1,
            Direction::Right if column + 1 < columns && index + 1 < self.grid_len => index + 1,
            Direction::Up if row > 0 => index - columns,
            Direction::Down if row < last_row => (index + columns).min(self.grid_len - 1),
            Direction::Down if self.dock_len() > 0 => {
                self.grid_len + column.min(self.dock_len() - 1)
            }
            _ => index,
        }
    }

    fn step_in_dock(&self, position: usize, direction: Direction) -> usize {
        let index = self.grid_len + position;
        match direction {
            Direction::Left if position > 0 => index - 1,
            Direction::Right if position + 1 < self.dock_len() => index + 1,
            Direction::Up if self.grid_len > 0 => {
                let bottom_row_start = (self.grid_len - 1) / self.columns * self.columns;
                (bottom_row_start + position).min(self.grid_len - 1)
            }
            _ => index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(from: usize, direction: Direction) -> usize {
        AppCatalog::phone().step(AppSlot(from), direction).0
    }

    #[test]
    fn stock_catalog_layout() {
        let catalog = AppCatalog::phone();
        assert_eq!(catalog.len(), 15);
        assert_eq!(catalog.grid_len(), 12);
        assert_eq!(catalog.dock_len(), 3);
        assert!(catalog.get(AppSlot(10)).is_some_and(|entry| entry.is_action));
        assert!(catalog.is_dock(AppSlot(12)));
        assert!(!catalog.is_dock(AppSlot(11)));
    }

    #[test]
    fn grid_edges_clamp_without_wrap() {
        assert_eq!(step(3, Direction::Right), 3);
        assert_eq!(step(0, Direction::Left), 0);
        assert_eq!(step(4, Direction::Left), 4);
        assert_eq!(step(2, Direction::Up), 2);
        assert_eq!(step(5, Direction::Right), 6);
        assert_eq!(step(5, Direction::Down), 9);
        assert_eq!(step(9, Direction::Up), 5);
    }

    #[test]
    fn bottom_row_and_dock_connect() {
        assert_eq!(step(8, Direction::Down), 12);
        assert_eq!(step(10, Direction::Down), 14);
        assert_eq!(step(11, Direction::Down), 14);
        assert_eq!(step(13, Direction::Up), 9);
        assert_eq!(step(14, Direction::Up), 10);
    }

    #[test]
    fn dock_clamps_at_both_ends() {
        assert_eq!(step(12, Direction::Left), 12);
        assert_eq!(step(14, Direction::Right), 14);
        assert_eq!(step(13, Direction::Down), 13);
        assert_eq!(step(12, Direction::Right), 13);
    }

    #[test]
    fn dock_entries_are_moved_after_grid() {
        let catalog = AppCatalog::new(vec![
            AppEntry::app("Phone", "📞", Color::BLACK).in_dock(),
            AppEntry::app("Clock", "⏰", Color::WHITE),
        ]);
        assert_eq!(catalog.get(AppSlot(0)).map(|entry| entry.name.as_ref()), Some("Clock"));
        assert!(catalog.is_dock(AppSlot(1)));
        assert_eq!(catalog.step(AppSlot(0), Direction::Down), AppSlot(1));
        assert_eq!(catalog.step(AppSlot(1), Direction::Up), AppSlot(0));
    }

    #[test]
    fn custom_column_count_reshapes_the_grid() {
        let entries = (0..6)
            .map(|index| AppEntry::app(format!("App {index}"), "•", Color::WHITE))
            .collect();
        let catalog = AppCatalog::new(entries).with_columns(3);
        assert_eq!(catalog.columns(), 3);
        assert_eq!(catalog.step(AppSlot(2), Direction::Right), AppSlot(2));
        assert_eq!(catalog.step(AppSlot(1), Direction::Down), AppSlot(4));
        assert_eq!(catalog.step(AppSlot(5), Direction::Down), AppSlot(5));

        let single = AppCatalog::new(Vec::new()).with_columns(0);
        assert_eq!(single.columns(), 1);
    }

    #[test]
    fn unknown_slot_is_returned_unchanged() {
        assert_eq!(step(40, Direction::Down), 40);
    }
}
