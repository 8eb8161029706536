//! Placement and row layout of the menu overlay.

use crate::model::{Category, Command};
use crate::state::SlashMenu;
use ratatui::layout::{Position, Rect};

/// Preferred width of the menu, borders included.
pub const MENU_WIDTH: u16 = 46;

/// Visible rows used when the host does not choose a height.
pub const DEFAULT_MAX_ROWS: u16 = 12;

/// One line inside the menu.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuRow {
    /// Category label above its commands
    Header(Category),
    /// A command, with its index in the flattened list
    Item {
        index: usize,
        command: &'static Command,
    },
    /// Shown instead of the list when nothing matches
    Empty,
}

/// Screen area and visible rows of an open menu.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuLayout {
    /// Outer area, borders included
    pub area: Rect,
    rows: Vec<MenuRow>,
    scroll: usize,
}

impl MenuLayout {
    /// Lay out the menu on `screen`, or `None` while it is closed.
    ///
    /// The menu opens one row below its anchor. When there is no room below
    /// it flips above the anchor, and it is always clamped to the screen.
    pub fn compute(menu: &SlashMenu, screen: Rect, max_rows: u16) -> Option<Self> {
        let anchor = menu.anchor()?;
        if screen.width < 3 || screen.height < 3 {
            return None;
        }

        let rows = build_rows(menu);
        let body = (rows.len() as u16).min(max_rows.max(1));
        let height = (body + 2).min(screen.height);
        let width = MENU_WIDTH.min(screen.width);

        let below = anchor.y.saturating_add(1);
        let y = if below + height <= screen.bottom() {
            below
        } else if anchor.y >= screen.y + height {
            anchor.y - height
        } else {
            screen.bottom() - height
        };
        let x = anchor.x.clamp(screen.x, screen.right() - width);

        let area = Rect::new(x, y, width, height);
        let visible = area.height.saturating_sub(2) as usize;
        let selected = menu.selected_index();
        let selected_row = rows
            .iter()
            .position(|row| matches!(row, MenuRow::Item { index, .. } if *index == selected))
            .unwrap_or(0);
        let scroll = if selected_row >= visible {
            selected_row + 1 - visible
        } else {
            0
        };

        Some(Self { area, rows, scroll })
    }

    /// Area inside the border
    pub fn inner(&self) -> Rect {
        Rect::new(
            self.area.x + 1,
            self.area.y + 1,
            self.area.width.saturating_sub(2),
            self.area.height.saturating_sub(2),
        )
    }

    /// Rows currently on screen, with their y coordinate
    pub fn visible_rows(&self) -> impl Iterator<Item = (u16, &MenuRow)> + '_ {
        let inner = self.inner();
        self.rows
            .iter()
            .skip(self.scroll)
            .take(inner.height as usize)
            .enumerate()
            .map(move |(i, row)| (inner.y + i as u16, row))
    }

    /// Flattened index of the command drawn at `position`
    pub fn command_index_at(&self, position: Position) -> Option<usize> {
        if !self.inner().contains(position) {
            return None;
        }
        self.visible_rows()
            .find(|(y, _)| *y == position.y)
            .and_then(|(_, row)| match row {
                MenuRow::Item { index, .. } => Some(*index),
                _ => None,
            })
    }
}

/// Outer bounds of the open menu, used for outside-click detection
pub fn menu_bounds(menu: &SlashMenu, screen: Rect, max_rows: u16) -> Option<Rect> {
    MenuLayout::compute(menu, screen, max_rows).map(|layout| layout.area)
}

fn build_rows(menu: &SlashMenu) -> Vec<MenuRow> {
    let filtered = menu.filtered();
    if filtered.is_empty() {
        return vec![MenuRow::Empty];
    }

    let mut rows = Vec::with_capacity(filtered.len() + filtered.groups().len());
    let mut index = 0;
    for group in filtered.groups() {
        rows.push(MenuRow::Header(group.category));
        for command in group.commands.iter().copied() {
            rows.push(MenuRow::Item { index, command });
            index += 1;
        }
    }
    rows
}
