//! Slash menu overlay widget.

use super::layout::{MenuLayout, MenuRow, DEFAULT_MAX_ROWS};
use crate::model::Command;
use crate::state::SlashMenu;
use crate::traits::MenuTheme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Widget};

/// Widget for the slash menu overlay.
///
/// Render it over the whole frame; it positions itself at the menu anchor
/// and draws nothing while the menu is closed.
pub struct SlashMenuWidget<'a, T: MenuTheme> {
    menu: &'a SlashMenu,
    theme: &'a T,
    max_rows: u16,
}

impl<'a, T: MenuTheme> SlashMenuWidget<'a, T> {
    pub fn new(menu: &'a SlashMenu, theme: &'a T) -> Self {
        Self {
            menu,
            theme,
            max_rows: DEFAULT_MAX_ROWS,
        }
    }

    /// Limit the number of list rows shown at once.
    pub fn max_rows(mut self, max_rows: u16) -> Self {
        self.max_rows = max_rows;
        self
    }
}

impl<T: MenuTheme> Widget for SlashMenuWidget<'_, T> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(layout) = MenuLayout::compute(self.menu, area, self.max_rows) else {
            return;
        };

        Clear.render(layout.area, buf);

        let title = format!(" {}{} ", self.menu.config().trigger, self.menu.query());
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border()))
            .style(Style::default().bg(self.theme.background()))
            .title(title);
        if let Some(command) = self.menu.selected_command() {
            block = block.title_bottom(
                Line::from(format!(" {} ", command.description))
                    .style(Style::default().fg(self.theme.muted())),
            );
        }
        block.render(layout.area, buf);

        let inner = layout.inner();
        let selected = self.menu.selected_index();
        for (y, row) in layout.visible_rows() {
            match row {
                MenuRow::Header(category) => {
                    buf.set_stringn(
                        inner.x,
                        y,
                        category.to_string(),
                        inner.width as usize,
                        Style::default()
                            .fg(self.theme.group_header())
                            .add_modifier(Modifier::BOLD),
                    );
                }
                MenuRow::Item { index, command } => {
                    self.render_item(command, *index == selected, inner.x, y, inner.width, buf);
                }
                MenuRow::Empty => {
                    buf.set_stringn(
                        inner.x + 1,
                        y,
                        "No matching blocks",
                        inner.width.saturating_sub(1) as usize,
                        Style::default()
                            .fg(self.theme.muted())
                            .add_modifier(Modifier::ITALIC),
                    );
                }
            }
        }
    }
}

impl<T: MenuTheme> SlashMenuWidget<'_, T> {
    fn render_item(
        &self,
        command: &Command,
        is_selected: bool,
        x: u16,
        y: u16,
        width: u16,
        buf: &mut Buffer,
    ) {
        let style = if is_selected {
            Style::default()
                .fg(self.theme.selected_foreground())
                .bg(self.theme.selected_background())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.theme.item_foreground())
        };

        if is_selected {
            buf.set_style(Rect::new(x, y, width, 1), style);
        }

        let badge = command.badge().map(|badge| format!(" {} ", badge));
        let badge_width = badge.as_ref().map_or(0, |b| b.chars().count() as u16);
        let title_width = width.saturating_sub(badge_width + 2);
        buf.set_stringn(x + 2, y, command.title, title_width as usize, style);

        if let Some(badge) = badge {
            let badge_x = x + width.saturating_sub(badge_width);
            let badge_style = if is_selected {
                style.fg(self.theme.badge())
            } else {
                Style::default().fg(self.theme.badge())
            };
            buf.set_stringn(badge_x, y, badge, badge_width as usize, badge_style);
        }
    }
}
