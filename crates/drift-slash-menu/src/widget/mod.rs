//! Ratatui widgets for the slash menu.

mod layout;
mod slash_menu;

pub use layout::{menu_bounds, MenuLayout, MenuRow, DEFAULT_MAX_ROWS, MENU_WIDTH};
pub use slash_menu::SlashMenuWidget;
