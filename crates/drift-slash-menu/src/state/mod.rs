//! Slash menu state: trigger detection, filtering, selection.

mod config;
mod filter;
mod session;
mod slash_menu;
mod trigger;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::{BackspacePolicy, SlashMenuConfig, TriggerPosition};
pub use filter::{filter_commands, group_by_category, CommandGroup, FilteredCommands};
pub use session::PaletteSession;
pub use slash_menu::SlashMenu;
pub use trigger::TriggerDetector;
