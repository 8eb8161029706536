//! Data model for the slash menu: commands, categories and edits.

mod catalog;
mod command;
mod edit;

pub use catalog::{find_command, COMMANDS};
pub use command::{Category, Command};
pub use edit::{BlockEdit, BlockKind, Content, HeadingLevel};
