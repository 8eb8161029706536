//! Command identifiers
//!
//! Commands are the semantic actions users can bind keys to. The enum is
//! serialized as snake_case (e.g., `SlashMenuOpen` -> `"slash_menu_open"`).

use serde::{Deserialize, Serialize};

use crate::actions::{
    Action, EditorAction, GlobalAction, NavigationAction, RenameTabAction, StatusBarAction,
};

/// Unique identifier for each command in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandId {
    // === Global ===
    /// Quit the application
    GlobalQuit,

    // === Editor ===
    /// Open the slash menu at the cursor
    SlashMenuOpen,
    /// Jump to the start of the document
    DocumentStart,
    /// Jump to the end of the document
    DocumentEnd,

    // === Tabs ===
    /// Open a new untitled document
    TabNew,
    /// Close the active document
    TabClose,
    TabNext,
    TabPrevious,
    /// Rename the active document
    TabRename,

    // === Status bar ===
    /// Clear status messages
    StatusBarClear,
}

impl CommandId {
    /// Convert this command to the action it triggers
    pub fn to_action(self) -> Action {
        match self {
            Self::GlobalQuit => Action::Global(GlobalAction::Quit),
            Self::SlashMenuOpen => Action::Editor(EditorAction::OpenSlashMenu),
            Self::DocumentStart => Action::Navigate(NavigationAction::ToTop),
            Self::DocumentEnd => Action::Navigate(NavigationAction::ToBottom),
            Self::TabNew => Action::Editor(EditorAction::NewTab),
            Self::TabClose => Action::Editor(EditorAction::CloseTab),
            Self::TabNext => Action::Editor(EditorAction::NextTab),
            Self::TabPrevious => Action::Editor(EditorAction::PreviousTab),
            Self::TabRename => Action::RenameTab(RenameTabAction::Start),
            Self::StatusBarClear => Action::StatusBar(StatusBarAction::Clear),
        }
    }

    /// Short title for hints
    pub fn title(&self) -> &'static str {
        match self {
            Self::GlobalQuit => "Quit",
            Self::SlashMenuOpen => "Insert block",
            Self::DocumentStart => "Top",
            Self::DocumentEnd => "Bottom",
            Self::TabNew => "New tab",
            Self::TabClose => "Close tab",
            Self::TabNext => "Next tab",
            Self::TabPrevious => "Prev tab",
            Self::TabRename => "Rename tab",
            Self::StatusBarClear => "Clear status",
        }
    }

    /// Longer description
    pub fn description(&self) -> &'static str {
        match self {
            Self::GlobalQuit => "Quit the editor",
            Self::SlashMenuOpen => "Open the slash menu at the cursor",
            Self::DocumentStart => "Move the cursor to the start of the document",
            Self::DocumentEnd => "Move the cursor to the end of the document",
            Self::TabNew => "Open a new untitled document",
            Self::TabClose => "Close the active document unless it is the last one",
            Self::TabNext => "Switch to the next document",
            Self::TabPrevious => "Switch to the previous document",
            Self::TabRename => "Rename the active document",
            Self::StatusBarClear => "Clear the status bar messages",
        }
    }
}
