//! Editor actions

use drift_slash_menu::MenuKey;
use ratatui::layout::Position;

/// A key as seen by the editor, after translation by the editor view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorInput {
    Char(char),
    Backspace,
    Enter,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    /// Ctrl+Home
    DocumentStart,
    /// Ctrl+End
    DocumentEnd,
}

impl EditorInput {
    /// Whether the key changes document text when it reaches the document
    pub fn edits_text(self) -> bool {
        matches!(self, Self::Char(_) | Self::Backspace | Self::Enter)
    }

    /// The key the slash menu gets to see first
    pub fn to_menu_key(self) -> MenuKey {
        match self {
            Self::Char(c) => MenuKey::Char(c),
            Self::Backspace => MenuKey::Backspace,
            Self::Enter => MenuKey::Enter,
            Self::Escape => MenuKey::Escape,
            Self::Up => MenuKey::Up,
            Self::Down => MenuKey::Down,
            Self::Left
            | Self::Right
            | Self::Home
            | Self::End
            | Self::DocumentStart
            | Self::DocumentEnd => MenuKey::Other,
        }
    }
}

/// Actions for the document editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorAction {
    /// Keyboard input, offered to the slash menu before the document
    Input(EditorInput),
    /// Mouse click on the screen
    Click(Position),
    /// Type the trigger character to open the slash menu
    OpenSlashMenu,
    /// Open a new untitled document tab
    NewTab,
    /// Close the active tab (never the last one)
    CloseTab,
    NextTab,
    PreviousTab,
}
