//! Slash Menu Keys
//!
//! The menu does not read terminal events itself. The host maps its own key
//! events to [`MenuKey`] values and feeds them to
//! [`SlashMenu::handle_key`](crate::SlashMenu::handle_key) before the key
//! reaches the document.

/// Keys the slash menu reacts to.
///
/// Keys the menu has no opinion about are still worth forwarding as
/// [`MenuKey::Other`] so the host can keep a single code path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKey {
    /// A literal character inserted into the document
    Char(char),
    /// Backspace (delete the character before the cursor)
    Backspace,
    /// Enter / Return
    Enter,
    /// Escape
    Escape,
    /// Arrow up
    Up,
    /// Arrow down
    Down,
    /// Any other key (left/right, home/end, function keys, ...)
    Other,
}

impl MenuKey {
    /// Check if this key inserts text into the document
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Char(_))
    }
}
