//! Text input actions - shared across screens with text input capability

/// Generic text input actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextInputAction {
    /// Character typed
    Char(char),
    /// Backspace pressed
    Backspace,
    /// Clear entire line (Ctrl+U)
    ClearLine,
    /// Escape pressed - typically closes or cancels
    Escape,
    /// Enter pressed
    Confirm,
}
