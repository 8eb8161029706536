//! Tab rename popup actions

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameTabAction {
    /// Open the popup for the active tab
    Start,
    Char(char),
    Backspace,
    Clear,
    /// Apply the entered title
    Submit,
    /// Close the popup without renaming
    Cancel,
}
