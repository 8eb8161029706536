//! Navigation actions - shared across screens
//!
//! Generic cursor/selection movement that views translate into their
//! screen-specific actions.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    /// Down arrow
    Next,
    /// Up arrow
    Previous,
    Left,
    Right,
    /// Home
    LineStart,
    /// End
    LineEnd,
    /// Ctrl+Home
    ToTop,
    /// Ctrl+End
    ToBottom,
}
