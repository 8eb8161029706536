//! Global actions - not tied to any specific screen

use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::{Position, Rect};

use crate::views::View;

/// Global actions that affect the entire application
#[derive(Debug, Clone)]
pub enum GlobalAction {
    /// Raw key pressed (before translation)
    KeyPressed(KeyEvent),
    /// Left mouse button pressed at a screen cell (only delivered while
    /// mouse capture is on)
    MouseClicked(Position),
    /// Terminal size changed
    Resize(Rect),
    /// Close the current view (pop from stack)
    Close,
    /// Quit the application
    Quit,
    /// Push a new view onto the stack
    PushView(Box<dyn View>),
}
