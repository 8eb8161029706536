use crate::actions::{Action, NavigationAction, TextInputAction};
use crate::capabilities::PanelCapabilities;
use crate::state::AppState;
use ratatui::{
    layout::{Constraint, Layout, Position, Rect},
    widgets::{Block, Borders},
    Frame,
};

pub mod editor_view;
pub mod image_prompt_view;
mod prompt_popup;
pub mod rename_tab_view;
pub mod status_bar;

pub use editor_view::EditorView;
pub use image_prompt_view::ImagePromptView;
pub use rename_tab_view::RenameTabView;

/// View identifier - allows comparing which view is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewId {
    Editor,
    ImagePrompt,
    RenameTab,
}

/// View trait - defines the interface that all views must implement
///
/// This trait must stay object-safe so views can live on the stack as
/// `Box<dyn View>`.
pub trait View: std::fmt::Debug + Send {
    /// Get the unique identifier for this view type
    fn view_id(&self) -> ViewId;

    /// Render this view
    fn render(&self, state: &AppState, area: Rect, f: &mut Frame);

    /// Get the capabilities of this view (for keyboard handling)
    fn capabilities(&self, state: &AppState) -> PanelCapabilities;

    /// Clone this view into a Box
    fn clone_box(&self) -> Box<dyn View>;

    /// Translate a generic navigation action to this view's specific action.
    fn translate_navigation(&self, _nav: NavigationAction) -> Option<Action> {
        None
    }

    /// Translate a generic text input action to this view's specific action.
    fn translate_text_input(&self, _input: TextInputAction) -> Option<Action> {
        None
    }

    /// Translate a mouse click to this view's specific action.
    fn translate_click(&self, _position: Position) -> Option<Action> {
        None
    }

    /// Whether a keymap action may reach the reducers while this view is active
    fn accepts_action(&self, action: &Action) -> bool {
        matches!(action, Action::Global(_))
    }
}

impl Clone for Box<dyn View> {
    fn clone(&self) -> Box<dyn View> {
        self.clone_box()
    }
}

/// Screen regions shared by rendering and layout-dependent reducers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Bordered editor panel
    pub editor: Rect,
    /// One-line status bar at the bottom
    pub status_bar: Rect,
}

/// Split the screen into editor panel and status bar
pub fn layout(screen: Rect) -> ScreenLayout {
    let [editor, status_bar] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(screen);
    ScreenLayout { editor, status_bar }
}

/// Border around the document
pub fn editor_frame<'a>() -> Block<'a> {
    Block::default().borders(Borders::ALL)
}

/// Area the document text is drawn in
pub fn document_area(screen: Rect) -> Rect {
    editor_frame().inner(layout(screen).editor)
}

/// Render the entire application UI
///
/// Views are rendered bottom-up, so floating views on top render last.
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    for view in &state.view_stack {
        view.render(state, area, f);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_reserves_status_row() {
        let screen = Rect::new(0, 0, 80, 24);
        let layout = layout(screen);
        assert_eq!(layout.editor, Rect::new(0, 0, 80, 23));
        assert_eq!(layout.status_bar, Rect::new(0, 23, 80, 1));
    }

    #[test]
    fn test_document_area_is_inside_border() {
        assert_eq!(
            document_area(Rect::new(0, 0, 80, 24)),
            Rect::new(1, 1, 78, 21)
        );
    }
}
