use crate::actions::{Action, RenameTabAction, TextInputAction};
use crate::capabilities::PanelCapabilities;
use crate::state::AppState;
use crate::view_models::PromptViewModel;
use crate::views::prompt_popup::render_prompt;
use crate::views::{View, ViewId};
use ratatui::{layout::Rect, Frame};

/// Floating popup renaming the active tab
#[derive(Debug, Clone)]
pub struct RenameTabView;

impl RenameTabView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RenameTabView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for RenameTabView {
    fn view_id(&self) -> ViewId {
        ViewId::RenameTab
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        render_prompt(&PromptViewModel::rename_tab(state), &state.theme, area, f);
    }

    fn capabilities(&self, _state: &AppState) -> PanelCapabilities {
        PanelCapabilities::TEXT_INPUT
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn translate_text_input(&self, input: TextInputAction) -> Option<Action> {
        let action = match input {
            TextInputAction::Char(c) => RenameTabAction::Char(c),
            TextInputAction::Backspace => RenameTabAction::Backspace,
            TextInputAction::ClearLine => RenameTabAction::Clear,
            TextInputAction::Escape => RenameTabAction::Cancel,
            TextInputAction::Confirm => RenameTabAction::Submit,
        };
        Some(Action::RenameTab(action))
    }

    fn accepts_action(&self, action: &Action) -> bool {
        matches!(
            action,
            Action::RenameTab(_) | Action::TextInput(_) | Action::Global(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::RenameTabState;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_renders_current_input() {
        let mut state = AppState::default();
        state.rename_tab = RenameTabState::new("Release Notes");

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|f| RenameTabView::new().render(&state, f.area(), f))
            .unwrap();

        let buf = terminal.backend().buffer();
        let text: String = (0..24)
            .flat_map(|y| (0..80).map(move |x| (x, y)))
            .map(|(x, y)| buf[(x, y)].symbol().to_string())
            .collect();
        assert!(text.contains("Rename Tab"));
        assert!(text.contains("Release Notes"));
    }

    #[test]
    fn test_translates_text_input() {
        let view = RenameTabView::new();
        assert!(matches!(
            view.translate_text_input(TextInputAction::Confirm),
            Some(Action::RenameTab(RenameTabAction::Submit))
        ));
        assert!(matches!(
            view.translate_text_input(TextInputAction::Char('x')),
            Some(Action::RenameTab(RenameTabAction::Char('x')))
        ));
    }
}
